use crate::content::{Skill, ALL_CATEGORY};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn name(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Only(name) => name,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORY {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

/// Category and free-text search applied to the skill grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub category: CategoryFilter,
    pub term: String,
}

impl SkillFilter {
    pub fn new(category: impl Into<CategoryFilter>, term: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            term: term.into(),
        }
    }

    pub fn accepts(&self, skill: &Skill) -> bool {
        self.category.matches(skill.category)
            && skill
                .name
                .to_lowercase()
                .contains(&self.term.to_lowercase())
    }

    /// Skills passing both predicates, in their original order.
    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.accepts(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SKILLS, SKILL_CATEGORIES};

    // Helper collecting skill names for readable assertions
    fn names(skills: Vec<&Skill>) -> Vec<&str> {
        skills.into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let filter = SkillFilter::default();
        assert_eq!(filter.category.name(), "All");
        assert_eq!(filter.apply(SKILLS).len(), SKILLS.len());
    }

    #[test]
    fn test_category_only() {
        let filter = SkillFilter::new("Database", "");
        assert_eq!(names(filter.apply(SKILLS)), vec!["MongoDB", "MySQL"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = SkillFilter::new("All", "SCRIPT");
        assert_eq!(
            names(filter.apply(SKILLS)),
            vec!["JavaScript", "TypeScript"]
        );

        let filter = SkillFilter::new("Tools", "git");
        assert_eq!(names(filter.apply(SKILLS)), vec!["Git", "GitHub"]);
    }

    #[test]
    fn test_both_predicates_required() {
        // "SQL" is a Programming skill, "MySQL" a Database one
        let filter = SkillFilter::new("Database", "sql");
        assert_eq!(names(filter.apply(SKILLS)), vec!["MySQL"]);
    }

    #[test]
    fn test_empty_result() {
        assert!(SkillFilter::new("Frontend", "rust").apply(SKILLS).is_empty());
        assert!(SkillFilter::new("Cooking", "").apply(SKILLS).is_empty());
    }

    #[test]
    fn test_matches_reference_definition() {
        let terms = ["", "s", "JS", ".", "css", "zzz"];
        for category in SKILL_CATEGORIES {
            for term in terms {
                let filter = SkillFilter::new(category.name, term);
                let expected = SKILLS
                    .iter()
                    .filter(|s| {
                        (category.name == "All" || s.category == category.name)
                            && s.name.to_lowercase().contains(&term.to_lowercase())
                    })
                    .collect::<Vec<_>>();
                let once = filter.apply(SKILLS);
                assert_eq!(once, expected, "{} / {term}", category.name);

                // idempotent
                let again = once.iter().map(|s| **s).collect::<Vec<_>>();
                assert_eq!(filter.apply(&again).len(), once.len());
            }
        }
    }
}
