/// Number of technology badges shown on a collapsed project card.
pub const PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechPreview<'a> {
    pub shown: &'a [&'a str],
    pub hidden: usize,
}

impl<'a> TechPreview<'a> {
    pub fn of(technologies: &'a [&'a str]) -> Self {
        let cut = technologies.len().min(PREVIEW_LIMIT);
        Self {
            shown: &technologies[..cut],
            hidden: technologies.len() - cut,
        }
    }

    /// Badge text for the technologies left out, e.g. `+5`.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_truncates_long_lists() {
        let techs = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let preview = TechPreview::of(&techs);
        assert_eq!(preview.shown, &["a", "b", "c"]);
        assert_eq!(preview.overflow_label().as_deref(), Some("+5"));
    }

    #[test]
    fn test_short_lists_shown_whole() {
        let techs = ["HTML", "CSS", "JavaScript"];
        let preview = TechPreview::of(&techs);
        assert_eq!(preview.shown.len(), 3);
        assert_eq!(preview.overflow_label(), None);

        let preview = TechPreview::of(&[]);
        assert!(preview.shown.is_empty());
        assert_eq!(preview.overflow_label(), None);
    }

    #[test]
    fn test_project_cards() {
        let biomesh = TechPreview::of(PROJECTS[0].technologies);
        assert_eq!(biomesh.shown, &["React", "Tailwind CSS", "Vite"]);
        assert_eq!(biomesh.overflow_label().as_deref(), Some("+5"));

        let price_compare = TechPreview::of(PROJECTS[4].technologies);
        assert_eq!(price_compare.overflow_label().as_deref(), Some("+1"));
    }
}
