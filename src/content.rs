/// Marks a project without a public deployment.
pub const NO_LIVE_DEMO: &str = "#";

/// Pseudo-category that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume_path: &'static str,
    pub resume_file: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Khushi Bedmutha",
    first_name: "Khushi",
    tagline: "MERN Stack Developer",
    intro: "As a MERN Stack developer, I build user-focused web applications by combining strong technical skills with clear communication and teamwork. I'm driven by curiosity, collaboration, and a passion for continuous learning.",
    email: "khushparv@gmail.com",
    github: "https://github.com/Khushi-Bedmutha",
    linkedin: "https://www.linkedin.com/in/khushi-bedmutha-850041257/",
    resume_path: "/Khushi_Bedmutha_Resume.pdf",
    resume_file: "Khushi_Bedmutha_Resume.pdf",
};

/// A page anchor reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { label: "about", anchor: "home" },
    Section { label: "skills", anchor: "skills" },
    Section { label: "projects", anchor: "projects" },
    Section { label: "experience", anchor: "experience" },
    Section { label: "achievements", anchor: "achievements" },
    Section { label: "contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    /// Classes applied to the filter button while this category is active.
    pub style: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { name: ALL_CATEGORY, style: "bg-blue-600 hover:bg-blue-700" },
    SkillCategory { name: "Programming", style: "bg-emerald-600 hover:bg-emerald-700" },
    SkillCategory { name: "Frontend", style: "bg-purple-600 hover:bg-purple-700" },
    SkillCategory { name: "Backend", style: "bg-orange-600 hover:bg-orange-700" },
    SkillCategory { name: "Database", style: "bg-red-600 hover:bg-red-700" },
    SkillCategory { name: "Tools", style: "bg-slate-600 hover:bg-slate-700" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
}

const fn skill(name: &'static str, category: &'static str) -> Skill {
    Skill { name, category }
}

pub const SKILLS: &[Skill] = &[
    skill("C++", "Programming"),
    skill("JavaScript", "Programming"),
    skill("TypeScript", "Programming"),
    skill("SQL", "Programming"),
    skill("HTML", "Frontend"),
    skill("CSS", "Frontend"),
    skill("React.js", "Frontend"),
    skill("Tailwind CSS", "Frontend"),
    skill("Node.js", "Backend"),
    skill("Express.js", "Backend"),
    skill("MongoDB", "Database"),
    skill("MySQL", "Database"),
    skill("Git", "Tools"),
    skill("GitHub", "Tools"),
    skill("Postman", "Tools"),
    skill("Figma", "Tools"),
    skill("Vite", "Tools"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    /// Either a URL or [`NO_LIVE_DEMO`].
    pub live: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

impl Project {
    pub fn live_demo(&self) -> Option<&'static str> {
        if self.live == NO_LIVE_DEMO {
            None
        } else {
            Some(self.live)
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Biomesh",
        description: "A decentralized AI-powered human body data network for secure collection, storage, and analysis of biometric and medical data using blockchain and AI technologies.",
        full_description: "Biomesh represents a revolutionary approach to healthcare data management, combining blockchain technology with AI to create a secure, decentralized network for medical data. The platform enables users to maintain complete control over their biometric and medical information while facilitating advanced research and AI-driven diagnostics. Built with a focus on privacy, security, and interoperability, Biomesh addresses critical challenges in healthcare data sharing and medical research collaboration.",
        technologies: &["React", "Tailwind CSS", "Vite", "Node.js", "Express.js", "MongoDB", "TypeScript", "AI/ML"],
        github: "https://github.com/Khushi-Bedmutha/Biomesh",
        live: "https://biomesh.vercel.app/",
        role: "MERN Stack Developer",
        duration: "3 months",
        features: &[
            "Decentralized data storage using blockchain",
            "AI-powered medical data analysis",
            "Secure user authentication and authorization",
            "Real-time data synchronization",
            "Privacy-focused data sharing protocols",
        ],
        challenges: &[
            "Implementing blockchain integration for data security",
            "Optimizing AI model performance for real-time analysis",
            "Ensuring HIPAA compliance for medical data",
        ],
    },
    Project {
        id: 2,
        title: "FoodVal",
        description: "A waste-to-energy platform connecting food industries with biogas plants. Features secure authentication, real-time order tracking, and payment processing.",
        full_description: "FoodVal addresses the critical issue of food waste management by creating a digital marketplace that connects food industries with biogas plants and composting facilities. The platform streamlines the process of converting organic waste into valuable resources like biogas and compost, promoting circular economy principles and sustainable waste management practices.",
        technologies: &["React", "TypeScript", "ShadCN", "Node.js", "Express.js", "MongoDB", "Auth0", "Stripe"],
        github: "https://github.com/Khushi-Bedmutha/FoodVal",
        live: "https://foodval-frontend.onrender.com/",
        role: "MERN Stack Developer",
        duration: "2 months",
        features: &[
            "Industry-biogas plant matching system",
            "Real-time order tracking and management",
            "Secure payment processing with Stripe",
            "Auth0 integration for authentication",
            "Responsive design for all devices",
        ],
        challenges: &[
            "Implementing complex order management system",
            "Integrating multiple third-party services",
            "Optimizing database queries for performance",
        ],
    },
    Project {
        id: 3,
        title: "MealsForYou",
        description: "A student-focused meal planning application with polling functionality to optimize food selection in mess services based on majority preference.",
        full_description: "MealsForYou revolutionizes mess management in educational institutions by implementing a democratic approach to meal planning. The platform allows students to vote on meal preferences, helping mess administrators make data-driven decisions about menu planning while ensuring student satisfaction and reducing food waste.",
        technologies: &["HTML", "CSS", "JavaScript"],
        github: "https://github.com/Khushi-Bedmutha/MealsForYou",
        live: "https://meals-for-you.vercel.app",
        role: "Frontend Developer",
        duration: "1 month",
        features: &[
            "Student polling system for meal preferences",
            "Real-time vote counting and results",
            "Admin dashboard for mess management",
            "Mobile-responsive design",
            "User-friendly interface",
        ],
        challenges: &[
            "Implementing real-time polling without backend",
            "Creating responsive design with vanilla CSS",
            "Managing state with vanilla JavaScript",
        ],
    },
    Project {
        id: 4,
        title: "SmartShield",
        description: "IoT-based women safety device using Raspberry Pi. Features emergency switch, real-time location tracking, and automatic alert system with photo capture.",
        full_description: "SmartShield is a comprehensive IoT-based personal safety solution designed specifically for women's security. The device combines hardware and software components to provide immediate emergency response capabilities, including real-time location tracking, automatic alert systems, and evidence collection through photo capture.",
        technologies: &["Raspberry Pi", "IoT", "Python", "LAN", "Camera Module"],
        github: "https://github.com/Khushi-Bedmutha/SmartShield",
        live: NO_LIVE_DEMO,
        role: "IoT Developer",
        duration: "2 months",
        features: &[
            "Emergency button for instant alerts",
            "Real-time GPS location tracking",
            "Automatic photo capture and transmission",
            "Multiple emergency contact notification",
            "Low-power consumption design",
        ],
        challenges: &[
            "Integrating hardware components with software",
            "Ensuring reliable network connectivity",
            "Optimizing power consumption for portability",
        ],
    },
    Project {
        id: 5,
        title: "PriceCompare",
        description: "A price comparison application to help users find the best deals across different platforms.",
        full_description: "PriceCompare is a comprehensive price comparison platform that aggregates product prices from multiple e-commerce websites, helping users make informed purchasing decisions. The application features real-time price tracking, price history analysis, and personalized deal notifications.",
        technologies: &["React", "Node.js", "Express.js", "MongoDB"],
        github: "https://github.com/Khushi-Bedmutha/PriceCompare",
        live: NO_LIVE_DEMO,
        role: "Full Stack Developer",
        duration: "1.5 months",
        features: &[
            "Multi-platform price aggregation",
            "Real-time price tracking",
            "Price history and trend analysis",
            "User wishlist and notifications",
            "Product comparison tools",
        ],
        challenges: &[
            "Web scraping from multiple sources",
            "Handling rate limiting and anti-bot measures",
            "Real-time data synchronization",
        ],
    },
    Project {
        id: 6,
        title: "PrimeStudyAbroad",
        description: "A comprehensive platform for students seeking study abroad opportunities and guidance.",
        full_description: "PrimeStudyAbroad is a complete educational consultancy platform that connects students with study abroad opportunities. The platform provides comprehensive information about universities, courses, application processes, and visa requirements, along with personalized counseling services.",
        technologies: &["React", "Node.js", "Express.js", "MongoDB"],
        github: "https://github.com/Khushi-Bedmutha/prime",
        live: "https://prime-study.netlify.app",
        role: "Frontend Developer",
        duration: "2 months",
        features: &[
            "University and course database",
            "Application tracking system",
            "Document management",
            "Counselor-student communication",
            "Visa and immigration guidance",
        ],
        challenges: &[
            "Managing large datasets efficiently",
            "Implementing complex filtering systems",
            "Creating intuitive user workflows",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    Winner,
    Finalist,
    Certified,
    Other(&'static str),
}

impl AchievementKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Winner => "Winner",
            Self::Finalist => "Finalist",
            Self::Certified => "Certified",
            Self::Other(label) => label,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Winner => "bg-emerald-100 text-emerald-800",
            Self::Finalist => "bg-blue-100 text-blue-800",
            Self::Certified => "bg-purple-100 text-purple-800",
            Self::Other(_) => "bg-orange-100 text-orange-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub kind: AchievementKind,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "IIC Winner 2024",
        organization: "Institution's Innovation Council",
        date: "2024",
        kind: AchievementKind::Winner,
        description: "Won the Institution's Innovation Council competition for innovative project development.",
        icon: "🏆",
    },
    Achievement {
        title: "Smart India Hackathon 2024 Finalist",
        organization: "Government of India",
        date: "2024",
        kind: AchievementKind::Finalist,
        description: "Selected as finalist in the prestigious Smart India Hackathon 2024.",
        icon: "🥈",
    },
    Achievement {
        title: "HackOverFlow 3.0 Finalist",
        organization: "Technical Competition",
        date: "2024",
        kind: AchievementKind::Finalist,
        description: "Reached finals in HackOverFlow 3.0 hackathon competition.",
        icon: "🥉",
    },
    Achievement {
        title: "IoT Mini Project Competition",
        organization: "College Competition",
        date: "2024",
        kind: AchievementKind::Other("3rd Position"),
        description: "Secured third position in IoT Mini Project Competition.",
        icon: "🏅",
    },
    Achievement {
        title: "NPTEL DBMS Certification",
        organization: "NPTEL",
        date: "2024",
        kind: AchievementKind::Certified,
        description: "Successfully completed Database Management Systems course from NPTEL.",
        icon: "📜",
    },
    Achievement {
        title: "AWS Academy Graduate",
        organization: "Amazon Web Services",
        date: "2025",
        kind: AchievementKind::Certified,
        description: "AWS Academy Cloud Foundations certification.",
        icon: "☁️",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub website: Option<&'static str>,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Frontend Development Intern",
        company: "Prime Study Abroad",
        period: "Nov 2024 - Dec 2024",
        description: "Built a full-stack web application using React, Node.js, Express.js, and MongoDB. Worked on UI design, backend API development, user authentication, and API integration.",
        kind: "Internship",
        website: Some("https://prime-study.netlify.app"),
    },
    Experience {
        title: "Frontend Developer Intern",
        company: "AICTE IDEA LAB 2025 Internship Program",
        period: "July 2025 - Present",
        description: "Working on frontend development projects as part of the AICTE IDEA LAB internship program.",
        kind: "Internship",
        website: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Secretary",
        organization: "CSI KKWIEER Student Chapter",
        period: "March 2025 - Present",
        description: "Leading student chapter activities and organizing technical events.",
    },
    Activity {
        title: "Board Of Director HR & Development",
        organization: "Elite Club",
        period: "Dec 2024 - Present",
        description: "Managing HR and development activities for the Elite Club.",
    },
    Activity {
        title: "Organizing Committee and Anchor",
        organization: "Maffick Anchoring, Innovera National Level Hackathon",
        period: "March 2025",
        description: "Organized and anchored national level hackathon events.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub qualification: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub score: &'static str,
    /// Gradient for the icon badge and text color for the score.
    pub accent: (&'static str, &'static str),
}

pub const EDUCATION: &[Education] = &[
    Education {
        qualification: "Bachelor of Technology in Computer Engineering",
        institution: "K. K. Wagh Institute of Engineering and Research, Nashik",
        period: "2022 - Present",
        score: "CGPA: 8.06",
        accent: ("from-blue-600 to-purple-600", "text-blue-600"),
    },
    Education {
        qualification: "Higher Secondary Certificate (HSC)",
        institution: "HSC Board",
        period: "2020 - 2022",
        score: "87.33%",
        accent: ("from-emerald-600 to-teal-600", "text-emerald-600"),
    },
    Education {
        qualification: "Secondary School Certificate (SSC)",
        institution: "CBSE Board",
        period: "2019 - 2020",
        score: "89.6%",
        accent: ("from-purple-600 to-pink-600", "text-purple-600"),
    },
];

pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use url::Url;

    use super::*;

    // Helper asserting a link is an absolute https URL
    fn assert_https(link: &str) {
        let parsed = Url::parse(link).unwrap_or_else(|e| panic!("{link} should parse: {e}"));
        assert_eq!(parsed.scheme(), "https", "{link} should use https");
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_skill_categories_resolve() {
        for skill in SKILLS {
            let matches = SKILL_CATEGORIES
                .iter()
                .filter(|c| c.name == skill.category)
                .count();
            assert_eq!(matches, 1, "{} has category {}", skill.name, skill.category);
            assert_ne!(skill.category, ALL_CATEGORY);
        }
    }

    #[test]
    fn test_live_demo_sentinel() {
        let smart_shield = PROJECTS.iter().find(|p| p.id == 4).unwrap();
        assert_eq!(smart_shield.live_demo(), None);

        let biomesh = PROJECTS.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(biomesh.live_demo(), Some("https://biomesh.vercel.app/"));

        let with_demo = PROJECTS.iter().filter(|p| p.live_demo().is_some()).count();
        assert_eq!(with_demo, 4);
    }

    #[test]
    fn test_links_are_absolute() {
        assert_https(PROFILE.github);
        assert_https(PROFILE.linkedin);
        for project in PROJECTS {
            assert_https(project.github);
            if let Some(live) = project.live_demo() {
                assert_https(live);
            }
        }
        for exp in EXPERIENCES {
            if let Some(site) = exp.website {
                assert_https(site);
            }
        }
    }

    #[test]
    fn test_sections_have_unique_anchors() {
        let anchors = SECTIONS.iter().map(|s| s.anchor).collect::<HashSet<_>>();
        assert_eq!(anchors.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0].anchor, "home");
    }

    #[test]
    fn test_achievement_badges() {
        assert_eq!(AchievementKind::Winner.badge_class(), "bg-emerald-100 text-emerald-800");
        let other = AchievementKind::Other("3rd Position");
        assert_eq!(other.label(), "3rd Position");
        assert_eq!(other.badge_class(), "bg-orange-100 text-orange-800");
    }

    #[test]
    fn test_copyright_year_is_numeric() {
        assert!(copyright_year().parse::<u16>().is_ok());
    }
}
