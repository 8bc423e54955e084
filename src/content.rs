//! Everything the page says. Plain `'static` records read at render time.

use crate::error::ContentError;
use crate::theme::Accent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Mail,
    Phone,
    MapPin,
    Send,
    Linkedin,
    Github,
    ChevronDown,
    Download,
    Calendar,
    Building,
    ExternalLink,
    TrendingUp,
    Shield,
    DollarSign,
    Target,
    GraduationCap,
}

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Panics on values above 100, which fails compilation in const context.
    pub const fn new(percent: u8) -> Self {
        assert!(percent <= 100, "skill level must be within 0..=100");
        Self(percent)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = ContentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ContentError::SkillLevelOutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub greeting_badge: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub label: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub highlights: &'static [&'static str],
    pub icon: IconKind,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
}

const EMAIL: &str = "bodhisattwa.malik@example.com";

pub static PROFILE: Profile = Profile {
    name: "Bodhisattwa Malik",
    greeting_badge: "Welcome to my portfolio",
    headline: "Data & Business Analytics Professional",
    summary: "PGDM student at Praxis Business School specializing in transforming data into actionable business insights through advanced analytics and strategic thinking.",
};

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Data & Business Analytics professional currently pursuing my PGDM at Praxis Business School. With a strong foundation in financial analysis, marketing analytics, and strategic business intelligence, I transform complex data into actionable insights that drive business growth.",
    "My expertise spans across various domains including cybersecurity research, financial modeling, and data visualization. I believe in the power of data-driven decision making and strive to bridge the gap between technical analysis and business strategy.",
];

pub static STATS: &[Stat] = &[
    Stat {
        figure: "2+",
        label: "Years Experience",
        icon: IconKind::TrendingUp,
    },
    Stat {
        figure: "15+",
        label: "Projects Completed",
        icon: IconKind::Target,
    },
    Stat {
        figure: "1",
        label: "PGDM Degree",
        icon: IconKind::GraduationCap,
    },
];

pub static FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        label: "Advanced Data Analytics & Visualization",
        accent: Accent::Blue,
    },
    FocusArea {
        label: "Financial Modeling & Analysis",
        accent: Accent::Purple,
    },
    FocusArea {
        label: "Business Intelligence & Strategy",
        accent: Accent::Teal,
    },
    FocusArea {
        label: "Machine Learning Applications",
        accent: Accent::Green,
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "PGDM Student - Data & Business Analytics",
        organization: "Praxis Business School",
        location: "Kolkata, India",
        period: "2023 - Present",
        description: "Specializing in advanced data analytics, financial modeling, and business intelligence. Focusing on practical applications of data science in business strategy and decision-making.",
        highlights: &[
            "Advanced Statistical Analysis & Modeling",
            "Financial Analytics & Risk Assessment",
            "Business Intelligence & Visualization",
            "Strategic Data-Driven Decision Making",
        ],
        accent: Accent::Blue,
    },
    ExperienceEntry {
        title: "Research Analyst",
        organization: "Cybersecurity Research",
        location: "Remote",
        period: "2022 - 2023",
        description: "Conducted comprehensive research on cybersecurity trends, threat analysis, and data protection strategies. Developed analytical frameworks for security risk assessment.",
        highlights: &[
            "Threat Intelligence Analysis",
            "Security Risk Assessment",
            "Data Protection Strategies",
            "Research Publication & Documentation",
        ],
        accent: Accent::Purple,
    },
    ExperienceEntry {
        title: "Financial Analyst Intern",
        organization: "Various Projects",
        location: "India",
        period: "2021 - 2022",
        description: "Worked on multiple financial analysis projects involving market research, investment analysis, and financial modeling for different business scenarios.",
        highlights: &[
            "Financial Modeling & Forecasting",
            "Market Research & Analysis",
            "Investment Portfolio Analysis",
            "Business Valuation Techniques",
        ],
        accent: Accent::Teal,
    },
];

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill {
        name,
        level: SkillLevel::new(level),
    }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Data Analytics",
        accent: Accent::Blue,
        skills: &[
            skill("Python", 90),
            skill("SQL", 85),
            skill("R", 80),
            skill("Excel/VBA", 95),
        ],
    },
    SkillCategory {
        title: "Visualization",
        accent: Accent::Purple,
        skills: &[
            skill("Tableau", 88),
            skill("Power BI", 82),
            skill("Matplotlib/Seaborn", 85),
            skill("Plotly", 78),
        ],
    },
    SkillCategory {
        title: "Business Intelligence",
        accent: Accent::Teal,
        skills: &[
            skill("Financial Modeling", 92),
            skill("Statistical Analysis", 88),
            skill("Market Research", 85),
            skill("Risk Assessment", 80),
        ],
    },
    SkillCategory {
        title: "Technical Skills",
        accent: Accent::Green,
        skills: &[
            skill("Machine Learning", 75),
            skill("Database Management", 82),
            skill("Data Mining", 78),
            skill("ETL Processes", 70),
        ],
    },
];

pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Financial Risk Assessment Model",
        description: "Developed a comprehensive risk assessment model using machine learning algorithms to predict financial risks and optimize investment portfolios.",
        image_url: "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Python", "Scikit-learn", "Pandas", "Tableau"],
        category: "Financial Analytics",
        highlights: &[
            "Risk prediction accuracy of 87%",
            "Portfolio optimization algorithms",
            "Real-time dashboard integration",
            "Automated reporting system",
        ],
        icon: IconKind::DollarSign,
        accent: Accent::Blue,
    },
    ProjectEntry {
        title: "Cybersecurity Threat Analysis",
        description: "Conducted comprehensive analysis of cybersecurity threats and developed predictive models for threat detection and prevention strategies.",
        image_url: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["R", "Python", "SQL", "Power BI"],
        category: "Security Research",
        highlights: &[
            "Threat pattern recognition",
            "Vulnerability assessment framework",
            "Security metrics dashboard",
            "Incident response optimization",
        ],
        icon: IconKind::Shield,
        accent: Accent::Purple,
    },
    ProjectEntry {
        title: "Market Analytics Dashboard",
        description: "Built an interactive dashboard for market trend analysis, customer segmentation, and business performance tracking with real-time data integration.",
        image_url: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Tableau", "SQL", "Excel", "Python"],
        category: "Business Intelligence",
        highlights: &[
            "Real-time data visualization",
            "Customer segmentation analysis",
            "Performance KPI tracking",
            "Automated report generation",
        ],
        icon: IconKind::TrendingUp,
        accent: Accent::Teal,
    },
];

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: EMAIL,
        href: "mailto:bodhisattwa.malik@example.com",
        icon: IconKind::Mail,
        accent: Accent::Blue,
    },
    ContactMethod {
        label: "Phone",
        value: "+91 XXXXX XXXXX",
        href: "tel:+91XXXXXXXXX",
        icon: IconKind::Phone,
        accent: Accent::Purple,
    },
    ContactMethod {
        label: "Location",
        value: "Kolkata, India",
        href: "#",
        icon: IconKind::MapPin,
        accent: Accent::Teal,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: IconKind::Linkedin,
        accent: Accent::Blue,
    },
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: IconKind::Github,
        accent: Accent::Purple,
    },
    SocialLink {
        label: "Email",
        href: "mailto:bodhisattwa.malik@example.com",
        icon: IconKind::Mail,
        accent: Accent::Teal,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_bounds() {
        assert_eq!(SkillLevel::try_from(0).map(SkillLevel::percent), Ok(0));
        assert_eq!(SkillLevel::try_from(100).map(SkillLevel::percent), Ok(100));
        assert_eq!(
            SkillLevel::try_from(101),
            Err(ContentError::SkillLevelOutOfRange(101))
        );
    }

    #[test]
    #[should_panic]
    fn test_skill_level_const_rejects_overflow() {
        let _ = SkillLevel::new(120);
    }

    #[test]
    fn test_literal_content_is_displayable() {
        let strings = EXPERIENCE
            .iter()
            .flat_map(|e| [e.title, e.organization, e.location, e.period, e.description])
            .chain(PROJECTS.iter().flat_map(|p| [p.title, p.description, p.category]))
            .chain(SKILL_CATEGORIES.iter().flat_map(|c| c.skills.iter().map(|s| s.name)))
            .chain(CONTACT_METHODS.iter().flat_map(|c| [c.label, c.value, c.href]));
        for s in strings {
            assert!(!s.trim().is_empty());
        }
    }

    #[test]
    fn test_experience_is_three_entries_in_order() {
        let titles = EXPERIENCE.iter().map(|e| e.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "PGDM Student - Data & Business Analytics",
                "Research Analyst",
                "Financial Analyst Intern",
            ]
        );
        assert!(EXPERIENCE.iter().all(|e| e.highlights.len() == 4));
    }

    #[test]
    fn test_email_contact_uses_mailto() {
        let email = CONTACT_METHODS
            .iter()
            .find(|c| c.label == "Email")
            .expect("email contact should exist");
        assert_eq!(email.href, format!("mailto:{}", email.value));
    }

    #[test]
    fn test_focus_areas_each_get_their_own_dot() {
        let dots = FOCUS_AREAS
            .iter()
            .map(|f| f.accent.classes().dot)
            .collect::<Vec<_>>();
        assert_eq!(
            dots,
            vec!["bg-blue-400", "bg-purple-400", "bg-teal-400", "bg-green-400"]
        );
    }
}
