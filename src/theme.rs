/// Accent color of a card, timeline entry or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Blue,
    Purple,
    Teal,
    Green,
}

/// Tailwind classes for one accent. Kept as full literals so the tailwind
/// scanner picks them up from this file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentClasses {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
    pub hover: &'static str,
}

impl Accent {
    pub const fn classes(self) -> AccentClasses {
        match self {
            Accent::Blue => AccentClasses {
                bg: "bg-blue-500/20",
                border: "border-blue-500/30",
                text: "text-blue-400",
                dot: "bg-blue-400",
                hover: "hover:border-blue-400",
            },
            Accent::Purple => AccentClasses {
                bg: "bg-purple-500/20",
                border: "border-purple-500/30",
                text: "text-purple-400",
                dot: "bg-purple-400",
                hover: "hover:border-purple-400",
            },
            Accent::Teal => AccentClasses {
                bg: "bg-teal-500/20",
                border: "border-teal-500/30",
                text: "text-teal-400",
                dot: "bg-teal-400",
                hover: "hover:border-teal-400",
            },
            Accent::Green => AccentClasses {
                bg: "bg-green-500/20",
                border: "border-green-500/30",
                text: "text-green-400",
                dot: "bg-green-400",
                hover: "hover:border-green-400",
            },
        }
    }
}

impl AccentClasses {
    /// Tinted card surface: background, border and hover border together.
    pub fn card(&self) -> String {
        format!("{} border {} {}", self.bg, self.border, self.hover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_accent_has_distinct_classes() {
        let all = [Accent::Blue, Accent::Purple, Accent::Teal, Accent::Green];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.classes().text, b.classes().text);
                assert_ne!(a.classes().dot, b.classes().dot);
            }
        }
    }

    #[test]
    fn test_classes_share_color_family() {
        let c = Accent::Teal.classes();
        for class in [c.bg, c.border, c.text, c.dot, c.hover] {
            assert!(class.contains("teal"), "{class} should be teal");
        }
    }

    #[test]
    fn test_default_is_blue() {
        assert_eq!(Accent::default(), Accent::Blue);
        assert_eq!(
            Accent::Blue.classes().card(),
            "bg-blue-500/20 border border-blue-500/30 hover:border-blue-400"
        );
    }
}
