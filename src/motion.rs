//! Declarative entrance animations.
//!
//! Every animated element carries an [`Entrance`]: the pose it starts in, the
//! pose it settles in, and the transition between them. The rendering layer
//! turns that into an inline `style` and the browser's CSS transitions do the
//! rest once the owning section flips to visible.

use crate::content::SkillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Opacity plus a 2D offset (px) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub fn css(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px, {}px) scale({})",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Seconds, like the rest of the page's timing constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.6,
            easing: Easing::EaseOut,
        }
    }
}

impl Timing {
    /// `transition` declaration covering `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        let parts = properties
            .iter()
            .map(|p| {
                format!(
                    "{p} {:.2}s {} {:.2}s",
                    self.duration,
                    self.easing.css(),
                    self.delay
                )
            })
            .collect::<Vec<_>>();
        format!("transition:{}", parts.join(","))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub to: Pose,
    pub timing: Timing,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::fade()
    }
}

impl Entrance {
    pub fn fade() -> Self {
        Self {
            from: Pose::HIDDEN,
            to: Pose::REST,
            timing: Timing::default(),
        }
    }

    /// Fade in while rising `offset` px.
    pub fn fade_up(offset: f32) -> Self {
        Self {
            from: Pose {
                y: offset,
                ..Pose::HIDDEN
            },
            ..Self::fade()
        }
    }

    /// Fade in while moving right from `offset` px (negative is left).
    pub fn slide_in(offset: f32) -> Self {
        Self {
            from: Pose {
                x: offset,
                ..Pose::HIDDEN
            },
            ..Self::fade()
        }
    }

    /// Grow from nothing. Opacity stays at 1.
    pub fn pop() -> Self {
        Self {
            from: Pose {
                scale: 0.0,
                ..Pose::REST
            },
            ..Self::fade()
        }
    }

    pub fn zoom(from_scale: f32) -> Self {
        Self {
            from: Pose {
                scale: from_scale,
                ..Pose::HIDDEN
            },
            ..Self::fade()
        }
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.timing.delay = secs;
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.timing.duration = secs;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.timing.easing = easing;
        self
    }

    pub fn style(&self, visible: bool) -> String {
        let pose = if visible { self.to } else { self.from };
        format!(
            "{};{}",
            pose.css(),
            self.timing.css(&["opacity", "transform"])
        )
    }
}

/// Delay schedule for a list of siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub offset: f32,
    pub step: f32,
}

impl Stagger {
    pub const fn new(offset: f32, step: f32) -> Self {
        Self { offset, step }
    }

    pub fn at(&self, index: usize) -> f32 {
        self.offset + index as f32 * self.step
    }

    /// Delay of child `inner` of sibling `outer`.
    pub fn nested(&self, outer: usize, inner_step: f32, inner: usize) -> f32 {
        self.at(outer) + inner as f32 * inner_step
    }
}

/// Inline style for a skill bar fill: `level%` of the track once visible.
pub fn fill_style(level: SkillLevel, visible: bool, timing: Timing) -> String {
    let width = if visible { level.percent() } else { 0 };
    format!("width:{width}%;{}", timing.css(&["width"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_up_styles() {
        let e = Entrance::fade_up(30.0).delay(0.3).duration(0.8);
        let hidden = e.style(false);
        assert!(hidden.starts_with("opacity:0;transform:translate(0px, 30px) scale(1)"));
        let shown = e.style(true);
        assert!(shown.starts_with("opacity:1;transform:translate(0px, 0px) scale(1)"));
        assert!(shown.contains("opacity 0.80s ease-out 0.30s"));
        assert!(shown.contains("transform 0.80s ease-out 0.30s"));
    }

    #[test]
    fn test_pop_keeps_opacity() {
        let e = Entrance::pop();
        assert!(e.style(false).starts_with("opacity:1;transform:translate(0px, 0px) scale(0)"));
    }

    #[test]
    fn test_slide_in_from_left() {
        let e = Entrance::slide_in(-50.0);
        assert!(e.style(false).contains("translate(-50px, 0px)"));
    }

    #[test]
    fn test_stagger() {
        let s = Stagger::new(0.5, 0.2);
        assert_eq!(s.at(0), 0.5);
        assert!((s.at(2) - 0.9).abs() < 1e-6);
        assert!((s.nested(1, 0.1, 3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fill_width_follows_level() {
        let timing = Timing {
            delay: 0.5,
            duration: 1.0,
            easing: Easing::EaseOut,
        };
        let level = SkillLevel::new(88);
        assert!(fill_style(level, true, timing).starts_with("width:88%;"));
        assert!(fill_style(level, false, timing).starts_with("width:0%;"));
        assert!(fill_style(level, true, timing).ends_with("transition:width 1.00s ease-out 0.50s"));
    }

    #[test]
    fn test_fill_width_is_monotonic() {
        let widths = (0..=100u8)
            .map(|l| {
                fill_style(SkillLevel::new(l), true, Timing::default())
                    .trim_start_matches("width:")
                    .split('%')
                    .next()
                    .and_then(|w| w.parse::<u8>().ok())
                    .unwrap()
            })
            .collect::<Vec<_>>();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(widths.first(), Some(&0));
        assert_eq!(widths.last(), Some(&100));
    }
}
