/// Fraction of an element that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// One-shot entrance trigger. Starts hidden, becomes visible the first time
/// an observation crosses the threshold, and never goes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    threshold: f64,
    state: Visibility,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: Visibility::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Feed one intersection report. Returns `true` only for the call that
    /// performs the Hidden -> Visible transition.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.is_visible() || !intersecting || ratio < self.threshold {
            return false;
        }
        self.state = Visibility::Visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let r = Reveal::default();
        assert_eq!(r.state(), Visibility::Hidden);
        assert_eq!(r.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut r = Reveal::new(0.1);
        assert!(!r.observe(true, 0.0));
        assert!(!r.observe(true, 0.05));
        assert!(!r.observe(false, 0.5));
        assert!(!r.is_visible());
    }

    #[test]
    fn test_transition_fires_exactly_once() {
        let mut r = Reveal::new(0.1);
        let fired = [0.02, 0.1, 0.4, 1.0, 0.3]
            .into_iter()
            .filter(|&ratio| r.observe(true, ratio))
            .count();
        assert_eq!(fired, 1);
        assert!(r.is_visible());
    }

    #[test]
    fn test_never_reverts_on_scroll_out() {
        let mut r = Reveal::new(0.1);
        assert!(r.observe(true, 0.5));
        assert!(!r.observe(false, 0.0));
        assert!(!r.observe(true, 0.0));
        assert_eq!(r.state(), Visibility::Visible);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Reveal::new(-1.0).threshold(), 0.0);
        assert_eq!(Reveal::new(3.0).threshold(), 1.0);
        let mut r = Reveal::new(0.0);
        assert!(r.observe(true, 0.0));
    }
}
