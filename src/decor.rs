//! Geometry for the purely decorative layers: the floating particle field and
//! the scroll progress bar.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 40;
pub const PARTICLE_SEED: u64 = 0x5EED_CAFE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the viewport.
    pub left: f32,
    /// Vertical position, percent of the viewport.
    pub top: f32,
    /// Diameter in px.
    pub size: f32,
    /// Seconds per drift cycle.
    pub duration: f32,
    /// Seconds before the first cycle starts.
    pub delay: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;opacity:{:.2};animation-duration:{:.1}s;animation-delay:{:.1}s",
            self.left, self.top, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}

// StdRng is a fixed algorithm (ChaCha12) on every target, so the field comes
// out identical on the server and in the browser and hydration matches.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..4.0),
            duration: rng.gen_range(12.0..28.0),
            delay: rng.gen_range(0.0..10.0),
            opacity: rng.gen_range(0.15..0.6),
        })
        .collect()
}

/// Fraction of the page scrolled past, in `[0, 1]`.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_field_is_deterministic() {
        assert_eq!(
            particle_field(PARTICLE_COUNT, PARTICLE_SEED),
            particle_field(PARTICLE_COUNT, PARTICLE_SEED)
        );
        assert_ne!(particle_field(8, 1), particle_field(8, 2));
    }

    #[test]
    fn test_particle_field_prefix_is_stable() {
        // a longer field extends a shorter one with the same seed
        let short = particle_field(5, PARTICLE_SEED);
        let long = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
        assert_eq!(short[..], long[..5]);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let field = particle_field(500, 42);
        assert_eq!(field.len(), 500);
        for p in field {
            assert!((0.0..=100.0).contains(&p.left));
            assert!((0.0..=100.0).contains(&p.top));
            assert!((1.0..=4.0).contains(&p.size));
            assert!((12.0..=28.0).contains(&p.duration));
            assert!((0.0..=10.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_empty_field() {
        assert!(particle_field(0, PARTICLE_SEED).is_empty());
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // overscroll bounce on some browsers
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
