//! Image fade-in: every image renders transparent and ramps to opaque
//! from the instant its pixels arrive. Images that were already decoded
//! when first drawn start fully opaque.

use std::time::{Duration, Instant};

/// Fade-in duration.
pub const IMAGE_FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFade {
    loaded_at: Option<Instant>,
    instant: bool,
}

impl ImageFade {
    /// An image that was already available at first draw: no fade.
    pub fn already_loaded() -> Self {
        Self { loaded_at: None, instant: true }
    }

    /// Record the load instant. Later calls keep the first one.
    pub fn mark_loaded(&mut self, now: Instant) {
        if self.loaded_at.is_none() && !self.instant {
            self.loaded_at = Some(now);
        }
    }

    pub fn alpha(&self, now: Instant) -> f32 {
        if self.instant {
            return 1.0;
        }
        match self.loaded_at {
            None => 0.0,
            Some(at) => {
                let t = now.saturating_duration_since(at).as_secs_f32();
                (t / IMAGE_FADE.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    pub fn animating(&self, now: Instant) -> bool {
        !self.instant && self.loaded_at.is_some() && self.alpha(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_until_loaded() {
        let fade = ImageFade::default();
        assert_eq!(fade.alpha(Instant::now()), 0.0);
    }

    #[test]
    fn ramps_to_opaque_after_load() {
        let now = Instant::now();
        let mut fade = ImageFade::default();
        fade.mark_loaded(now);
        assert_eq!(fade.alpha(now), 0.0);
        let mid = fade.alpha(now + Duration::from_millis(250));
        assert!(mid > 0.4 && mid < 0.6);
        assert_eq!(fade.alpha(now + IMAGE_FADE), 1.0);
        assert!(!fade.animating(now + IMAGE_FADE));
    }

    #[test]
    fn cached_images_skip_the_fade() {
        let fade = ImageFade::already_loaded();
        assert_eq!(fade.alpha(Instant::now()), 1.0);
    }

    #[test]
    fn first_load_instant_wins() {
        let now = Instant::now();
        let mut fade = ImageFade::default();
        fade.mark_loaded(now);
        fade.mark_loaded(now + Duration::from_secs(5));
        assert_eq!(fade.alpha(now + IMAGE_FADE), 1.0);
    }
}
