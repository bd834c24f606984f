//! Reveal-on-scroll: the native stand-in for the page's intersection
//! observers. The frame loop computes how much of an element is inside
//! the viewport and feeds the ratio to these little animations. Both
//! observers refire on every qualifying frame; the animations are
//! monotonic, so refiring is naturally idempotent.

/// Visible-ratio threshold that triggers the skill-bar animation.
pub const PROGRESS_TRIGGER_RATIO: f32 = 0.5;

/// Visible-ratio threshold for a section's fade-in.
pub const SECTION_REVEAL_RATIO: f32 = 0.1;

/// Bottom margin subtracted from the viewport for section reveals, so a
/// section starts fading in slightly before it truly enters.
pub const SECTION_REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Section fade-in duration in seconds.
pub const SECTION_FADE_SECS: f32 = 0.6;

/// Skill-bar fill duration in seconds.
pub const PROGRESS_FILL_SECS: f32 = 1.0;

/// Distance a section travels upward while fading in.
pub const SECTION_RISE: f32 = 30.0;

/// Fraction of `[top, top + height)` visible inside
/// `[view_top, view_top + view_height)`.
pub fn visible_ratio(top: f32, height: f32, view_top: f32, view_height: f32) -> f32 {
    if height <= 0.0 || view_height <= 0.0 {
        return 0.0;
    }
    let overlap = (top + height).min(view_top + view_height) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// Whether a section at `top`/`height` qualifies for its fade-in, using
/// the margin-shrunk viewport.
pub fn section_qualifies(top: f32, height: f32, view_top: f32, view_height: f32) -> bool {
    let shrunk = (view_height - SECTION_REVEAL_BOTTOM_MARGIN).max(0.0);
    visible_ratio(top, height, view_top, shrunk) >= SECTION_REVEAL_RATIO
}

/// One section's fade-in: opacity 0→1 with a small upward slide. Never
/// fades back out.
#[derive(Debug, Clone, Copy)]
pub struct SectionFade {
    progress: f32,
}

impl Default for SectionFade {
    fn default() -> Self {
        Self { progress: 0.0 }
    }
}

impl SectionFade {
    /// Advance by `dt` seconds if the section qualifies this frame.
    pub fn step(&mut self, dt: f32, qualifies: bool) {
        if qualifies {
            self.progress = (self.progress + dt / SECTION_FADE_SECS).min(1.0);
        }
    }

    pub fn alpha(&self) -> f32 {
        self.progress
    }

    /// Vertical offset: starts [`SECTION_RISE`] below, settles at 0.
    pub fn offset_y(&self) -> f32 {
        (1.0 - self.progress) * SECTION_RISE
    }

    pub fn settled(&self) -> bool {
        self.progress >= 1.0
    }
}

/// One skill bar: fills from zero to its target fraction once triggered.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub label: String,
    target: f32,
    current: f32,
    triggered: bool,
}

impl ProgressBar {
    pub fn new(label: impl Into<String>, target: f32) -> Self {
        Self {
            label: label.into(),
            target: target.clamp(0.0, 1.0),
            current: 0.0,
            triggered: false,
        }
    }

    /// Start (or re-fire) the fill animation. Re-firing after the bar is
    /// full changes nothing.
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn step(&mut self, dt: f32) {
        if self.triggered && self.current < self.target {
            self.current = (self.current + dt * self.target / PROGRESS_FILL_SECS)
                .min(self.target);
        }
    }

    /// Current fill fraction (0.0..=target).
    pub fn fill(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn animating(&self) -> bool {
        self.triggered && self.current < self.target
    }
}

/// Default skill set shown in the about view.
pub fn default_progress_bars() -> Vec<ProgressBar> {
    vec![
        ProgressBar::new("HTML / CSS", 0.95),
        ProgressBar::new("JavaScript", 0.85),
        ProgressBar::new("Rust", 0.80),
        ProgressBar::new("UI Design", 0.75),
        ProgressBar::new("Game Development", 0.65),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_ratio_basics() {
        // fully inside
        assert_eq!(visible_ratio(100.0, 50.0, 0.0, 600.0), 1.0);
        // fully outside
        assert_eq!(visible_ratio(700.0, 50.0, 0.0, 600.0), 0.0);
        // half straddling the bottom edge
        assert!((visible_ratio(575.0, 50.0, 0.0, 600.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn section_margin_shrinks_the_viewport() {
        // 10% visible only inside the bottom margin: does not qualify
        let top = 560.0;
        assert!(!section_qualifies(top, 100.0, 0.0, 600.0));
        // well inside: qualifies
        assert!(section_qualifies(100.0, 100.0, 0.0, 600.0));
    }

    #[test]
    fn section_fade_is_monotonic_and_refire_safe() {
        let mut fade = SectionFade::default();
        fade.step(0.3, true);
        let mid = fade.alpha();
        assert!(mid > 0.0 && mid < 1.0);
        assert!(fade.offset_y() > 0.0);
        // not qualifying: holds, never reverses
        fade.step(1.0, false);
        assert_eq!(fade.alpha(), mid);
        fade.step(10.0, true);
        assert!(fade.settled());
        assert_eq!(fade.offset_y(), 0.0);
        // refire after settling is a no-op
        fade.step(1.0, true);
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn progress_bar_fills_only_after_trigger() {
        let mut bar = ProgressBar::new("Rust", 0.8);
        bar.step(10.0);
        assert_eq!(bar.fill(), 0.0);
        bar.trigger();
        bar.step(0.5);
        assert!(bar.fill() > 0.0 && bar.fill() < 0.8);
        bar.step(10.0);
        assert_eq!(bar.fill(), 0.8);
        // re-trigger on a full bar changes nothing
        bar.trigger();
        bar.step(1.0);
        assert_eq!(bar.fill(), 0.8);
        assert!(!bar.animating());
    }

    #[test]
    fn target_is_clamped() {
        assert_eq!(ProgressBar::new("x", 1.7).target(), 1.0);
    }
}
