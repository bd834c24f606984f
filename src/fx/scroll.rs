//! Scroll- and resize-driven chrome.

/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Viewport width at which the mobile drawer is forced closed.
pub const DRAWER_BREAKPOINT: f32 = 1024.0;

/// Whether the scroll-to-top affordance is visible at `offset`.
pub fn show_scroll_top(offset: f32) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Whether the viewport is wide enough that the drawer must not stay
/// open.
pub fn drawer_forced_closed(viewport_width: f32) -> bool {
    viewport_width >= DRAWER_BREAKPOINT
}

/// Detects scroll movement between frames; any movement auto-closes the
/// style-switcher panel.
#[derive(Default)]
pub struct ScrollWatcher {
    last_offset: Option<f32>,
}

impl ScrollWatcher {
    /// Record this frame's offset; returns true if the view scrolled
    /// since the last frame.
    pub fn update(&mut self, offset: f32) -> bool {
        let moved = match self.last_offset {
            Some(prev) => (prev - offset).abs() > f32::EPSILON,
            None => false,
        };
        self.last_offset = Some(offset);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!show_scroll_top(0.0));
        assert!(!show_scroll_top(300.0));
        assert!(show_scroll_top(300.5));
    }

    #[test]
    fn drawer_breakpoint_is_inclusive() {
        assert!(!drawer_forced_closed(1023.9));
        assert!(drawer_forced_closed(1024.0));
    }

    #[test]
    fn watcher_reports_movement_only() {
        let mut w = ScrollWatcher::default();
        assert!(!w.update(0.0)); // first frame: nothing to compare
        assert!(!w.update(0.0));
        assert!(w.update(12.0));
        assert!(!w.update(12.0));
    }
}
