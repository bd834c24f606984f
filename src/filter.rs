//! Portfolio grid filtering.
//!
//! Each item carries a category tag; the selected filter decides which
//! items stay in the grid. Visibility changes are little per-item fade
//! machines advanced by an explicit timestamp, so the exact timing
//! behavior (fade out, drop from layout after 300 ms; re-enter layout,
//! fade in after 100 ms) is testable without waiting.
//!
//! The active filter control derives from the stored selection. The
//! original implementation highlighted whatever element happened to be
//! the ambient event target, which broke when invoked from anywhere but
//! a direct click handler; passing the tag and deriving the highlight
//! removes that defect.

use std::time::{Duration, Instant};

/// Fade-out duration, after which a hidden item leaves the layout.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Delay before a re-shown item starts fading in.
pub const FADE_IN_DELAY: Duration = Duration::from_millis(100);

/// Fade-in ramp once the delay has passed.
pub const FADE_IN: Duration = Duration::from_millis(300);

/// The tag matching every item.
pub const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Project link; `None` for items that only open the popup.
    pub link: Option<String>,
    /// Marked items show the "coming soon" popup instead of following
    /// their link.
    pub coming_soon: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Shown,
    Hidden,
    FadingIn { since: Instant },
    FadingOut { since: Instant },
}

/// Filter selection plus per-item fade state.
pub struct FilterState {
    items: Vec<PortfolioItem>,
    visibility: Vec<Visibility>,
    selected: String,
}

impl FilterState {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        let visibility = vec![Visibility::Shown; items.len()];
        Self {
            items,
            visibility,
            selected: ALL.to_string(),
        }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Whether the control for `tag` should render as active.
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected == tag
    }

    /// Select `tag` ("all" or a category) and start the per-item fades.
    pub fn apply(&mut self, tag: &str, now: Instant) {
        self.selected = tag.to_string();
        for (item, vis) in self.items.iter().zip(self.visibility.iter_mut()) {
            let matches = tag == ALL || item.category == tag;
            *vis = match (*vis, matches) {
                (Visibility::Shown, true) => Visibility::Shown,
                (Visibility::Hidden, false) => Visibility::Hidden,
                (_, true) => Visibility::FadingIn { since: now },
                (_, false) => Visibility::FadingOut { since: now },
            };
        }
    }

    /// Settle any fades whose deadline has passed.
    pub fn advance(&mut self, now: Instant) {
        for vis in &mut self.visibility {
            *vis = match *vis {
                Visibility::FadingOut { since } if now >= since + FADE_OUT => Visibility::Hidden,
                Visibility::FadingIn { since } if now >= since + FADE_IN_DELAY + FADE_IN => {
                    Visibility::Shown
                }
                v => v,
            };
        }
    }

    /// Whether item `index` currently occupies grid space.
    pub fn in_layout(&self, index: usize) -> bool {
        !matches!(self.visibility[index], Visibility::Hidden)
    }

    /// Item opacity at `now` (0.0 = invisible, 1.0 = opaque).
    pub fn alpha(&self, index: usize, now: Instant) -> f32 {
        match self.visibility[index] {
            Visibility::Shown => 1.0,
            Visibility::Hidden => 0.0,
            Visibility::FadingOut { since } => {
                let t = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - t / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
            }
            Visibility::FadingIn { since } => {
                let t = now.saturating_duration_since(since).as_secs_f32();
                let delay = FADE_IN_DELAY.as_secs_f32();
                if t <= delay {
                    0.0
                } else {
                    ((t - delay) / FADE_IN.as_secs_f32()).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// True while any fade is still moving, so the UI keeps repainting.
    pub fn animating(&self) -> bool {
        self.visibility
            .iter()
            .any(|v| matches!(v, Visibility::FadingIn { .. } | Visibility::FadingOut { .. }))
    }
}

/// Tags offered by the filter bar, in display order.
pub fn filter_tags(items: &[PortfolioItem]) -> Vec<String> {
    let mut tags = vec![ALL.to_string()];
    for item in items {
        if !tags.iter().any(|t| *t == item.category) {
            tags.push(item.category.clone());
        }
    }
    tags
}

/// Built-in demo grid mirroring the portfolio page.
pub fn default_items() -> Vec<PortfolioItem> {
    let item = |title: &str, desc: &str, cat: &str, link: Option<&str>, soon: bool| {
        PortfolioItem {
            title: title.to_string(),
            description: desc.to_string(),
            category: cat.to_string(),
            link: link.map(String::from),
            coming_soon: soon,
        }
    };
    vec![
        item(
            "Aurora Storefront",
            "Responsive e-commerce front end with a custom checkout flow.",
            "web",
            Some("https://github.com/ext-sakamoro/aurora-storefront"),
            false,
        ),
        item(
            "Pulse Tracker",
            "Cross-platform habit tracker with offline sync.",
            "app",
            Some("https://github.com/ext-sakamoro/pulse-tracker"),
            false,
        ),
        item(
            "Starlane",
            "Arcade space shooter, 60 fps on integrated graphics.",
            "game",
            Some("https://github.com/ext-sakamoro/starlane"),
            false,
        ),
        item(
            "Atlas Brand Kit",
            "Identity system and component library for a travel startup.",
            "design",
            Some("https://github.com/ext-sakamoro/atlas-brand-kit"),
            false,
        ),
        item(
            "Nebula Rooms",
            "Shared-space VR gallery. In development.",
            "game",
            None,
            true,
        ),
        item(
            "Ledgerline",
            "Invoicing dashboard for freelancers.",
            "web",
            Some("https://github.com/ext-sakamoro/ledgerline"),
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<PortfolioItem> {
        default_items()
    }

    #[test]
    fn all_makes_every_item_visible() {
        let now = Instant::now();
        let mut f = FilterState::new(items());
        f.apply("web", now);
        f.advance(now + FADE_OUT + FADE_IN + FADE_IN_DELAY);

        let later = now + Duration::from_secs(1);
        f.apply(ALL, later);
        f.advance(later + FADE_IN_DELAY + FADE_IN);
        for i in 0..f.items().len() {
            assert!(f.in_layout(i));
            assert_eq!(f.alpha(i, later + Duration::from_secs(2)), 1.0);
        }
    }

    #[test]
    fn unmatched_tag_hides_everything_after_fade() {
        let now = Instant::now();
        let mut f = FilterState::new(items());
        f.apply("no-such-category", now);
        // still fading: items keep their layout slot
        for i in 0..f.items().len() {
            assert!(f.in_layout(i));
        }
        f.advance(now + FADE_OUT);
        for i in 0..f.items().len() {
            assert!(!f.in_layout(i));
            assert_eq!(f.alpha(i, now + FADE_OUT), 0.0);
        }
    }

    #[test]
    fn matching_tag_keeps_only_that_category() {
        let now = Instant::now();
        let mut f = FilterState::new(items());
        f.apply("game", now);
        let settled = now + FADE_OUT + FADE_IN_DELAY + FADE_IN;
        f.advance(settled);
        for (i, item) in f.items().to_vec().iter().enumerate() {
            assert_eq!(f.in_layout(i), item.category == "game");
        }
    }

    #[test]
    fn fade_in_waits_out_its_delay() {
        let now = Instant::now();
        let mut f = FilterState::new(items());
        f.apply("design", now);
        f.advance(now + FADE_OUT);
        let later = now + Duration::from_secs(1);
        f.apply(ALL, later);
        // within the delay: in layout but transparent
        let idx = 0;
        assert!(f.in_layout(idx));
        assert_eq!(f.alpha(idx, later + Duration::from_millis(50)), 0.0);
        // past delay + ramp: opaque
        assert_eq!(f.alpha(idx, later + FADE_IN_DELAY + FADE_IN), 1.0);
    }

    #[test]
    fn active_control_derives_from_selection_not_event_target() {
        let mut f = FilterState::new(items());
        f.apply("app", Instant::now());
        assert!(f.is_selected("app"));
        assert!(!f.is_selected(ALL));
        assert_eq!(f.selected(), "app");
    }

    #[test]
    fn filter_tags_are_all_plus_categories_in_order() {
        let tags = filter_tags(&items());
        assert_eq!(tags[0], ALL);
        assert_eq!(tags, vec!["all", "web", "app", "game", "design"]);
    }
}
