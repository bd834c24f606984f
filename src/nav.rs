//! Section navigation for the portfolio views.
//!
//! Exactly one [`Section`] is active at a time; the enum makes the
//! "at most one active" invariant structural rather than something the
//! UI has to re-establish on every switch. Unknown section ids are an
//! explicit error so callers (and tests) can tell a rejected input from
//! a successful no-op; the UI layer logs and ignores them.

use std::time::{Duration, Instant};

/// Delay between activating the about view and starting the skill-bar
/// reveal, so the section's own fade-in transition lands first.
pub const PROGRESS_REVEAL_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Portfolio,
    Certificates,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Certificates,
        Section::Contact,
    ];

    /// Stable string id, matching menu entries and anchor fragments.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Certificates => "certificates",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Certificates => "Certificates",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownSection(String),
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavError::UnknownSection(id) => write!(f, "unknown section id: {id:?}"),
        }
    }
}

impl std::error::Error for NavError {}

/// Navigation state: the active section, the mobile drawer, and the
/// pending skill-bar reveal scheduled when the about view is entered.
pub struct NavState {
    current: Section,
    drawer_open: bool,
    progress_reveal_at: Option<Instant>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current: Section::Home,
            drawer_open: false,
            progress_reveal_at: None,
        }
    }
}

impl NavState {
    pub fn current(&self) -> Section {
        self.current
    }

    /// Whether `section`'s menu entry should render as active.
    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    /// Switch to the section named by `id`, closing the mobile drawer.
    ///
    /// Entering the about view schedules the progress-bar reveal
    /// [`PROGRESS_REVEAL_DELAY`] after `now`. An unknown id changes
    /// nothing and reports `NavError::UnknownSection`.
    pub fn activate(&mut self, id: &str, now: Instant) -> Result<Section, NavError> {
        let section =
            Section::from_id(id).ok_or_else(|| NavError::UnknownSection(id.to_string()))?;
        self.current = section;
        self.drawer_open = false;
        if section == Section::About {
            self.progress_reveal_at = Some(now + PROGRESS_REVEAL_DELAY);
        }
        Ok(section)
    }

    /// Typed variant used by hard-coded shortcuts ("hire me" → contact).
    pub fn activate_section(&mut self, section: Section, now: Instant) {
        // id() round-trips, so this cannot fail
        let _ = self.activate(section.id(), now);
    }

    /// True once the scheduled reveal delay has elapsed; consumes the
    /// schedule so the caller fires the animation exactly once per entry.
    pub fn take_progress_reveal(&mut self, now: Instant) -> bool {
        match self.progress_reveal_at {
            Some(at) if now >= at => {
                self.progress_reveal_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

/// Extract the section id from a same-page anchor href (`"#about"` →
/// `"about"`). Returns `None` for external links and bare `"#"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(target) => Some(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_id_activates_exactly_that_section() {
        let now = Instant::now();
        for section in Section::ALL {
            let mut nav = NavState::default();
            assert_eq!(nav.activate(section.id(), now), Ok(section));
            assert_eq!(nav.current(), section);
            // exactly one menu entry active
            let active: Vec<_> = Section::ALL
                .iter()
                .filter(|s| nav.is_active(**s))
                .collect();
            assert_eq!(active, vec![&section]);
        }
    }

    #[test]
    fn unknown_id_is_rejected_and_state_unchanged() {
        let now = Instant::now();
        let mut nav = NavState::default();
        nav.activate("portfolio", now).unwrap();
        let err = nav.activate("blog", now).unwrap_err();
        assert_eq!(err, NavError::UnknownSection("blog".into()));
        assert_eq!(nav.current(), Section::Portfolio);
    }

    #[test]
    fn activation_closes_drawer() {
        let mut nav = NavState::default();
        nav.toggle_drawer();
        assert!(nav.drawer_open());
        nav.activate("about", Instant::now()).unwrap();
        assert!(!nav.drawer_open());
    }

    #[test]
    fn about_schedules_progress_reveal_after_delay() {
        let now = Instant::now();
        let mut nav = NavState::default();
        nav.activate("about", now).unwrap();
        assert!(!nav.take_progress_reveal(now));
        assert!(nav.take_progress_reveal(now + PROGRESS_REVEAL_DELAY));
        // consumed: does not refire
        assert!(!nav.take_progress_reveal(now + PROGRESS_REVEAL_DELAY));
    }

    #[test]
    fn non_about_sections_do_not_schedule_reveal() {
        let now = Instant::now();
        let mut nav = NavState::default();
        nav.activate("contact", now).unwrap();
        assert!(!nav.take_progress_reveal(now + PROGRESS_REVEAL_DELAY));
    }

    #[test]
    fn anchor_parsing() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }
}
