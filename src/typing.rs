//! Typing headline animation.
//!
//! The original effect was a self-rescheduling timer chain; here it is
//! an explicit state machine. Each [`tick`](TypingAnimator::tick)
//! advances one step and returns the delay until the next one, so the
//! frame loop only needs to store a deadline — and tests can replay the
//! whole sequence without any real time passing.

use std::time::Duration;

/// Delay after revealing one more character.
pub const GROW_DELAY: Duration = Duration::from_millis(100);

/// Hold on the fully-typed label before erasing begins.
pub const HOLD_FULL_DELAY: Duration = Duration::from_millis(2000);

/// Delay after erasing one character.
pub const SHRINK_DELAY: Duration = Duration::from_millis(50);

/// Hold on the empty string before the next label starts.
pub const HOLD_EMPTY_DELAY: Duration = Duration::from_millis(500);

/// Labels cycled by the default headline.
pub fn default_labels() -> Vec<String> {
    [
        "Web Designer",
        "Web Developer",
        "Graphic Designer",
        "Game Developer",
        "AR/VR Developer",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Growing,
    Shrinking,
}

/// Cyclic grow/shrink animator over a fixed, non-empty label list.
///
/// The character cursor always stays within `0..=len` of the current
/// label; the direction flips exactly at the two ends. The sequence
/// never terminates.
pub struct TypingAnimator {
    labels: Vec<String>,
    label: usize,
    chars: usize,
    phase: Phase,
}

impl TypingAnimator {
    /// `labels` must be non-empty; empty labels are allowed (they just
    /// produce an immediate flip).
    pub fn new(labels: Vec<String>) -> Self {
        assert!(!labels.is_empty(), "typing animator needs at least one label");
        Self {
            labels,
            label: 0,
            chars: 0,
            phase: Phase::Growing,
        }
    }

    /// The currently displayed substring of the current label.
    pub fn display(&self) -> String {
        self.labels[self.label].chars().take(self.chars).collect()
    }

    /// Advance one step and return the delay until the next step.
    pub fn tick(&mut self) -> Duration {
        let len = self.labels[self.label].chars().count();
        match self.phase {
            Phase::Growing => {
                if self.chars < len {
                    self.chars += 1;
                    GROW_DELAY
                } else {
                    self.phase = Phase::Shrinking;
                    HOLD_FULL_DELAY
                }
            }
            Phase::Shrinking => {
                if self.chars > 0 {
                    self.chars -= 1;
                    SHRINK_DELAY
                } else {
                    self.label = (self.label + 1) % self.labels.len();
                    self.phase = Phase::Growing;
                    HOLD_EMPTY_DELAY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(labels: &[&str]) -> TypingAnimator {
        TypingAnimator::new(labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn exact_sequence_for_a_bb() {
        let mut t = animator(&["A", "BB"]);
        let mut seq = Vec::new();
        for _ in 0..12 {
            let delay = t.tick();
            seq.push((t.display(), delay));
        }
        let expected: Vec<(String, Duration)> = vec![
            ("A".into(), GROW_DELAY),
            ("A".into(), HOLD_FULL_DELAY),
            ("".into(), SHRINK_DELAY),
            ("".into(), HOLD_EMPTY_DELAY),
            ("B".into(), GROW_DELAY),
            ("BB".into(), GROW_DELAY),
            ("BB".into(), HOLD_FULL_DELAY),
            ("B".into(), SHRINK_DELAY),
            ("".into(), SHRINK_DELAY),
            ("".into(), HOLD_EMPTY_DELAY),
            // wrapped back to the first label
            ("A".into(), GROW_DELAY),
            ("A".into(), HOLD_FULL_DELAY),
        ];
        assert_eq!(seq, expected);
    }

    #[test]
    fn cursor_stays_within_label_bounds() {
        let mut t = animator(&["abc", "de"]);
        for _ in 0..100 {
            t.tick();
            let len = t.labels[t.label].chars().count();
            assert!(t.chars <= len);
        }
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        let mut t = animator(&["héllo"]);
        t.tick();
        assert_eq!(t.display(), "h");
        t.tick();
        assert_eq!(t.display(), "hé");
    }

    #[test]
    #[should_panic(expected = "at least one label")]
    fn empty_label_list_is_a_construction_error() {
        TypingAnimator::new(Vec::new());
    }
}
