//! Generator panel state machine.
//!
//! Two phases, Idle and Generating. Every trigger (mount, length
//! change, category toggle, explicit request) re-enters Generating and
//! restarts the publish deadline, so a trigger that lands while a
//! publish is pending simply supersedes it: publication samples
//! whatever the configuration is at that moment, and only one result
//! is published per expired deadline.

use std::time::{Duration, Instant};

use zeroize::Zeroize;

use crate::r#gen::{self, Categories};

/// Cosmetic delay between a trigger and publication of the result.
pub const PUBLISH_DELAY: Duration = Duration::from_millis(100);

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;
const DEFAULT_LENGTH: usize = 10;

/// One of the four toggleable character categories.
#[derive(Debug, Clone, Copy)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Generating { deadline: Instant },
}

/// All panel state. Plain instance fields, one instance per run.
pub struct Panel {
    length: usize,
    categories: Categories,
    result: Option<String>,
    count: u64,
    phase: Phase,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            categories: Categories::default(),
            result: None,
            count: 0,
            phase: Phase::Idle,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn categories(&self) -> Categories {
        self.categories
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Total publications this session.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating { .. })
    }

    /// Copy is available only when a result exists and no publish is
    /// pending.
    pub fn can_copy(&self) -> bool {
        self.result.is_some() && !self.is_generating()
    }

    /// Set an exact length, clamped to the 1-100 bounds. Triggers
    /// regeneration.
    pub fn set_length(&mut self, n: usize) {
        self.length = n.clamp(MIN_LENGTH, MAX_LENGTH);
        self.request_generate();
    }

    /// Nudge the length by `delta`, clamping at the bounds.
    pub fn adjust_length(&mut self, delta: isize) {
        self.set_length(self.length.saturating_add_signed(delta));
    }

    /// Flip one category flag. Triggers regeneration; results are
    /// never memoized, so flipping a flag twice still produces two
    /// fresh strings.
    pub fn toggle(&mut self, category: Category) {
        let flag = match category {
            Category::Uppercase => &mut self.categories.uppercase,
            Category::Lowercase => &mut self.categories.lowercase,
            Category::Digits => &mut self.categories.digits,
            Category::Symbols => &mut self.categories.symbols,
        };
        *flag = !*flag;
        self.request_generate();
    }

    /// Enter the Generating phase, superseding any pending publish.
    pub fn request_generate(&mut self) {
        self.phase = Phase::Generating {
            deadline: Instant::now() + PUBLISH_DELAY,
        };
    }

    /// Time left until the pending publish, if one is pending.
    pub fn time_until_publish(&self) -> Option<Duration> {
        match self.phase {
            Phase::Generating { deadline } => {
                Some(deadline.saturating_duration_since(Instant::now()))
            }
            Phase::Idle => None,
        }
    }

    pub fn publish_due(&self) -> bool {
        matches!(self.phase, Phase::Generating { deadline } if Instant::now() >= deadline)
    }

    /// Resolve the pool, sample a fresh result, bump the counter and
    /// return to Idle. No-op unless a publish is pending. The
    /// superseded result is wiped before it is dropped.
    pub fn publish(&mut self) {
        if !self.is_generating() {
            return;
        }

        let pool = r#gen::resolve(self.categories);
        let fresh = r#gen::sample(&pool, self.length);

        if let Some(mut old) = self.result.take() {
            old.zeroize();
        }
        self.result = Some(fresh);
        self.count += 1;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_increments_per_publication() {
        let mut panel = Panel::new();
        assert_eq!(panel.count(), 0);

        panel.request_generate();
        panel.publish();
        assert_eq!(panel.count(), 1);

        panel.set_length(panel.length()); // no-change trigger still regenerates
        panel.publish();
        assert_eq!(panel.count(), 2);
    }

    #[test]
    fn redundant_toggle_still_regenerates() {
        let mut panel = Panel::new();
        panel.toggle(Category::Symbols);
        panel.publish();
        panel.toggle(Category::Symbols); // back where it started
        panel.publish();
        assert_eq!(panel.count(), 2);
        assert!(!panel.categories().symbols);
    }

    #[test]
    fn superseding_triggers_publish_once() {
        let mut panel = Panel::new();
        panel.set_length(20);
        panel.toggle(Category::Digits);
        panel.request_generate();
        panel.publish();
        assert_eq!(panel.count(), 1);

        panel.publish(); // Idle: no effect
        assert_eq!(panel.count(), 1);
    }

    #[test]
    fn copy_guards() {
        let mut panel = Panel::new();
        assert!(!panel.can_copy()); // nothing generated yet

        panel.request_generate();
        assert!(!panel.can_copy()); // generating

        panel.publish();
        assert!(panel.can_copy());

        panel.toggle(Category::Uppercase);
        assert!(!panel.can_copy()); // generating again
    }

    #[test]
    fn length_is_clamped_on_every_path() {
        let mut panel = Panel::new();
        panel.set_length(0);
        assert_eq!(panel.length(), 1);
        panel.set_length(250);
        assert_eq!(panel.length(), 100);
        panel.adjust_length(10);
        assert_eq!(panel.length(), 100);
        panel.set_length(1);
        panel.adjust_length(-10);
        assert_eq!(panel.length(), 1);
    }

    #[test]
    fn published_result_matches_config() {
        let mut panel = Panel::new();
        panel.toggle(Category::Lowercase);
        panel.toggle(Category::Digits); // leaves uppercase only
        panel.set_length(5);
        panel.publish();

        let result = panel.result().unwrap();
        assert_eq!(result.len(), 5);
        assert!(result.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn phase_returns_to_idle_after_publish() {
        let mut panel = Panel::new();
        panel.request_generate();
        assert!(panel.is_generating());
        assert!(panel.time_until_publish().is_some());

        panel.publish();
        assert!(!panel.is_generating());
        assert!(panel.time_until_publish().is_none());
    }
}
