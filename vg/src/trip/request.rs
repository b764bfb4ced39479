//! Mutable trip configuration and the request it projects to
//!
//! Mutators clamp and normalize instead of rejecting, so no invalid
//! `TripRequest` is representable and there is no validation error path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shortest plannable trip
pub const MIN_DURATION_DAYS: u8 = 1;

/// Longest plannable trip
pub const MAX_DURATION_DAYS: u8 = 7;

/// Canonical interest tags offered by the planner surface
pub const INTEREST_OPTIONS: [&str; 6] = ["Food", "Motors", "Opera", "History", "Art", "Shopping"];

/// A validated generation request
///
/// `duration_days` is always within [1,7]; `interests` is a set (dedup,
/// order-insignificant) and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub duration_days: u8,
    pub interests: BTreeSet<String>,
}

/// The trip configuration the user edits before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    duration_days: u8,
    interests: BTreeSet<String>,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            duration_days: 3,
            interests: ["Food", "Motors"].into_iter().map(String::from).collect(),
        }
    }
}

impl TripDraft {
    /// Create a draft with the default duration and interests
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trip length, clamping to [1,7]
    ///
    /// Always succeeds; out-of-range input is clamped, never rejected.
    pub fn set_duration(&mut self, days: u8) {
        self.duration_days = days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);
    }

    /// Toggle an interest tag in or out of the set
    ///
    /// Applying the same tag twice returns the set to its prior value.
    pub fn toggle_interest(&mut self, tag: &str) {
        if !self.interests.remove(tag) {
            self.interests.insert(tag.to_string());
        }
    }

    /// Drop every interest tag
    pub fn clear_interests(&mut self) {
        self.interests.clear();
    }

    pub fn duration_days(&self) -> u8 {
        self.duration_days
    }

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.contains(tag)
    }

    /// Project the draft into a request
    ///
    /// Pure; always succeeds since the draft is valid by construction.
    pub fn build_request(&self) -> TripRequest {
        TripRequest {
            duration_days: self.duration_days,
            interests: self.interests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let draft = TripDraft::new();
        assert_eq!(draft.duration_days(), 3);
        assert!(draft.has_interest("Food"));
        assert!(draft.has_interest("Motors"));
        assert_eq!(draft.interests().len(), 2);
    }

    #[test]
    fn test_set_duration_clamps_low() {
        let mut draft = TripDraft::new();
        draft.set_duration(0);
        assert_eq!(draft.duration_days(), 1);
    }

    #[test]
    fn test_set_duration_clamps_high() {
        let mut draft = TripDraft::new();
        draft.set_duration(30);
        assert_eq!(draft.duration_days(), 7);
    }

    #[test]
    fn test_toggle_interest_adds_and_removes() {
        let mut draft = TripDraft::new();
        assert!(!draft.has_interest("Opera"));

        draft.toggle_interest("Opera");
        assert!(draft.has_interest("Opera"));

        draft.toggle_interest("Opera");
        assert!(!draft.has_interest("Opera"));
    }

    #[test]
    fn test_empty_interest_set_is_valid() {
        let mut draft = TripDraft::new();
        draft.clear_interests();

        let request = draft.build_request();
        assert!(request.interests.is_empty());
    }

    #[test]
    fn test_build_request_is_pure() {
        let draft = TripDraft::new();
        let a = draft.build_request();
        let b = draft.build_request();
        assert_eq!(a, b);
        assert_eq!(a.duration_days, draft.duration_days());
    }

    proptest! {
        #[test]
        fn prop_duration_always_clamped(n in any::<u8>()) {
            let mut draft = TripDraft::new();
            draft.set_duration(n);
            let request = draft.build_request();
            prop_assert_eq!(request.duration_days, n.clamp(1, 7));
        }

        #[test]
        fn prop_toggle_is_involution(tag in "[A-Za-z]{1,12}") {
            let mut draft = TripDraft::new();
            let before = draft.interests().clone();

            draft.toggle_interest(&tag);
            draft.toggle_interest(&tag);

            prop_assert_eq!(draft.interests(), &before);
        }
    }
}
