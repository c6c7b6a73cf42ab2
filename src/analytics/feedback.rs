//! Manager feedback categorization.
//!
//! Feedback is free text. It is mapped to a category by case-sensitive
//! substring containment, checked in a fixed priority order. Text matching
//! none of the markers is uncategorized and is left out of category counts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category inferred from manager feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Feedback containing "Exceeds".
    ExceedsExpectations,
    /// Feedback containing "Meets" (and not "Exceeds").
    MeetsExpectations,
    /// Feedback containing "Needs" (and neither of the above).
    NeedsImprovement,
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackCategory::ExceedsExpectations => write!(f, "Exceeds Expectations"),
            FeedbackCategory::MeetsExpectations => write!(f, "Meets Expectations"),
            FeedbackCategory::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Markers in priority order.
const CATEGORY_MARKERS: [(&str, FeedbackCategory); 3] = [
    ("Exceeds", FeedbackCategory::ExceedsExpectations),
    ("Meets", FeedbackCategory::MeetsExpectations),
    ("Needs", FeedbackCategory::NeedsImprovement),
];

/// Maps feedback text to a category, or `None` if no marker is present.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::{categorize, FeedbackCategory};
///
/// assert_eq!(categorize("Meets Expectations"), Some(FeedbackCategory::MeetsExpectations));
/// assert_eq!(
///     categorize("Exceeds targets, needs to delegate"),
///     Some(FeedbackCategory::ExceedsExpectations)
/// );
/// assert_eq!(categorize("Outstanding"), None);
/// ```
pub fn categorize(feedback: &str) -> Option<FeedbackCategory> {
    CATEGORY_MARKERS
        .iter()
        .find(|(marker, _)| feedback.contains(*marker))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category() {
        assert_eq!(
            categorize("Exceeds Expectations"),
            Some(FeedbackCategory::ExceedsExpectations)
        );
        assert_eq!(
            categorize("Meets Expectations"),
            Some(FeedbackCategory::MeetsExpectations)
        );
        assert_eq!(
            categorize("Needs Improvement"),
            Some(FeedbackCategory::NeedsImprovement)
        );
    }

    #[test]
    fn test_exceeds_wins_over_later_markers() {
        assert_eq!(
            categorize("Needs nothing, Meets and Exceeds"),
            Some(FeedbackCategory::ExceedsExpectations)
        );
    }

    #[test]
    fn test_meets_wins_over_needs() {
        assert_eq!(
            categorize("Needs polish but Meets the bar"),
            Some(FeedbackCategory::MeetsExpectations)
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(categorize("exceeds expectations"), None);
        assert_eq!(categorize("needs improvement"), None);
    }

    #[test]
    fn test_unmatched_text_is_uncategorized() {
        assert_eq!(categorize(""), None);
        assert_eq!(categorize("Solid quarter"), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            FeedbackCategory::ExceedsExpectations.to_string(),
            "Exceeds Expectations"
        );
        assert_eq!(
            FeedbackCategory::NeedsImprovement.to_string(),
            "Needs Improvement"
        );
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&FeedbackCategory::MeetsExpectations).unwrap(),
            "\"meets_expectations\""
        );
    }
}
