//! Performance review analytics: category distribution, promotion tally,
//! review search and per-employee history.
//!
//! Review periods are ordered lexically ("Annual 2023" < "H1 2023"), which
//! only approximates chronology.

use serde::{Deserialize, Serialize};

use super::feedback::{FeedbackCategory, categorize};
use crate::models::{Employee, Performance, RecordStore};

/// Count of reviews per feedback category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDistribution {
    /// Reviews categorized as exceeding expectations.
    pub exceeds_expectations: usize,
    /// Reviews categorized as meeting expectations.
    pub meets_expectations: usize,
    /// Reviews categorized as needing improvement.
    pub needs_improvement: usize,
    /// Reviews whose feedback matched no category.
    pub uncategorized: usize,
}

/// Count of reviews by promotion consideration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionTally {
    /// Reviews flagging the employee for promotion.
    pub considered: usize,
    /// All other reviews.
    pub not_considered: usize,
}

/// A review together with the employee it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// The reviewed employee.
    pub employee_id: String,
    /// The review as found in the source data.
    pub review: Performance,
    /// The category inferred from the feedback, if any.
    pub category: Option<FeedbackCategory>,
}

/// Tallies every review in the store by feedback category.
pub fn feedback_distribution(store: &RecordStore) -> FeedbackDistribution {
    store
        .iter()
        .flat_map(|e| e.performance.iter())
        .fold(FeedbackDistribution::default(), |mut dist, review| {
            match categorize(&review.manager_feedback) {
                Some(FeedbackCategory::ExceedsExpectations) => dist.exceeds_expectations += 1,
                Some(FeedbackCategory::MeetsExpectations) => dist.meets_expectations += 1,
                Some(FeedbackCategory::NeedsImprovement) => dist.needs_improvement += 1,
                None => dist.uncategorized += 1,
            }
            dist
        })
}

/// Tallies every review in the store by promotion consideration.
pub fn promotion_tally(store: &RecordStore) -> PromotionTally {
    store
        .iter()
        .flat_map(|e| e.performance.iter())
        .fold(PromotionTally::default(), |mut tally, review| {
            if review.promotion_consideration {
                tally.considered += 1;
            } else {
                tally.not_considered += 1;
            }
            tally
        })
}

/// Flattens every review in store order.
pub fn all_reviews(store: &RecordStore) -> Vec<ReviewRow> {
    store
        .iter()
        .flat_map(|employee| {
            employee.performance.iter().map(|review| ReviewRow {
                employee_id: employee.id.clone(),
                review: review.clone(),
                category: categorize(&review.manager_feedback),
            })
        })
        .collect()
}

/// Reviews whose employee id, review period or feedback contains `query`,
/// case-insensitively. An empty query matches everything.
pub fn search_reviews(store: &RecordStore, query: &str) -> Vec<ReviewRow> {
    let needle = query.to_lowercase();
    all_reviews(store)
        .into_iter()
        .filter(|row| {
            row.employee_id.to_lowercase().contains(&needle)
                || row.review.review_period.to_lowercase().contains(&needle)
                || row.review.manager_feedback.to_lowercase().contains(&needle)
        })
        .collect()
}

/// An employee's reviews in ascending lexical review-period order (stable).
pub fn review_history(employee: &Employee) -> Vec<&Performance> {
    let mut history: Vec<&Performance> = employee.performance.iter().collect();
    history.sort_by(|a, b| a.review_period.cmp(&b.review_period));
    history
}

/// The review with the lexically greatest period; the earliest inserted wins ties.
pub fn latest_review(employee: &Employee) -> Option<&Performance> {
    employee.performance.iter().fold(None, |latest, review| match latest {
        Some(best) if review.review_period <= best.review_period => Some(best),
        _ => Some(review),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JoiningInfo;

    fn review(period: &str, feedback: &str, promotion: bool) -> Performance {
        Performance {
            review_period: period.to_string(),
            rating: 3.0,
            manager_feedback: feedback.to_string(),
            promotion_consideration: promotion,
        }
    }

    fn employee(id: &str, performance: Vec<Performance>) -> Employee {
        Employee {
            id: id.to_string(),
            joining_info: JoiningInfo {
                joining_date: "2023-01-01".to_string(),
                onboarding_feedback: "Good".to_string(),
                mentor_assigned: false,
                training_completed: true,
            },
            leaves: vec![],
            performance,
            awards: vec![],
            sentiment: vec![],
            activity: vec![],
        }
    }

    fn sample_store() -> RecordStore {
        RecordStore::from_employees(vec![
            employee("EMP0125", vec![review("H1 2023", "Needs Improvement", false)]),
            employee(
                "EMP0310",
                vec![
                    review("H1 2023", "Meets Expectations", true),
                    review("Annual 2023", "Meets Expectations", false),
                ],
            ),
            employee("EMP0262", vec![review("H1 2023", "Exceeds Expectations", false)]),
            employee("EMP0172", vec![review("Annual 2023", "Solid year", false)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_feedback_distribution_excludes_uncategorized() {
        let dist = feedback_distribution(&sample_store());
        assert_eq!(dist.exceeds_expectations, 1);
        assert_eq!(dist.meets_expectations, 2);
        assert_eq!(dist.needs_improvement, 1);
        assert_eq!(dist.uncategorized, 1);
    }

    #[test]
    fn test_promotion_tally() {
        let tally = promotion_tally(&sample_store());
        assert_eq!(tally.considered, 1);
        assert_eq!(tally.not_considered, 4);
    }

    #[test]
    fn test_empty_store_tallies_are_zero() {
        let store = RecordStore::default();
        assert_eq!(feedback_distribution(&store), FeedbackDistribution::default());
        assert_eq!(promotion_tally(&store), PromotionTally::default());
    }

    #[test]
    fn test_all_reviews_in_store_order() {
        let rows = all_reviews(&sample_store());
        let ids: Vec<&str> = rows.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP0125", "EMP0310", "EMP0310", "EMP0262", "EMP0172"]);
        assert_eq!(rows[0].category, Some(FeedbackCategory::NeedsImprovement));
        assert_eq!(rows[4].category, None);
    }

    #[test]
    fn test_search_reviews_matches_period_case_insensitively() {
        let rows = search_reviews(&sample_store(), "annual");
        let ids: Vec<&str> = rows.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP0310", "EMP0172"]);
    }

    #[test]
    fn test_search_reviews_matches_id_and_feedback() {
        assert_eq!(search_reviews(&sample_store(), "emp0262").len(), 1);
        assert_eq!(search_reviews(&sample_store(), "EXCEEDS").len(), 1);
        assert_eq!(search_reviews(&sample_store(), "").len(), 5);
        assert!(search_reviews(&sample_store(), "nobody").is_empty());
    }

    #[test]
    fn test_review_history_is_lexical_ascending() {
        let emp = employee(
            "EMP0310",
            vec![
                review("H1 2023", "Meets Expectations", true),
                review("Annual 2023", "Meets Expectations", false),
            ],
        );
        let periods: Vec<&str> = review_history(&emp)
            .into_iter()
            .map(|r| r.review_period.as_str())
            .collect();
        assert_eq!(periods, vec!["Annual 2023", "H1 2023"]);
    }

    #[test]
    fn test_latest_review_is_lexical_max() {
        let emp = employee(
            "EMP0310",
            vec![
                review("Annual 2023", "Needs Improvement", false),
                review("H1 2023", "Meets Expectations", true),
            ],
        );
        assert_eq!(latest_review(&emp).unwrap().review_period, "H1 2023");
    }

    #[test]
    fn test_latest_review_tie_takes_first_inserted() {
        let emp = employee(
            "EMP1",
            vec![
                review("H1 2023", "Exceeds Expectations", false),
                review("H1 2023", "Needs Improvement", false),
            ],
        );
        assert_eq!(
            latest_review(&emp).unwrap().manager_feedback,
            "Exceeds Expectations"
        );
        assert!(latest_review(&employee("EMP2", vec![])).is_none());
    }
}
