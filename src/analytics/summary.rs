//! Headline numbers for the dashboard overview.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scalar::{ActivityAverages, average_activity, average_performance, average_sentiment};
use super::status::{StatusCounts, count_by_status};
use crate::error::EngineResult;
use crate::models::RecordStore;

/// The scalar cards of the dashboard overview, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Date the status figures were evaluated at.
    pub as_of: NaiveDate,
    /// Number of employees in the store.
    pub total_employees: usize,
    /// Mean vibe score.
    pub average_sentiment: f64,
    /// Mean performance rating.
    pub average_performance: f64,
    /// Status tally at `as_of`.
    pub status: StatusCounts,
    /// Mean activity figures.
    pub activity: ActivityAverages,
}

/// Builds the dashboard summary at `now`.
///
/// # Errors
///
/// Propagates `MalformedDate` from the status tally.
pub fn dashboard_summary(
    store: &RecordStore,
    now: NaiveDate,
    window_months: u32,
) -> EngineResult<DashboardSummary> {
    Ok(DashboardSummary {
        as_of: now,
        total_employees: store.len(),
        average_sentiment: average_sentiment(store),
        average_performance: average_performance(store),
        status: count_by_status(store, now, window_months)?,
        activity: average_activity(store),
    })
}
