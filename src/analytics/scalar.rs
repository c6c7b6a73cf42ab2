//! Organization-wide scalar averages.
//!
//! Each function is a pure fold over the record store and returns a defined
//! zero when there is nothing to average.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::RecordStore;

/// Per-field mean of every activity entry in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAverages {
    /// Mean chat messages sent.
    pub messages: f64,
    /// Mean emails sent.
    pub emails: f64,
    /// Mean meetings attended.
    pub meetings: f64,
    /// Mean hours worked, rounded to one decimal place.
    pub hours: Decimal,
}

impl ActivityAverages {
    /// The result for a store with no activity entries.
    pub fn zero() -> Self {
        Self {
            messages: 0.0,
            emails: 0.0,
            meetings: 0.0,
            hours: Decimal::ZERO,
        }
    }
}

/// Mean vibe score across every sentiment entry of every employee.
///
/// Returns `0.0` when no sentiment entries exist.
pub fn average_sentiment(store: &RecordStore) -> f64 {
    let (total, count) = store
        .iter()
        .flat_map(|e| e.sentiment.iter())
        .fold((0i128, 0usize), |(total, count), s| {
            (total + i128::from(s.vibe_score), count + 1)
        });

    mean(total as f64, count)
}

/// Mean performance rating across every review of every employee.
///
/// Returns `0.0` when no reviews exist.
pub fn average_performance(store: &RecordStore) -> f64 {
    let (total, count) = store
        .iter()
        .flat_map(|e| e.performance.iter())
        .fold((0.0f64, 0usize), |(total, count), p| (total + p.rating, count + 1));

    mean(total, count)
}

/// Per-field mean of every activity entry of every employee.
///
/// Hours are summed exactly and the mean is rounded to one decimal place,
/// midpoint away from zero. All fields are zero when no entries exist.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::{average_activity, ActivityAverages};
/// use workforce_analytics::models::RecordStore;
///
/// let store = RecordStore::default();
/// assert_eq!(average_activity(&store), ActivityAverages::zero());
/// ```
pub fn average_activity(store: &RecordStore) -> ActivityAverages {
    #[derive(Default)]
    struct Totals {
        messages: u64,
        emails: u64,
        meetings: u64,
        hours: Decimal,
        count: usize,
    }

    let totals = store
        .iter()
        .flat_map(|e| e.activity.iter())
        .fold(Totals::default(), |t, a| Totals {
            messages: t.messages + u64::from(a.messages_sent),
            emails: t.emails + u64::from(a.emails_sent),
            meetings: t.meetings + u64::from(a.meetings_attended),
            hours: t.hours + a.work_hours,
            count: t.count + 1,
        });

    if totals.count == 0 {
        return ActivityAverages::zero();
    }

    let hours = (totals.hours / Decimal::from(totals.count as u64))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    ActivityAverages {
        messages: mean(totals.messages as f64, totals.count),
        emails: mean(totals.emails as f64, totals.count),
        meetings: mean(totals.meetings as f64, totals.count),
        hours,
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
