//! Organization-wide award ranking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Award, RecordStore};

/// An award together with the employee who received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAward {
    /// The recipient.
    pub employee_id: String,
    /// The award as found in the source data.
    pub award: Award,
    /// The parsed award date.
    pub awarded_on: NaiveDate,
}

/// Lists every award across all employees, most recent first.
///
/// The sort is stable: awards sharing a date keep store order, then
/// per-employee insertion order. Taking a prefix gives the top N.
///
/// # Errors
///
/// Returns `MalformedDate` if any award date cannot be parsed.
pub fn recent_awards(store: &RecordStore) -> EngineResult<Vec<RankedAward>> {
    let mut ranked = Vec::new();
    for employee in store.iter() {
        for award in &employee.awards {
            ranked.push(RankedAward {
                employee_id: employee.id.clone(),
                award: award.clone(),
                awarded_on: award.date(&employee.id)?,
            });
        }
    }

    ranked.sort_by(|a, b| b.awarded_on.cmp(&a.awarded_on));
    Ok(ranked)
}
