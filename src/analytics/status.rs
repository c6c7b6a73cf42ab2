//! Per-employee status classification and the organization-wide tally.
//!
//! Every employee lands in exactly one of the `active` / `on_leave` buckets.
//! `recently_joined` is an independent tag that overlaps either bucket.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::temporal::{months_before, overlaps};
use crate::error::EngineResult;
use crate::models::{Employee, RecordStore};

/// Default look-back window, in calendar months, for the recently-joined tag.
pub const DEFAULT_RECENTLY_JOINED_MONTHS: u32 = 3;

/// Status flags for one employee at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    /// True iff some leave range contains the evaluation date.
    pub on_leave: bool,
    /// True iff the employee joined within the look-back window.
    pub recently_joined: bool,
}

/// Organization-wide status tally.
///
/// `active + on_leave` always equals the number of employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Employees not on leave.
    pub active: usize,
    /// Employees on leave.
    pub on_leave: usize,
    /// Employees tagged as recently joined (overlaps the other two).
    pub recently_joined: usize,
}

/// Classifies an employee at `now`.
///
/// # Arguments
///
/// * `employee` - The employee to classify
/// * `now` - The evaluation date
/// * `window_months` - Look-back window for the recently-joined tag
///
/// # Errors
///
/// Returns `MalformedDate` if a leave or the joining date cannot be parsed.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::{classify, DEFAULT_RECENTLY_JOINED_MONTHS};
/// use workforce_analytics::models::{Employee, JoiningInfo, Leave};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "EMP0125".to_string(),
///     joining_info: JoiningInfo {
///         joining_date: "2023-01-01".to_string(),
///         onboarding_feedback: "Good".to_string(),
///         mentor_assigned: false,
///         training_completed: true,
///     },
///     leaves: vec![Leave {
///         leave_type: "Casual Leave".to_string(),
///         days: 2,
///         start_date: "2/17/2024".to_string(),
///         end_date: "2/18/2024".to_string(),
///     }],
///     performance: vec![],
///     awards: vec![],
///     sentiment: vec![],
///     activity: vec![],
/// };
///
/// let now = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
/// let flags = classify(&employee, now, DEFAULT_RECENTLY_JOINED_MONTHS).unwrap();
/// assert!(flags.on_leave);
/// assert!(!flags.recently_joined);
/// ```
pub fn classify(
    employee: &Employee,
    now: NaiveDate,
    window_months: u32,
) -> EngineResult<StatusFlags> {
    let mut on_leave = false;
    for leave in &employee.leaves {
        if overlaps(leave.start(&employee.id)?, leave.end(&employee.id)?, now) {
            on_leave = true;
            break;
        }
    }

    let recently_joined = employee.joining_date()? >= months_before(now, window_months);

    Ok(StatusFlags {
        on_leave,
        recently_joined,
    })
}

/// Sums per-employee classifications across the store.
///
/// # Errors
///
/// Propagates the first `MalformedDate` encountered; no partial tally is returned.
pub fn count_by_status(
    store: &RecordStore,
    now: NaiveDate,
    window_months: u32,
) -> EngineResult<StatusCounts> {
    store.iter().try_fold(StatusCounts::default(), |counts, employee| {
        let flags = classify(employee, now, window_months)?;
        Ok(StatusCounts {
            active: counts.active + usize::from(!flags.on_leave),
            on_leave: counts.on_leave + usize::from(flags.on_leave),
            recently_joined: counts.recently_joined + usize::from(flags.recently_joined),
        })
    })
}
