//! Employee directory entries and their search/filter.
//!
//! Each entry combines the derived per-employee fields a directory view
//! shows: status label, latest sentiment, latest feedback category and the
//! award/attention indicators.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::concern::{latest_sentiment, needs_attention};
use super::feedback::{FeedbackCategory, categorize};
use super::reviews::latest_review;
use super::status::classify;
use crate::config::DirectoryConfig;
use crate::error::EngineResult;
use crate::models::RecordStore;

/// Role shown for employees without any performance review.
pub const NEW_EMPLOYEE_ROLE: &str = "New Employee";

/// Display status of a directory entry. Leave takes precedence over active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Not on leave.
    Active,
    /// On leave at the evaluation date.
    Leave,
    /// Employment ended. The records carry no end date, so no entry is
    /// currently built with this status; filtering on it matches nothing.
    Inactive,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::Leave => write!(f, "leave"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A status filter as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Matches every entry.
    Any,
    /// Matches entries with this status only.
    Only(EmployeeStatus),
}

impl StatusFilter {
    /// Parses a raw filter value.
    ///
    /// An empty value means no filter. Unrecognized values also mean no
    /// filter, so stale option values never hide the whole directory.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_analytics::analytics::{EmployeeStatus, StatusFilter};
    ///
    /// assert_eq!(StatusFilter::parse(""), StatusFilter::Any);
    /// assert_eq!(StatusFilter::parse("leave"), StatusFilter::Only(EmployeeStatus::Leave));
    /// assert_eq!(StatusFilter::parse("inactive"), StatusFilter::Only(EmployeeStatus::Inactive));
    /// assert_eq!(StatusFilter::parse("retired"), StatusFilter::Any);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => StatusFilter::Any,
            "active" => StatusFilter::Only(EmployeeStatus::Active),
            "leave" => StatusFilter::Only(EmployeeStatus::Leave),
            "inactive" => StatusFilter::Only(EmployeeStatus::Inactive),
            unknown => {
                debug!(status_filter = %unknown, "Unknown status filter, matching all entries");
                StatusFilter::Any
            }
        }
    }

    /// Returns true if the status passes the filter.
    pub fn matches(&self, status: EmployeeStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// One employee as shown in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Latest manager feedback text, or "New Employee" without reviews.
    pub role: String,
    /// Category of the latest feedback, if any.
    pub feedback_category: Option<FeedbackCategory>,
    /// Display status.
    pub status: EmployeeStatus,
    /// Whether the employee joined within the look-back window.
    pub recently_joined: bool,
    /// Vibe score of the latest sentiment response.
    pub sentiment: Option<i64>,
    /// Emotion zone of the latest sentiment response.
    pub sentiment_zone: Option<String>,
    /// Whether the employee holds any award.
    pub has_awards: bool,
    /// Whether the latest sentiment response needs attention.
    pub needs_attention: bool,
}

/// Builds one directory entry per employee, in store order.
///
/// # Errors
///
/// Propagates the first `MalformedDate` encountered.
pub fn build_directory(
    store: &RecordStore,
    directory: &DirectoryConfig,
    now: NaiveDate,
    window_months: u32,
) -> EngineResult<Vec<DirectoryEntry>> {
    store
        .iter()
        .map(|employee| -> EngineResult<DirectoryEntry> {
            let flags = classify(employee, now, window_months)?;
            let latest = latest_sentiment(employee)?;
            let review = latest_review(employee);

            Ok(DirectoryEntry {
                id: employee.id.clone(),
                name: directory.display_name(&employee.id),
                department: directory.department(&employee.id).to_string(),
                role: review
                    .map(|r| r.manager_feedback.clone())
                    .unwrap_or_else(|| NEW_EMPLOYEE_ROLE.to_string()),
                feedback_category: review.and_then(|r| categorize(&r.manager_feedback)),
                status: if flags.on_leave {
                    EmployeeStatus::Leave
                } else {
                    EmployeeStatus::Active
                },
                recently_joined: flags.recently_joined,
                sentiment: latest.map(|s| s.vibe_score),
                sentiment_zone: latest.map(|s| s.emotion_zone.clone()),
                has_awards: employee.has_awards(),
                needs_attention: latest.is_some_and(|s| needs_attention(&s.emotion_zone)),
            })
        })
        .collect()
}

/// Filters directory entries by a free-text query and a status filter.
///
/// The query matches case-insensitively on name, id or department. Both
/// predicates must hold. Order is preserved and nothing is paginated.
pub fn search<'a>(
    entries: &'a [DirectoryEntry],
    query: &str,
    status_filter: &str,
) -> Vec<&'a DirectoryEntry> {
    let needle = query.to_lowercase();
    let filter = StatusFilter::parse(status_filter);

    entries
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                || entry.id.to_lowercase().contains(&needle)
                || entry.department.to_lowercase().contains(&needle)
        })
        .filter(|entry| filter.matches(entry.status))
        .collect()
}
