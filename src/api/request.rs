//! Query parameter types for the Workforce Analytics API.
//!
//! Every endpoint is a `GET`; these structures are decoded from the query
//! string. Absent parameters fall back to their documented defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for endpoints evaluated at a point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsOfQuery {
    /// Evaluation date (`YYYY-MM-DD`). Defaults to the configured reference
    /// date, then today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Parameters for `/dashboard/recent-awards`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentAwardsQuery {
    /// Maximum number of awards to return. All awards when absent.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parameters for `/employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryQuery {
    /// Free-text query over name, id and department.
    #[serde(default)]
    pub query: String,
    /// Status filter: `active`, `leave`, or empty for all.
    #[serde(default)]
    pub status: String,
    /// Evaluation date for the status labels.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Parameters for `/performance/reviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSearchQuery {
    /// Free-text query over employee id, review period and feedback.
    #[serde(default)]
    pub query: String,
}
