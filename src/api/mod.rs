//! HTTP API module for the Workforce Analytics Engine.
//!
//! This module provides read-only JSON endpoints over the dashboard
//! aggregates, the employee directory and the review analytics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AsOfQuery, DirectoryQuery, RecentAwardsQuery, ReviewSearchQuery};
pub use response::{ApiError, ApiErrorResponse, EmployeeReviews, PerformanceOverview};
pub use state::AppState;
