//! Aggregation logic for the Workforce Analytics Engine.
//!
//! This module contains every derived view the dashboards consume: date
//! utilities, organization-wide averages, status classification, monthly
//! sentiment trend, award ranking, concern detection, feedback
//! categorization, review analytics and the searchable employee directory.
//!
//! All functions are pure reads of a [`RecordStore`](crate::models::RecordStore).

mod concern;
mod directory;
mod feedback;
mod ranking;
mod reviews;
mod scalar;
mod status;
mod summary;
mod temporal;
mod trend;

pub use concern::{
    CONCERN_ZONE_MARKERS, employee_needs_attention, latest_sentiment, list_concern_employees,
    needs_attention,
};
pub use directory::{
    DirectoryEntry, EmployeeStatus, NEW_EMPLOYEE_ROLE, StatusFilter, build_directory, search,
};
pub use feedback::{FeedbackCategory, categorize};
pub use ranking::{RankedAward, recent_awards};
pub use reviews::{
    FeedbackDistribution, PromotionTally, ReviewRow, all_reviews, feedback_distribution,
    latest_review, promotion_tally, review_history, search_reviews,
};
pub use scalar::{ActivityAverages, average_activity, average_performance, average_sentiment};
pub use status::{
    DEFAULT_RECENTLY_JOINED_MONTHS, StatusCounts, StatusFlags, classify, count_by_status,
};
pub use summary::{DashboardSummary, dashboard_summary};
pub use temporal::{month_bucket_key, months_before, overlaps, parse_date};
pub use trend::{TrendPoint, sentiment_trend};
