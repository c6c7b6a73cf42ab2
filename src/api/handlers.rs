//! HTTP request handlers for the Workforce Analytics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::{
    build_directory, dashboard_summary, feedback_distribution, list_concern_employees,
    promotion_tally, recent_awards, review_history, search, search_reviews, sentiment_trend,
};
use crate::error::EngineError;

use super::request::{AsOfQuery, DirectoryQuery, RecentAwardsQuery, ReviewSearchQuery};
use super::response::{ApiError, ApiErrorResponse, EmployeeReviews, PerformanceOverview};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard/summary", get(summary_handler))
        .route("/dashboard/sentiment-trend", get(sentiment_trend_handler))
        .route("/dashboard/recent-awards", get(recent_awards_handler))
        .route("/dashboard/concerns", get(concerns_handler))
        .route("/employees", get(directory_handler))
        .route("/employees/:id/reviews", get(employee_reviews_handler))
        .route("/performance/distribution", get(distribution_handler))
        .route("/performance/reviews", get(review_search_handler))
        .with_state(state)
}

fn ok_json<T: Serialize>(value: T) -> Response {
    Json(value).into_response()
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn query_rejected(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text)).into_response()
}

/// Handler for GET /dashboard/summary.
async fn summary_handler(
    State(state): State<AppState>,
    params: Result<Query<AsOfQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard summary request");

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let loader = state.config();
    let now = loader.evaluation_date(params.as_of);
    let start_time = Instant::now();

    match dashboard_summary(loader.store(), now, loader.settings().recently_joined_months) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                as_of = %now,
                employees = summary.total_employees,
                on_leave = summary.status.on_leave,
                duration_us = start_time.elapsed().as_micros(),
                "Dashboard summary computed"
            );
            ok_json(summary)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /dashboard/sentiment-trend.
async fn sentiment_trend_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sentiment trend request");

    match sentiment_trend(state.config().store()) {
        Ok(points) => {
            info!(
                correlation_id = %correlation_id,
                buckets = points.len(),
                "Sentiment trend computed"
            );
            ok_json(points)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /dashboard/recent-awards.
///
/// Returns every award newest first, or the first `limit` of them.
async fn recent_awards_handler(
    State(state): State<AppState>,
    params: Result<Query<RecentAwardsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recent awards request");

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    match recent_awards(state.config().store()) {
        Ok(mut awards) => {
            if let Some(limit) = params.limit {
                awards.truncate(limit);
            }
            info!(
                correlation_id = %correlation_id,
                awards = awards.len(),
                "Recent awards ranked"
            );
            ok_json(awards)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /dashboard/concerns.
async fn concerns_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing concerns request");

    match list_concern_employees(state.config().store()) {
        Ok(ids) => {
            info!(
                correlation_id = %correlation_id,
                flagged = ids.len(),
                "Concern employees listed"
            );
            ok_json(ids)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /employees.
///
/// Builds the directory at the evaluation date and applies the query and
/// status filter.
async fn directory_handler(
    State(state): State<AppState>,
    params: Result<Query<DirectoryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing directory request");

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let loader = state.config();
    let now = loader.evaluation_date(params.as_of);
    let start_time = Instant::now();

    let entries = match build_directory(
        loader.store(),
        loader.directory(),
        now,
        loader.settings().recently_joined_months,
    ) {
        Ok(entries) => entries,
        Err(err) => return engine_error(correlation_id, err),
    };

    let matched = search(&entries, &params.query, &params.status);
    info!(
        correlation_id = %correlation_id,
        as_of = %now,
        total = entries.len(),
        matched = matched.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Directory filtered"
    );
    ok_json(matched)
}

/// Handler for GET /employees/{id}/reviews.
async fn employee_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        "Processing review history request"
    );

    match state.config().store().require(&id) {
        Ok(employee) => ok_json(EmployeeReviews {
            employee_id: employee.id.clone(),
            reviews: review_history(employee).into_iter().cloned().collect(),
        }),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /performance/distribution.
async fn distribution_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance distribution request");

    let store = state.config().store();
    ok_json(PerformanceOverview {
        distribution: feedback_distribution(store),
        promotion: promotion_tally(store),
    })
}

/// Handler for GET /performance/reviews.
async fn review_search_handler(
    State(state): State<AppState>,
    params: Result<Query<ReviewSearchQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing review search request");

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let rows = search_reviews(state.config().store(), &params.query);
    info!(
        correlation_id = %correlation_id,
        matched = rows.len(),
        "Review search completed"
    );
    ok_json(rows)
}
