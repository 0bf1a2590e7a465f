//! HTTP handlers for the REST API.
//!
//! Each handler resolves the common filter query, runs the relevant
//! aggregate builders on a blocking thread, and returns the derived table
//! as JSON. The recomputation is synchronous per request; there is no
//! caching of derived tables.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    CategorySalesResponse, CategoryScoresResponse, DailyOrdersResponse, DeliveryTimesResponse,
    FilterQuery, HealthResponse, HeatmapResponse, OrderDistancesResponse, OverviewResponse,
    RfmResponse, StateCustomersResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::dataset::Dataset;
use crate::filter::FilterCriteria;
use crate::services;
use crate::services::daily_orders::OrdersSummary;
use crate::services::rfm::RfmSummary;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a compute closure over the filtered records on a blocking thread.
async fn compute<T, F>(
    dataset: Arc<Dataset>,
    criteria: FilterCriteria,
    build: F,
) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&[crate::models::OrderRecord]) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let filtered = criteria.apply(&dataset);
        build(&filtered)
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

/// GET /v1/overview
///
/// Dataset metadata the filter UI needs: full date range, states, and the
/// cities available under the current state selection.
pub async fn get_overview(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<OverviewResponse> {
    let criteria = query.to_criteria()?;
    let dataset = state.dataset.clone();

    let response = tokio::task::spawn_blocking(move || {
        let (min_date, max_date) = match dataset.date_range() {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };
        OverviewResponse {
            record_count: dataset.len(),
            skipped_rows: dataset.skipped_rows(),
            checksum: dataset.checksum().to_string(),
            min_date,
            max_date,
            states: dataset.states(),
            cities: dataset.cities(&criteria.states),
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))?;

    Ok(Json(response))
}

/// GET /v1/daily-orders
pub async fn get_daily_orders(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<DailyOrdersResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        let rows = services::compute_daily_orders(filtered);
        let summary = OrdersSummary::from_rows(&rows);
        DailyOrdersResponse { rows, summary }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/categories/sales
pub async fn get_category_sales(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<CategorySalesResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        CategorySalesResponse {
            rows: services::compute_category_sales(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/categories/scores
pub async fn get_category_scores(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<CategoryScoresResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        CategoryScoresResponse {
            rows: services::compute_category_scores(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/customers/by-state
pub async fn get_customers_by_state(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<StateCustomersResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        StateCustomersResponse {
            rows: services::compute_customers_by_state(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/orders/distances
pub async fn get_order_distances(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<OrderDistancesResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        OrderDistancesResponse {
            rows: services::compute_order_distances(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/orders/delivery-times
pub async fn get_delivery_times(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<DeliveryTimesResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        DeliveryTimesResponse {
            days: services::delivery_times(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/rfm
pub async fn get_rfm(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<RfmResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        let rows = services::compute_rfm(filtered);
        let summary = RfmSummary::from_rows(&rows);
        RfmResponse { rows, summary }
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/heatmap
///
/// The bucket resolutions are chosen from the span of the filtered dates,
/// so a narrow filter yields only a daily view while a wide one adds
/// weekly, monthly and quarterly views.
pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<HeatmapResponse> {
    let criteria = query.to_criteria()?;
    let response = compute(state.dataset.clone(), criteria, |filtered| {
        HeatmapResponse {
            views: services::compute_heatmap(filtered),
        }
    })
    .await?;
    Ok(Json(response))
}
