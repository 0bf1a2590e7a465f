//! Request and response types for the REST API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::filter::FilterCriteria;
use crate::services::categories::{CategorySalesRow, CategoryScoreRow};
use crate::services::daily_orders::{DailyOrdersRow, OrdersSummary};
use crate::services::demographics::{OrderDistanceRow, StateCustomerRow};
use crate::services::heatmap::HeatmapView;
use crate::services::rfm::{RfmRow, RfmSummary};

/// Common filter query accepted by every aggregate endpoint.
///
/// `start`/`end` are ISO dates (`YYYY-MM-DD`); `states` and `cities` are
/// comma-separated lists. Anything unset falls back to "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub states: Option<String>,
    pub cities: Option<String>,
}

impl FilterQuery {
    /// Translate the query into filter criteria, rejecting malformed dates.
    pub fn to_criteria(&self) -> Result<FilterCriteria, AppError> {
        Ok(FilterCriteria {
            start_date: parse_date(self.start.as_deref(), "start")?,
            end_date: parse_date(self.end.as_deref(), "end")?,
            states: split_list(self.states.as_deref()),
            cities: split_list(self.cities.as_deref()),
        })
    }
}

fn parse_date(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::BadRequest(format!("invalid {} date '{}', expected YYYY-MM-DD", name, s))
            }),
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// GET /health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

/// Dataset metadata for the filter UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub record_count: usize,
    pub skipped_rows: usize,
    pub checksum: String,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOrdersResponse {
    pub rows: Vec<DailyOrdersRow>,
    pub summary: OrdersSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySalesResponse {
    pub rows: Vec<CategorySalesRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScoresResponse {
    pub rows: Vec<CategoryScoreRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateCustomersResponse {
    pub rows: Vec<StateCustomerRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDistancesResponse {
    pub rows: Vec<OrderDistanceRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryTimesResponse {
    pub days: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfmResponse {
    pub rows: Vec<RfmRow>,
    pub summary: RfmSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub views: Vec<HeatmapView>,
}
