//! Record filtering: date range plus state/city selections.
//!
//! The filter is the only thing standing between the raw dataset and the
//! aggregate builders. It always produces a fresh `Vec` so builders never
//! share a view of mutable data with anything else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::models::OrderRecord;

/// Analyst-chosen filter. Unset date bounds default to the dataset's own
/// min/max purchase date; empty state/city lists mean "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl FilterCriteria {
    /// Apply the filter to the dataset, ANDing every active predicate.
    ///
    /// Date bounds are inclusive at day granularity. An inverted range
    /// (end before start) or a selection matching nothing yields an empty
    /// result, never an error; the builders all accept empty input.
    pub fn apply(&self, dataset: &Dataset) -> Vec<OrderRecord> {
        let (dataset_min, dataset_max) = match dataset.date_range() {
            Some(range) => range,
            None => return Vec::new(),
        };
        let start = self.start_date.unwrap_or(dataset_min);
        let end = self.end_date.unwrap_or(dataset_max);

        dataset
            .records()
            .iter()
            .filter(|r| {
                let date = r.purchase_date();
                date >= start
                    && date <= end
                    && (self.states.is_empty() || self.states.contains(&r.customer_state))
                    && (self.cities.is_empty() || self.cities.contains(&r.customer_city))
            })
            .cloned()
            .collect()
    }
}
