//! Granularity-adaptive order heatmap: orders per (time bucket, state).

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::OrderRecord;

/// Time-bucket resolution for the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
}

impl Granularity {
    /// First day of the bucket containing `date`.
    ///
    /// Conventions are fixed so grouping is reproducible: weeks are ISO
    /// weeks starting Monday, months are calendar months, quarters start in
    /// January, April, July and October.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => date.week(Weekday::Mon).first_day(),
            Granularity::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .expect("first of month is always valid"),
            Granularity::Quarter => {
                let quarter_month = ((date.month() - 1) / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), quarter_month, 1)
                    .expect("first month of quarter is always valid")
            }
        }
    }
}

/// Which bucket views to expose for a filtered span of `date_diff` days.
/// Ordered lookup, coarser views unlock as the span grows.
const GRANULARITY_LADDER: &[(i64, &[Granularity])] = &[
    (7, &[Granularity::Day]),
    (30, &[Granularity::Day, Granularity::Week]),
    (90, &[Granularity::Day, Granularity::Week, Granularity::Month]),
    (
        i64::MAX,
        &[
            Granularity::Day,
            Granularity::Week,
            Granularity::Month,
            Granularity::Quarter,
        ],
    ),
];

/// Pick the bucket resolutions to render for a span of `date_diff` days
/// (max filtered date minus min filtered date).
pub fn granularities_for_span(date_diff: i64) -> &'static [Granularity] {
    GRANULARITY_LADDER
        .iter()
        .find(|(upper, _)| date_diff < *upper)
        .map(|(_, granularities)| *granularities)
        .unwrap_or(&[])
}

/// Order count for one (bucket, state) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBucketRow {
    /// First day of the bucket.
    pub bucket: NaiveDate,
    pub state: String,
    /// Distinct orders in the cell.
    pub order_count: usize,
}

/// One rendered bucket view of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapView {
    pub granularity: Granularity,
    pub rows: Vec<StateBucketRow>,
}

/// Group orders by (time bucket, state) and count distinct orders per cell.
///
/// Only cells that actually occur are emitted; a missing (bucket, state)
/// combination is an implicit zero. Rows are ordered by bucket then state.
pub fn compute_state_bucket_counts(
    records: &[OrderRecord],
    granularity: Granularity,
) -> Vec<StateBucketRow> {
    let mut cells: HashMap<(NaiveDate, &str), HashSet<&str>> = HashMap::new();
    for record in records {
        cells
            .entry((
                granularity.bucket_start(record.purchase_date()),
                record.customer_state.as_str(),
            ))
            .or_default()
            .insert(record.order_id.as_str());
    }

    let mut rows: Vec<StateBucketRow> = cells
        .into_iter()
        .map(|((bucket, state), orders)| StateBucketRow {
            bucket,
            state: state.to_string(),
            order_count: orders.len(),
        })
        .collect();
    rows.sort_by(|a, b| (a.bucket, a.state.as_str()).cmp(&(b.bucket, b.state.as_str())));
    rows
}

/// Build every bucket view the filtered span calls for.
pub fn compute_heatmap(records: &[OrderRecord]) -> Vec<HeatmapView> {
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.purchase_date()).collect();
    let (min, max) = match (dates.iter().min(), dates.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Vec::new(),
    };
    let date_diff = (max - min).num_days();

    granularities_for_span(date_diff)
        .iter()
        .map(|&granularity| HeatmapView {
            granularity,
            rows: compute_state_bucket_counts(records, granularity),
        })
        .collect()
}
