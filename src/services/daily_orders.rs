//! Daily order volume and revenue.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::OrderRecord;

/// One calendar day of order activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrdersRow {
    pub date: NaiveDate,
    /// Distinct orders purchased on this day.
    pub order_count: usize,
    /// Sum of order-item values purchased on this day.
    pub revenue: f64,
}

/// Totals derived from the daily table, never recomputed from the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
}

impl OrdersSummary {
    pub fn from_rows(rows: &[DailyOrdersRow]) -> Self {
        Self {
            total_orders: rows.iter().map(|r| r.order_count).sum(),
            total_revenue: rows.iter().map(|r| r.revenue).sum(),
        }
    }
}

/// Group the filtered records by purchase day.
///
/// Every calendar day between the min and max filtered purchase date appears
/// in the output, zero-filled where no orders landed, so a line chart over
/// the result has no gaps. Empty input yields an empty table.
pub fn compute_daily_orders(records: &[OrderRecord]) -> Vec<DailyOrdersRow> {
    let mut orders_by_day: HashMap<NaiveDate, HashSet<&str>> = HashMap::new();
    let mut revenue_by_day: HashMap<NaiveDate, f64> = HashMap::new();

    for record in records {
        let day = record.purchase_date();
        orders_by_day
            .entry(day)
            .or_default()
            .insert(record.order_id.as_str());
        *revenue_by_day.entry(day).or_default() += record.order_item_value;
    }

    let (min, max) = match records
        .iter()
        .map(|r| r.purchase_date())
        .fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        }) {
        Some(range) => range,
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    let mut day = min;
    while day <= max {
        rows.push(DailyOrdersRow {
            date: day,
            order_count: orders_by_day.get(&day).map_or(0, |s| s.len()),
            revenue: revenue_by_day.get(&day).copied().unwrap_or(0.0),
        });
        day = day
            .checked_add_days(Days::new(1))
            .expect("date range within calendar bounds");
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::record;

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(compute_daily_orders(&[]).is_empty());
    }

    #[test]
    fn test_zero_fills_gap_days() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-03-04 12:00:00", "SP", 20.0),
        ];
        let rows = compute_daily_orders(&records);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].order_count, 0);
        assert_eq!(rows[1].revenue, 0.0);
        assert_eq!(rows[3].order_count, 1);
    }

    #[test]
    fn test_counts_distinct_orders_not_items() {
        // Two items in the same order on the same day.
        let mut second_item = record("o1", "u1", "2018-03-01 10:00:00", "SP", 15.0);
        second_item.order_item_id = 2;
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            second_item,
        ];
        let rows = compute_daily_orders(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_count, 1);
        assert!((rows[0].revenue - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_matches_table() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-03-02 10:00:00", "SP", 20.0),
            record("o3", "u3", "2018-03-02 11:00:00", "RJ", 5.0),
        ];
        let rows = compute_daily_orders(&records);
        let summary = OrdersSummary::from_rows(&rows);
        assert_eq!(summary.total_orders, 3);
        assert!((summary.total_revenue - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-03-03 10:00:00", "SP", 20.0),
        ];
        assert_eq!(compute_daily_orders(&records), compute_daily_orders(&records));
    }
}
