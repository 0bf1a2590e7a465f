//! RFM customer segmentation: recency, frequency, monetary.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::OrderRecord;

/// One customer's RFM scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmRow {
    /// Customer-unique identifier, stable across that customer's orders.
    pub customer_id: String,
    /// Days between the customer's latest purchase and the latest purchase
    /// anywhere in the filtered set, both at day granularity. Zero or more
    /// by construction.
    pub recency_days: i64,
    /// Distinct orders placed by the customer.
    pub frequency: usize,
    /// Total item value across all the customer's order items.
    pub monetary: f64,
}

/// Mean RFM values over the table, with the customer count so an empty
/// table renders as "no data" rather than a fake zero average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmSummary {
    pub customer_count: usize,
    pub mean_recency_days: f64,
    pub mean_frequency: f64,
    pub mean_monetary: f64,
}

impl RfmSummary {
    pub fn from_rows(rows: &[RfmRow]) -> Self {
        if rows.is_empty() {
            return Self {
                customer_count: 0,
                mean_recency_days: 0.0,
                mean_frequency: 0.0,
                mean_monetary: 0.0,
            };
        }
        let n = rows.len() as f64;
        Self {
            customer_count: rows.len(),
            mean_recency_days: rows.iter().map(|r| r.recency_days as f64).sum::<f64>() / n,
            mean_frequency: rows.iter().map(|r| r.frequency as f64).sum::<f64>() / n,
            mean_monetary: rows.iter().map(|r| r.monetary).sum::<f64>() / n,
        }
    }
}

struct CustomerAccumulator {
    customer_id: String,
    latest_purchase: NaiveDate,
    orders: HashSet<String>,
    monetary: f64,
}

/// Group the filtered records by customer-unique-id and score each customer.
///
/// Recency is relative to the max purchase date of the same filtered set,
/// so it is never negative. Rows keep the order in which customers first
/// appear in the input.
pub fn compute_rfm(records: &[OrderRecord]) -> Vec<RfmRow> {
    let reference_date = match records.iter().map(|r| r.purchase_date()).max() {
        Some(date) => date,
        None => return Vec::new(),
    };

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CustomerAccumulator> = Vec::new();

    for record in records {
        let i = match index.get(record.customer_unique_id.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(record.customer_unique_id.as_str(), groups.len());
                groups.push(CustomerAccumulator {
                    customer_id: record.customer_unique_id.clone(),
                    latest_purchase: record.purchase_date(),
                    orders: HashSet::new(),
                    monetary: 0.0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[i];
        group.latest_purchase = group.latest_purchase.max(record.purchase_date());
        group.orders.insert(record.order_id.clone());
        group.monetary += record.order_item_value;
    }

    groups
        .into_iter()
        .map(|g| RfmRow {
            customer_id: g.customer_id,
            recency_days: (reference_date - g.latest_purchase).num_days(),
            frequency: g.orders.len(),
            monetary: g.monetary,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::record;

    #[test]
    fn test_empty_input() {
        assert!(compute_rfm(&[]).is_empty());
        let summary = RfmSummary::from_rows(&[]);
        assert_eq!(summary.customer_count, 0);
        assert_eq!(summary.mean_monetary, 0.0);
    }

    #[test]
    fn test_recency_relative_to_filtered_max() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-03-11 10:00:00", "SP", 20.0),
        ];
        let rows = compute_rfm(&records);
        let u1 = rows.iter().find(|r| r.customer_id == "u1").unwrap();
        let u2 = rows.iter().find(|r| r.customer_id == "u2").unwrap();
        assert_eq!(u1.recency_days, 10);
        assert_eq!(u2.recency_days, 0);
    }

    #[test]
    fn test_frequency_counts_distinct_orders() {
        // Two items of one order plus a second order for the same customer.
        let mut second_item = record("o1", "u1", "2018-03-01 10:00:00", "SP", 5.0);
        second_item.order_item_id = 2;
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            second_item,
            record("o2", "u1", "2018-03-05 10:00:00", "SP", 20.0),
        ];
        let rows = compute_rfm(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].frequency, 2);
        assert!((rows[0].monetary - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_invariants_hold() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-02-12 09:00:00", "RJ", 20.0),
            record("o3", "u1", "2018-01-30 08:00:00", "SP", 30.0),
        ];
        for row in compute_rfm(&records) {
            assert!(row.recency_days >= 0);
            assert!(row.frequency >= 1);
            assert!(row.monetary >= 0.0);
        }
    }

    #[test]
    fn test_summary_means() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            record("o2", "u2", "2018-03-03 10:00:00", "SP", 30.0),
        ];
        let summary = RfmSummary::from_rows(&compute_rfm(&records));
        assert_eq!(summary.customer_count, 2);
        assert!((summary.mean_recency_days - 1.0).abs() < 1e-9);
        assert!((summary.mean_frequency - 1.0).abs() < 1e-9);
        assert!((summary.mean_monetary - 20.0).abs() < 1e-9);
    }
}
