//! Customer geography: per-state customer counts and seller-to-customer
//! distances.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::geo::{haversine, round_km};
use crate::models::OrderRecord;

/// Distinct customers per state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCustomerRow {
    pub state: String,
    pub customer_count: usize,
}

/// Seller-to-customer distance for one order item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDistanceRow {
    pub order_id: String,
    pub category: String,
    pub customer_id: String,
    pub seller_id: String,
    /// Great-circle distance in kilometers, rounded to two decimals. NaN
    /// when either endpoint is missing coordinates.
    pub distance_km: f64,
}

/// Count distinct customer identifiers per state, sorted descending by
/// count with ties keeping first-encountered state order.
pub fn compute_customers_by_state(records: &[OrderRecord]) -> Vec<StateCustomerRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, HashSet<&str>)> = Vec::new();

    for record in records {
        let i = match index.get(record.customer_state.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(record.customer_state.as_str(), groups.len());
                groups.push((record.customer_state.clone(), HashSet::new()));
                groups.len() - 1
            }
        };
        groups[i].1.insert(record.customer_id.as_str());
    }

    let mut rows: Vec<StateCustomerRow> = groups
        .into_iter()
        .map(|(state, customers)| StateCustomerRow {
            state,
            customer_count: customers.len(),
        })
        .collect();
    rows.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
    rows
}

/// Map each order item to its seller-to-customer distance.
///
/// Builds a fresh table rather than annotating the input; the filtered
/// records stay untouched for the other builders.
pub fn compute_order_distances(records: &[OrderRecord]) -> Vec<OrderDistanceRow> {
    records
        .iter()
        .map(|record| OrderDistanceRow {
            order_id: record.order_id.clone(),
            category: record.product_category.clone(),
            customer_id: record.customer_id.clone(),
            seller_id: record.seller_id.clone(),
            distance_km: round_km(haversine(
                record.seller_lat,
                record.seller_lng,
                record.customer_lat,
                record.customer_lng,
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::record;

    #[test]
    fn test_customers_counted_distinct_per_state() {
        let mut repeat = record("o2", "u1", "2018-03-02 10:00:00", "SP", 10.0);
        repeat.customer_id = "c-o1".to_string(); // same customer as o1
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            repeat,
            record("o3", "u2", "2018-03-01 11:00:00", "RJ", 10.0),
        ];
        let rows = compute_customers_by_state(&records);
        assert_eq!(rows.len(), 2);
        let sp = rows.iter().find(|r| r.state == "SP").unwrap();
        assert_eq!(sp.customer_count, 1);
    }

    #[test]
    fn test_state_rows_sorted_by_count() {
        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "RJ", 10.0),
            record("o2", "u2", "2018-03-01 11:00:00", "SP", 10.0),
            record("o3", "u3", "2018-03-01 12:00:00", "SP", 10.0),
        ];
        let rows = compute_customers_by_state(&records);
        assert_eq!(rows[0].state, "SP");
        assert_eq!(rows[1].state, "RJ");
    }

    #[test]
    fn test_distance_rounded_and_input_untouched() {
        let records = vec![record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0)];
        let before = records.clone();
        let rows = compute_order_distances(&records);

        // SP -> Rio is about 359 km with these coordinates.
        assert!((357.0..=361.0).contains(&rows[0].distance_km));
        assert_eq!(rows[0].distance_km, (rows[0].distance_km * 100.0).round() / 100.0);
        assert_eq!(records.len(), before.len());
        assert_eq!(records[0].customer_lat, before[0].customer_lat);
    }

    #[test]
    fn test_distance_nan_for_missing_coordinates() {
        let mut r = record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0);
        r.seller_lat = f64::NAN;
        let rows = compute_order_distances(&[r]);
        assert!(rows[0].distance_km.is_nan());
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_customers_by_state(&[]).is_empty());
        assert!(compute_order_distances(&[]).is_empty());
    }
}
