//! Delivery-time projection.

use crate::models::OrderRecord;

/// Per-item delivery durations in days, for the delivery-time histogram.
///
/// Pure selection of the precomputed column; items not yet delivered carry
/// no duration and are omitted, the same way the histogram drops them.
pub fn delivery_times(records: &[OrderRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(|r| r.delivery_time_days)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::record;

    #[test]
    fn test_projects_present_values_in_order() {
        let mut undelivered = record("o2", "u2", "2018-03-02 10:00:00", "SP", 10.0);
        undelivered.delivery_time_days = None;
        let mut slow = record("o3", "u3", "2018-03-03 10:00:00", "SP", 10.0);
        slow.delivery_time_days = Some(21.0);

        let records = vec![
            record("o1", "u1", "2018-03-01 10:00:00", "SP", 10.0),
            undelivered,
            slow,
        ];
        assert_eq!(delivery_times(&records), vec![8.0, 21.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(delivery_times(&[]).is_empty());
    }
}
