//! Shared helpers for unit tests.

use chrono::NaiveDateTime;

use crate::models::OrderRecord;

/// Build an order-item record with sensible defaults. Tests override the
/// fields they care about.
pub fn record(
    order_id: &str,
    customer_unique_id: &str,
    purchase_ts: &str,
    state: &str,
    order_item_value: f64,
) -> OrderRecord {
    let purchase_timestamp =
        NaiveDateTime::parse_from_str(purchase_ts, "%Y-%m-%d %H:%M:%S").expect("valid timestamp");
    OrderRecord {
        order_id: order_id.to_string(),
        purchase_timestamp,
        delivered_timestamp: None,
        customer_id: format!("c-{}", order_id),
        customer_unique_id: customer_unique_id.to_string(),
        customer_state: state.to_string(),
        customer_city: "springfield".to_string(),
        customer_lat: -23.55,
        customer_lng: -46.63,
        seller_id: "s1".to_string(),
        seller_lat: -22.90,
        seller_lng: -43.17,
        product_category: "toys".to_string(),
        order_item_id: 1,
        order_item_value,
        review_score: Some(4.0),
        delivery_time_days: Some(8.0),
    }
}
