//! Core data model: one record per order item.
//!
//! The input dataset is a flat table where an order with N items appears as
//! N rows with the order-level fields repeated. Timestamps arrive as text in
//! the CSV and are parsed here; geolocation fields may be missing and are
//! carried as NaN so that downstream distance math propagates them instead
//! of failing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw row from CSV ingestion, before timestamp parsing.
#[derive(Debug, Deserialize)]
pub struct CsvOrderRow {
    pub order_id: String,
    pub order_purchase_timestamp: String,
    pub order_delivered_customer_date: Option<String>,
    pub customer_id: String,
    pub customer_unique_id: String,
    pub customer_state: String,
    pub customer_city: String,
    pub customer_geolocation_lat: Option<f64>,
    pub customer_geolocation_lng: Option<f64>,
    pub seller_id: String,
    pub seller_geolocation_lat: Option<f64>,
    pub seller_geolocation_lng: Option<f64>,
    pub product_category_name_english: Option<String>,
    pub order_item_id: u32,
    pub order_item_value: f64,
    pub review_score: Option<f64>,
    pub delivery_time: Option<f64>,
}

/// One order-item record with parsed timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub purchase_timestamp: NaiveDateTime,
    pub delivered_timestamp: Option<NaiveDateTime>,
    pub customer_id: String,
    pub customer_unique_id: String,
    pub customer_state: String,
    pub customer_city: String,
    pub customer_lat: f64,
    pub customer_lng: f64,
    pub seller_id: String,
    pub seller_lat: f64,
    pub seller_lng: f64,
    pub product_category: String,
    pub order_item_id: u32,
    pub order_item_value: f64,
    pub review_score: Option<f64>,
    pub delivery_time_days: Option<f64>,
}

impl OrderRecord {
    /// Calendar day of the purchase, used by every time-based grouping.
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_timestamp.date()
    }
}

impl CsvOrderRow {
    /// Parse textual timestamps and normalize missing fields.
    ///
    /// Fails only on a malformed purchase timestamp; a missing or malformed
    /// delivery timestamp degrades to `None` since undelivered orders are
    /// legitimately present in the dataset.
    pub fn to_record(&self) -> anyhow::Result<OrderRecord> {
        let purchase_timestamp =
            NaiveDateTime::parse_from_str(&self.order_purchase_timestamp, TIMESTAMP_FORMAT)?;
        let delivered_timestamp = self
            .order_delivered_customer_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(|s| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok());

        Ok(OrderRecord {
            order_id: self.order_id.clone(),
            purchase_timestamp,
            delivered_timestamp,
            customer_id: self.customer_id.clone(),
            customer_unique_id: self.customer_unique_id.clone(),
            customer_state: self.customer_state.clone(),
            customer_city: self.customer_city.clone(),
            customer_lat: self.customer_geolocation_lat.unwrap_or(f64::NAN),
            customer_lng: self.customer_geolocation_lng.unwrap_or(f64::NAN),
            seller_id: self.seller_id.clone(),
            seller_lat: self.seller_geolocation_lat.unwrap_or(f64::NAN),
            seller_lng: self.seller_geolocation_lng.unwrap_or(f64::NAN),
            product_category: self
                .product_category_name_english
                .clone()
                .unwrap_or_default(),
            order_item_id: self.order_item_id,
            order_item_value: self.order_item_value,
            review_score: self.review_score,
            delivery_time_days: self.delivery_time,
        })
    }
}
