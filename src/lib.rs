//! # shop-insights
//!
//! Analytics backend for an e-commerce orders dataset.
//!
//! The crate loads a flat order-item table once, then answers dashboard
//! queries by filtering it (date range, state, city) and deriving a set of
//! aggregate tables: daily order volume and revenue, category rankings,
//! review scores, customer geography, seller-to-customer distances, RFM
//! customer segmentation, and a granularity-adaptive order heatmap by
//! state. The aggregates are exposed to the React frontend through an
//! Axum REST API.
//!
//! ## Architecture
//!
//! - [`models`]: the order-item record and its CSV form
//! - [`dataset`]: loading and dataset metadata
//! - [`filter`]: date/state/city filtering into a fresh record set
//! - [`geo`]: great-circle distance
//! - [`services`]: the aggregate builders (pure functions over the
//!   filtered records)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every aggregate is recomputed from scratch per request; the dataset
//! itself is immutable after load, so there is no locking anywhere.

pub mod config;
pub mod dataset;
pub mod filter;
pub mod geo;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
pub(crate) mod testutil;
