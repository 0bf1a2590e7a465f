//! Aggregation engine: independent, pure builders over the filtered
//! order-item table.
//!
//! Each builder takes the filtered records as an explicit argument and
//! returns a fresh derived table. None of them mutates the input or shares
//! state with another, so they can run in any order.

pub mod categories;
pub mod daily_orders;
pub mod delivery;
pub mod demographics;
pub mod heatmap;
pub mod rfm;

pub use categories::{compute_category_sales, compute_category_scores};
pub use daily_orders::{compute_daily_orders, OrdersSummary};
pub use delivery::delivery_times;
pub use demographics::{compute_customers_by_state, compute_order_distances};
pub use heatmap::{compute_heatmap, compute_state_bucket_counts, granularities_for_span};
pub use rfm::{compute_rfm, RfmSummary};
