//! Axum-based HTTP server exposing the derived aggregates to the dashboard
//! frontend.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
