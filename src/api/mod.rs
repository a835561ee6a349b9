//! HTTP surface
//!
//! Binds [`App`](crate::app::App) operations to axum routes and carries the
//! middleware stack shared by the server binary and tests.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::{build_app_router, build_cors_layer};
pub use state::AppState;
