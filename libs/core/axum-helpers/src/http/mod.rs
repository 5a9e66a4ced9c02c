//! HTTP middleware.
//!
//! ```ignore
//! use axum_helpers::http::access_control;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(access_control));
//! ```

pub mod cors;

pub use cors::access_control;
