//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, listener task, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (permissive CORS access control)
//! - **[`errors`]**: Error envelope rendering with error codes
//! - **[`extractors`]**: Extractors that reject with the error envelope
//! - **[`response`]**: Success envelope and pagination metadata
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_router, spawn_app};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config);
//!
//!     if let Ok(Err(e)) = spawn_app(router, &config).await {
//!         eprintln!("listener stopped: {e}");
//!     }
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, create_router, health_router, run_health_checks,
    serve, shutdown_signal, spawn_app,
};

pub use http::access_control;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, JsonBody, QueryParams};

pub use response::{ApiResponse, Meta, MetaError};
