//! Server infrastructure.
//!
//! - Router assembly with OpenAPI document, CORS, tracing and timeouts
//! - Listener task reporting its terminal result over a oneshot channel
//! - Health and readiness helpers
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router, spawn_app};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router(app_info!())), &config);
//! let result = spawn_app(router, &config).await;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_router, serve, spawn_app};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
