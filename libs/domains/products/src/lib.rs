//! Products Domain
//!
//! CRUD over product records backed by PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP decoding (path, query, JSON body)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Endpoints  │  ← Validation, response envelopes, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Delegation and structured logging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, filters, typed requests
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     endpoints::{make_endpoints, EndpointConfig},
//!     handlers,
//!     postgres::PgProductRepository,
//!     service::ProductService,
//! };
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgresql://localhost/products").await?;
//!
//! let service = ProductService::new(
//!     tracing::info_span!("products-api"),
//!     PgProductRepository::new(db),
//! );
//! let endpoints = make_endpoints(service, EndpointConfig::default());
//!
//! let router = handlers::router(endpoints);
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use endpoints::{make_endpoints, EndpointConfig, Endpoints};
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{DeleteReq, Filters, GetAllReq, GetReq, Product, StoreReq, UpdateReq};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
