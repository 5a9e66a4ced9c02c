//! Products API routes

use axum::Router;
use domain_products::{handlers, make_endpoints, PgProductRepository, ProductService};
use tracing::info_span;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let log = info_span!("products", app = state.config.app.name);
    let service = ProductService::new(log, repository);

    handlers::router(make_endpoints(service, state.config.endpoints.clone()))
}
