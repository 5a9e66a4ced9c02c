//! HTTP handlers for the Products API

use axum::{extract::State, routing::get, Router};
use axum_helpers::{ApiResponse, ErrorResponse, IdPath, JsonBody, Meta, QueryParams};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::endpoints::{EndpointResult, Endpoints};
use crate::models::{DeleteReq, GetAllReq, GetReq, Product, StoreReq, UpdateReq};
use crate::repository::ProductRepository;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        store_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(schemas(Product, StoreReq, UpdateReq, Meta, ErrorResponse)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, mounted at `/products`
pub fn router<R: ProductRepository + 'static>(endpoints: Endpoints<R>) -> Router {
    let shared = Arc::new(endpoints);

    Router::new()
        .route("/products", get(list_products).post(store_product))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(shared)
}

/// List products, paginated
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(GetAllReq),
    responses(
        (status = 200, description = "Page of products with pagination meta", body = ApiResponse<Vec<Product>>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(endpoints): State<Arc<Endpoints<R>>>,
    QueryParams(req): QueryParams<GetAllReq>,
) -> EndpointResult<Vec<Product>> {
    endpoints.get_all(req).await
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = StoreReq,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Missing name or price", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse)
    )
)]
async fn store_product<R: ProductRepository>(
    State(endpoints): State<Arc<Endpoints<R>>>,
    JsonBody(req): JsonBody<StoreReq>,
) -> EndpointResult<Product> {
    endpoints.store(req).await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(endpoints): State<Arc<Endpoints<R>>>,
    IdPath(id): IdPath,
) -> EndpointResult<Product> {
    endpoints.get(GetReq { id }).await
}

/// Update a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateReq,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Invalid ID or body", body = ErrorResponse),
        (status = 500, description = "Unknown product or repository failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(endpoints): State<Arc<Endpoints<R>>>,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<UpdateReq>,
) -> EndpointResult<()> {
    endpoints.update(UpdateReq { id, ..req }).await
}

/// Partially update a product (same semantics as PUT)
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateReq,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Invalid ID or body", body = ErrorResponse),
        (status = 500, description = "Unknown product or repository failure", body = ErrorResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    state: State<Arc<Endpoints<R>>>,
    id: IdPath,
    body: JsonBody<UpdateReq>,
) -> EndpointResult<()> {
    update_product(state, id, body).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 500, description = "Unknown product or repository failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(endpoints): State<Arc<Endpoints<R>>>,
    IdPath(id): IdPath,
) -> EndpointResult<()> {
    endpoints.delete(DeleteReq { id }).await
}
