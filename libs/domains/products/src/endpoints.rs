//! Request validation and response envelopes over [`ProductService`].

use axum_helpers::{ApiResponse, AppError, Meta};
use std::sync::Arc;

use crate::error::ProductError;
use crate::models::{DeleteReq, Filters, GetAllReq, GetReq, Product, StoreReq, UpdateReq};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Page size used when a list request has no positive `limit`.
pub const DEFAULT_PAGE_LIMIT: &str = "30";

#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Kept as text; it is only parsed when a request needs it.
    pub default_page_limit: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            default_page_limit: DEFAULT_PAGE_LIMIT.to_string(),
        }
    }
}

pub type EndpointResult<T> = Result<ApiResponse<T>, AppError>;

pub struct Endpoints<R: ProductRepository> {
    service: Arc<ProductService<R>>,
    config: EndpointConfig,
}

pub fn make_endpoints<R: ProductRepository>(
    service: ProductService<R>,
    config: EndpointConfig,
) -> Endpoints<R> {
    Endpoints {
        service: Arc::new(service),
        config,
    }
}

fn internal(err: ProductError) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl<R: ProductRepository> Endpoints<R> {
    pub async fn get(&self, req: GetReq) -> EndpointResult<Product> {
        if req.id <= 0 {
            return Err(AppError::BadRequest("ID must be greater than 0".to_string()));
        }

        let product = self.service.get(req.id).await?;
        Ok(ApiResponse::ok("Success", Some(product), None))
    }

    pub async fn get_all(&self, req: GetAllReq) -> EndpointResult<Vec<Product>> {
        let filters = Filters { name: req.name };

        let count = self.service.count(filters.clone()).await.map_err(internal)?;

        let meta = Meta::new(req.page, req.limit, count, &self.config.default_page_limit)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        let products = self
            .service
            .get_all(filters, meta.offset(), meta.limit())
            .await
            .map_err(internal)?;

        Ok(ApiResponse::ok("Success", Some(products), Some(meta)))
    }

    pub async fn store(&self, req: StoreReq) -> EndpointResult<Product> {
        if req.name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if req.price == 0.0 {
            return Err(AppError::BadRequest("Price is required".to_string()));
        }

        let product = self
            .service
            .store(req.name, req.description, req.price)
            .await
            .map_err(internal)?;

        Ok(ApiResponse::created("Success", product))
    }

    pub async fn update(&self, req: UpdateReq) -> EndpointResult<()> {
        self.service
            .update(req.id, req.name, req.description, req.price)
            .await
            .map_err(internal)?;

        Ok(ApiResponse::ok("Product updated", None, None))
    }

    pub async fn delete(&self, req: DeleteReq) -> EndpointResult<()> {
        self.service.delete(req.id).await.map_err(internal)?;

        Ok(ApiResponse::ok("Success", None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use axum::http::StatusCode;
    use mockall::predicate::eq;
    use tracing::Span;

    /// A mock with no expectations panics on any call, so these endpoints
    /// must reject before reaching the service.
    fn untouched() -> Endpoints<MockProductRepository> {
        endpoints(MockProductRepository::new())
    }

    fn endpoints(repo: MockProductRepository) -> Endpoints<MockProductRepository> {
        make_endpoints(
            ProductService::new(Span::none(), repo),
            EndpointConfig::default(),
        )
    }

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price: 1.5,
        }
    }

    #[tokio::test]
    async fn test_get_rejects_non_positive_id() {
        for id in [0, -3] {
            let err = untouched().get(GetReq { id }).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "Bad Request: ID must be greater than 0");
        }
    }

    #[tokio::test]
    async fn test_store_requires_name_and_price() {
        let err = untouched()
            .store(StoreReq {
                name: String::new(),
                description: "x".into(),
                price: 2.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad Request: Name is required");

        let err = untouched()
            .store(StoreReq {
                name: "Widget".into(),
                description: String::new(),
                price: 0.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad Request: Price is required");
    }

    #[tokio::test]
    async fn test_store_success_is_created() {
        let mut repo = MockProductRepository::new();
        repo.expect_store().returning(|product| {
            product.id = 1;
            Ok(())
        });

        let response = endpoints(repo)
            .store(StoreReq {
                name: "Widget".into(),
                description: "A widget".into(),
                price: 9.99,
            })
            .await
            .unwrap();

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(response.data.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_not_found_is_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_get()
            .returning(|id| Err(ProductError::NotFound(id)));

        let err = endpoints(repo).get(GetReq { id: 9 }).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found: product 9 not found");
    }

    #[tokio::test]
    async fn test_get_database_error_is_500() {
        let mut repo = MockProductRepository::new();
        repo.expect_get()
            .returning(|_| Err(ProductError::Database("timeout".into())));

        let err = endpoints(repo).get(GetReq { id: 9 }).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_all_uses_default_page_size() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|_| Ok(45));
        repo.expect_get_all()
            .with(eq(Filters::default()), eq(0), eq(30))
            .returning(|_, _, _| Ok((1..=30).map(product).collect()));

        let response = endpoints(repo)
            .get_all(GetAllReq::default())
            .await
            .unwrap();

        let meta = response.meta.unwrap();
        assert_eq!(meta.page, 1);
        assert_eq!(meta.per_page, 30);
        assert_eq!(meta.page_count, 2);
        assert_eq!(meta.total_count, 45);
        assert_eq!(response.data.unwrap().len(), 30);
    }

    #[tokio::test]
    async fn test_get_all_bad_default_limit_is_internal() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|_| Ok(1));

        let endpoints = make_endpoints(
            ProductService::new(Span::none(), repo),
            EndpointConfig {
                default_page_limit: "lots".into(),
            },
        );
        let err = endpoints.get_all(GetAllReq::default()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_update_and_delete_errors_are_internal() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .returning(|id, _, _, _| Err(ProductError::NotFound(id)));
        repo.expect_delete()
            .returning(|id| Err(ProductError::NotFound(id)));
        let endpoints = endpoints(repo);

        let err = endpoints
            .update(UpdateReq {
                id: 2,
                ..UpdateReq::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = endpoints.delete(DeleteReq { id: 2 }).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_update_success_has_no_data() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _, _, _| Ok(()));

        let response = endpoints(repo)
            .update(UpdateReq {
                id: 2,
                price: Some(4.0),
                ..UpdateReq::default()
            })
            .await
            .unwrap();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.message, "Product updated");
        assert!(response.data.is_none());
    }
}
