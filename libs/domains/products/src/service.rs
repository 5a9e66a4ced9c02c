//! Product Service - delegation to the repository with structured logging

use std::sync::Arc;
use tracing::{info, Span};

use crate::error::ProductResult;
use crate::models::{Filters, Product};
use crate::repository::ProductRepository;

/// Product service.
///
/// Carries no business rules: every call goes straight to the repository and
/// errors come back unchanged. Successful calls are logged as children of the
/// injected `log` span.
pub struct ProductService<R: ProductRepository> {
    log: Span,
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(log: Span, repository: R) -> Self {
        Self {
            log,
            repository: Arc::new(repository),
        }
    }

    pub async fn store(
        &self,
        name: String,
        description: String,
        price: f64,
    ) -> ProductResult<Product> {
        let mut product = Product {
            id: 0,
            name,
            description,
            price,
        };

        self.repository.store(&mut product).await?;
        info!(parent: &self.log, ?product, "product stored");
        Ok(product)
    }

    pub async fn get(&self, id: i64) -> ProductResult<Product> {
        let product = self.repository.get(id).await?;
        info!(parent: &self.log, ?product, "product retrieved");
        Ok(product)
    }

    pub async fn get_all(
        &self,
        filters: Filters,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let products = self.repository.get_all(filters, offset, limit).await?;
        info!(parent: &self.log, count = products.len(), ?products, "products retrieved");
        Ok(products)
    }

    pub async fn delete(&self, id: i64) -> ProductResult<()> {
        self.repository.delete(id).await?;
        info!(parent: &self.log, id, "product deleted");
        Ok(())
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> ProductResult<()> {
        self.repository
            .update(id, name.clone(), description.clone(), price)
            .await?;
        info!(parent: &self.log, id, ?name, ?description, ?price, "product updated");
        Ok(())
    }

    pub async fn count(&self, filters: Filters) -> ProductResult<u64> {
        self.repository.count(filters).await
    }
}
