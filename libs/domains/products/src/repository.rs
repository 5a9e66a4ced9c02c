use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Filters, Product};

/// Repository trait for Product persistence
///
/// `get`, `update` and `delete` on an unknown id return
/// [`ProductError::NotFound`]. Lists are ordered by ascending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and assign its `id`
    async fn store(&self, product: &mut Product) -> ProductResult<()>;

    async fn get(&self, id: i64) -> ProductResult<Product>;

    /// One page of the products matching `filters`
    async fn get_all(&self, filters: Filters, offset: u64, limit: u64)
        -> ProductResult<Vec<Product>>;

    async fn delete(&self, id: i64) -> ProductResult<()>;

    /// Update the fields that are `Some`
    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> ProductResult<()>;

    /// Number of products matching `filters`
    async fn count(&self, filters: Filters) -> ProductResult<u64>;
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// Process-local repository for tests and local runs without a database.
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn store(&self, product: &mut Product) -> ProductResult<()> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        product.id = table.last_id;
        table.rows.insert(product.id, product.clone());
        Ok(())
    }

    async fn get(&self, id: i64) -> ProductResult<Product> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    async fn get_all(
        &self,
        filters: Filters,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|product| filters.matches(product))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> ProductResult<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(id))
    }

    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> ProductResult<()> {
        let mut table = self.table.write().await;
        let product = table
            .rows
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply_update(name, description, price);
        Ok(())
    }

    async fn count(&self, filters: Filters) -> ProductResult<u64> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|product| filters.matches(product))
            .count() as u64)
    }
}
