use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Filters, Product},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered(filters: &Filters) -> Select<entity::Entity> {
        let query = entity::Entity::find();
        if filters.name.is_empty() {
            query
        } else {
            let pattern = LikeExpr::new(contains_pattern(&filters.name)).escape('\\');
            query.filter(entity::Column::Name.like(pattern))
        }
    }
}

/// `%name%` with LIKE metacharacters in `name` matched literally.
fn contains_pattern(name: &str) -> String {
    let mut pattern = String::with_capacity(name.len() + 2);
    pattern.push('%');
    for c in name.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn store(&self, product: &mut Product) -> ProductResult<()> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
        };

        let model = active_model.insert(&self.db).await?;
        product.id = model.id;

        tracing::debug!(product_id = model.id, "Inserted product row");
        Ok(())
    }

    async fn get(&self, id: i64) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    async fn get_all(
        &self,
        filters: Filters,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let models = Self::filtered(&filters)
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn delete(&self, id: i64) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> ProductResult<()> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if name.is_none() && description.is_none() && price.is_none() {
            return Ok(());
        }

        let mut active_model = model.into_active_model();
        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(description) = description {
            active_model.description = Set(description);
        }
        if let Some(price) = price {
            active_model.price = Set(price);
        }
        active_model.update(&self.db).await?;

        Ok(())
    }

    async fn count(&self, filters: Filters) -> ProductResult<u64> {
        Ok(Self::filtered(&filters).count(&self.db).await?)
    }
}
