use crate::{
    abstract_trait::ProductRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING product_id, name, description, price, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Storage-default order, no explicit ORDER BY.
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, description, price, created_at, updated_at, deleted_at
            FROM products
            WHERE deleted_at IS NULL
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, description, price, created_at, updated_at, deleted_at
            FROM products
            WHERE product_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                updated_at = current_timestamp
            WHERE product_id = $1 AND deleted_at IS NULL
            RETURNING product_id, name, description, price, created_at, updated_at, deleted_at
            "#,
        )
        .bind(product.product_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update product ID {}: {:?}",
                product.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            UPDATE products
            SET deleted_at = current_timestamp
            WHERE product_id = $1 AND deleted_at IS NULL
            RETURNING product_id
            "#,
        )
        .bind(product.product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to delete product ID {}: {:?}",
                product.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("🗑️ Product ID {} moved to trash", product.product_id);
        Ok(())
    }
}
