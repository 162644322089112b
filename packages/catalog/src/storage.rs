// ABOUTME: SQLite-backed storage for the product catalog
// ABOUTME: Create, list-with-filter, get-by-id, and the one-shot seed load

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

use sunward_core::MAX_LIST_ROWS;
use sunward_storage::StorageError;

use crate::seed::seed_products;
use crate::types::{Product, ProductCategory, ProductCreateInput};

/// Outcome of a seed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was empty and `inserted` products were loaded.
    Seeded { inserted: usize },
    /// Products already exist; nothing was written.
    AlreadySeeded { existing: i64 },
}

/// Storage layer for catalog products
pub struct CatalogStorage {
    pool: SqlitePool,
}

impl CatalogStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new product and return the stored record.
    ///
    /// No uniqueness check beyond the generated id; duplicate names are
    /// permitted.
    pub async fn create_product(
        &self,
        input: ProductCreateInput,
    ) -> Result<Product, StorageError> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            category: input.category,
            description: input.description,
            regular_price: input.regular_price,
            sale_price: input.sale_price,
            image_url: input.image_url,
            specs: input.specs,
            features: input.features,
            in_stock: input.in_stock,
            backorder: input.backorder,
            created_at: Utc::now(),
        };

        let specs_json = product
            .specs
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let features_json = product
            .features
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, category, description, regular_price, sale_price,
                image_url, specs, features, in_stock, backorder, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.category)
        .bind(&product.description)
        .bind(product.regular_price)
        .bind(product.sale_price)
        .bind(&product.image_url)
        .bind(specs_json)
        .bind(features_json)
        .bind(product.in_stock)
        .bind(product.backorder)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!("Created product {} ({})", product.id, product.category);

        Ok(product)
    }

    /// List products, optionally narrowed to one category. Natural storage
    /// order, capped at `MAX_LIST_ROWS`.
    pub async fn list_products(
        &self,
        category: Option<ProductCategory>,
    ) -> Result<Vec<Product>, StorageError> {
        let rows = match category {
            Some(category) => {
                sqlx::query("SELECT * FROM products WHERE category = ? LIMIT ?")
                    .bind(category)
                    .bind(MAX_LIST_ROWS)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT * FROM products LIMIT ?")
                    .bind(MAX_LIST_ROWS)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(StorageError::Sqlx)?;

        rows.into_iter().map(row_to_product).collect()
    }

    /// Fetch one product by id; `None` when absent.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, StorageError> {
        let row = sqlx::query("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.map(row_to_product).transpose()
    }

    pub async fn count_products(&self) -> Result<i64, StorageError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }

    /// Bulk-load the fixed seed catalog, but only into an empty store.
    ///
    /// Reseeding over existing data is refused; the call reports the
    /// existing count and writes nothing.
    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, StorageError> {
        let existing = self.count_products().await?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let seed = seed_products();
        let inserted = seed.len();
        for input in seed {
            self.create_product(input).await?;
        }

        info!("Seeded catalog with {} products", inserted);

        Ok(SeedOutcome::Seeded { inserted })
    }
}

fn row_to_product(row: SqliteRow) -> Result<Product, StorageError> {
    let specs = row
        .try_get::<Option<String>, _>("specs")?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()?;
    let features = row
        .try_get::<Option<String>, _>("features")?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()?;

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        regular_price: row.try_get("regular_price")?,
        sale_price: row.try_get("sale_price")?,
        image_url: row.try_get("image_url")?,
        specs,
        features,
        in_stock: row.try_get("in_stock")?,
        backorder: row.try_get("backorder")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}
