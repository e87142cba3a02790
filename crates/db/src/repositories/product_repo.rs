//! Repository for the `products` table.

use async_trait::async_trait;
use boxoffice_core::error::CoreError;
use boxoffice_core::resource::ResourceStore;
use boxoffice_core::types::DbId;
use sqlx::PgPool;

use crate::error::SqlxErrorExt;
use crate::models::product::{Product, ProductWithTypeRow};

/// Column list shared across queries to avoid repetition.
///
/// `price` is `NUMERIC(10,2)` in the table and read back as `float8`.
const COLUMNS: &str =
    "id, name, is_active, product_type_id, price::float8 AS price, image_data, image_type";

/// Column list for queries joining `product_types AS pt` onto `products AS p`.
const JOINED_COLUMNS: &str = "p.id, p.name, p.is_active, p.product_type_id, \
                              p.price::float8 AS price, p.image_data, p.image_type, \
                              pt.name AS product_type_name";

/// Store for products, holding its own pool handle.
#[derive(Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every product with its product type, ordered by id.
    pub async fn list_with_product_type(&self) -> Result<Vec<Product>, CoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             JOIN product_types pt ON pt.id = p.product_type_id \
             ORDER BY p.id"
        );
        let rows = sqlx::query_as::<_, ProductWithTypeRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Find one product with its product type.
    pub async fn find_with_product_type(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             JOIN product_types pt ON pt.id = p.product_type_id \
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProductWithTypeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(row.map(Product::from))
    }

    /// Products whose id equals `id`, with their product type, as a
    /// collection (zero or one row).
    pub async fn find_by_product_id(&self, id: DbId) -> Result<Vec<Product>, CoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             JOIN product_types pt ON pt.id = p.product_type_id \
             WHERE p.id = $1 \
             ORDER BY p.id"
        );
        let rows = sqlx::query_as::<_, ProductWithTypeRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl ResourceStore<Product> for ProductRepo {
    async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn insert(&self, entity: &Product) -> Result<Product, CoreError> {
        let query = format!(
            "INSERT INTO products (name, is_active, product_type_id, price, image_data, image_type) \
             VALUES ($1, $2, $3, $4::float8::numeric(10, 2), $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&entity.name)
            .bind(entity.is_active)
            .bind(entity.product_type_id)
            .bind(entity.price)
            .bind(&entity.image_data)
            .bind(&entity.image_type)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn update(&self, id: DbId, entity: &Product) -> Result<Option<Product>, CoreError> {
        let query = format!(
            "UPDATE products SET \
                name = $2, \
                is_active = $3, \
                product_type_id = $4, \
                price = $5::float8::numeric(10, 2), \
                image_data = $6, \
                image_type = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&entity.name)
            .bind(entity.is_active)
            .bind(entity.product_type_id)
            .bind(entity.price)
            .bind(&entity.image_data)
            .bind(&entity.image_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(result.rows_affected() > 0)
    }
}
