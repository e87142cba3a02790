//! Repository for the `product_types` table.

use async_trait::async_trait;
use boxoffice_core::error::CoreError;
use boxoffice_core::resource::ResourceStore;
use boxoffice_core::types::DbId;
use sqlx::PgPool;

use crate::error::SqlxErrorExt;
use crate::models::product_type::ProductType;

const COLUMNS: &str = "id, name";

/// Store for product types.
#[derive(Clone)]
pub struct ProductTypeRepo {
    pool: PgPool,
}

impl ProductTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore<ProductType> for ProductTypeRepo {
    async fn list_all(&self) -> Result<Vec<ProductType>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM product_types ORDER BY id");
        sqlx::query_as::<_, ProductType>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProductType>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM product_types WHERE id = $1");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn insert(&self, entity: &ProductType) -> Result<ProductType, CoreError> {
        let query = format!("INSERT INTO product_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(&entity.name)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn update(
        &self,
        id: DbId,
        entity: &ProductType,
    ) -> Result<Option<ProductType>, CoreError> {
        let query =
            format!("UPDATE product_types SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(id)
            .bind(&entity.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    /// Types still referenced by products cannot be removed (`ON DELETE
    /// RESTRICT`); that surfaces as a validation error.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM product_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(result.rows_affected() > 0)
    }
}
