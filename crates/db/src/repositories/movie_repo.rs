//! Repository for the `movies` table.

use async_trait::async_trait;
use boxoffice_core::error::CoreError;
use boxoffice_core::resource::ResourceStore;
use boxoffice_core::types::DbId;
use sqlx::PgPool;

use crate::error::SqlxErrorExt;
use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, runtime_minutes, age_rating, release_date, \
                       poster_url, banner_url, is_active";

/// Store for movies.
#[derive(Clone)]
pub struct MovieRepo {
    pool: PgPool,
}

impl MovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active movies, ordered by release date (newest first), then id.
    pub async fn list_active(&self) -> Result<Vec<Movie>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies WHERE is_active = true \
             ORDER BY release_date DESC NULLS LAST, id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }
}

#[async_trait]
impl ResourceStore<Movie> for MovieRepo {
    async fn list_all(&self) -> Result<Vec<Movie>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn insert(&self, entity: &Movie) -> Result<Movie, CoreError> {
        let query = format!(
            "INSERT INTO movies (title, description, runtime_minutes, age_rating, release_date, \
                                 poster_url, banner_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&entity.title)
            .bind(&entity.description)
            .bind(entity.runtime_minutes)
            .bind(&entity.age_rating)
            .bind(entity.release_date)
            .bind(&entity.poster_url)
            .bind(&entity.banner_url)
            .bind(entity.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn update(&self, id: DbId, entity: &Movie) -> Result<Option<Movie>, CoreError> {
        let query = format!(
            "UPDATE movies SET \
                title = $2, \
                description = $3, \
                runtime_minutes = $4, \
                age_rating = $5, \
                release_date = $6, \
                poster_url = $7, \
                banner_url = $8, \
                is_active = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&entity.title)
            .bind(&entity.description)
            .bind(entity.runtime_minutes)
            .bind(&entity.age_rating)
            .bind(entity.release_date)
            .bind(&entity.poster_url)
            .bind(&entity.banner_url)
            .bind(entity.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_core_error)?;
        Ok(result.rows_affected() > 0)
    }
}
