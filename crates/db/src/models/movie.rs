//! Movie entity, DTOs, and the landing-page carousel projection.

use boxoffice_core::resource::{DtoMapping, Resource};
use boxoffice_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Title shown on a carousel slide whose movie has a blank title.
pub const UNTITLED: &str = "Untitled";

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub runtime_minutes: Option<i32>,
    pub age_rating: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub poster_url: Option<String>,
    pub banner_url: Option<String>,
    pub is_active: bool,
}

impl Resource for Movie {
    const NAME: &'static str = "Movie";

    fn id(&self) -> DbId {
        self.id
    }
}

fn default_active() -> bool {
    true
}

/// Wire shape of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 4000))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 1000))]
    pub runtime_minutes: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub age_rating: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, rename = "posterURL")]
    #[validate(length(max = 2048))]
    pub poster_url: Option<String>,
    #[serde(default, rename = "bannerURL")]
    #[validate(length(max = 2048))]
    pub banner_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl DtoMapping<Movie> for MovieDto {
    fn to_dto(entity: &Movie) -> Self {
        MovieDto {
            id: Some(entity.id),
            title: entity.title.clone(),
            description: entity.description.clone(),
            runtime_minutes: entity.runtime_minutes,
            age_rating: entity.age_rating.clone(),
            release_date: entity.release_date,
            poster_url: entity.poster_url.clone(),
            banner_url: entity.banner_url.clone(),
            is_active: entity.is_active,
        }
    }

    fn to_entity(&self) -> Movie {
        Movie {
            id: 0,
            title: self.title.clone(),
            description: self.description.clone(),
            runtime_minutes: self.runtime_minutes,
            age_rating: self.age_rating.clone(),
            release_date: self.release_date,
            poster_url: self.poster_url.clone(),
            banner_url: self.banner_url.clone(),
            is_active: self.is_active,
        }
    }
}

/// `{id, title, bannerURL}` projection served by `GET /api/Movie/Active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummaryDto {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "bannerURL")]
    pub banner_url: Option<String>,
}

impl From<&Movie> for MovieSummaryDto {
    fn from(movie: &Movie) -> Self {
        MovieSummaryDto {
            id: movie.id,
            title: movie.title.clone(),
            banner_url: movie.banner_url.clone(),
        }
    }
}

/// One landing-page carousel slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub id: DbId,
    pub title: String,
    pub banner_url: String,
}

/// Build carousel slides from active movie summaries.
///
/// Movies whose banner URL is missing, empty or whitespace-only are dropped.
/// Input order is preserved.
pub fn carousel_slides(movies: &[MovieSummaryDto]) -> Vec<CarouselSlide> {
    movies
        .iter()
        .filter_map(|movie| {
            let banner = movie.banner_url.as_deref()?;
            if banner.trim().is_empty() {
                return None;
            }
            let title = if movie.title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                movie.title.clone()
            };
            Some(CarouselSlide {
                id: movie.id,
                title,
                banner_url: banner.to_string(),
            })
        })
        .collect()
}
