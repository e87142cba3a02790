use boxoffice_core::access::{Access, Operation};
use boxoffice_core::error::CoreError;
use boxoffice_core::resource::{ResourceHandler, ResourceStore};
use boxoffice_db::models::movie::{carousel_slides, CarouselSlide, Movie, MovieDto, MovieSummaryDto};
use boxoffice_db::repositories::MovieRepo;

/// `GET /api/Movie/Active`.
pub const ACTIVE: Operation = Operation::Query("Active");
/// `GET /api/Movie/Featured`.
pub const FEATURED: Operation = Operation::Query("Featured");

/// Movies on the schedule. Reads are public; changes need a login.
pub struct MovieHandler {
    repo: MovieRepo,
}

impl MovieHandler {
    pub fn new(repo: MovieRepo) -> Self {
        Self { repo }
    }

    /// Active movies as `{id, title, bannerURL}` summaries, newest release first.
    pub async fn list_active(&self) -> Result<Vec<MovieSummaryDto>, CoreError> {
        let movies = self.repo.list_active().await?;
        Ok(movies.iter().map(MovieSummaryDto::from).collect())
    }

    /// Landing-page carousel built from the active movies.
    pub async fn list_featured(&self) -> Result<Vec<CarouselSlide>, CoreError> {
        let summaries = self.list_active().await?;
        Ok(carousel_slides(&summaries))
    }
}

impl ResourceHandler for MovieHandler {
    type Entity = Movie;
    type Dto = MovieDto;

    fn store(&self) -> &dyn ResourceStore<Movie> {
        &self.repo
    }

    fn access(&self, op: Operation) -> Access {
        match op {
            Operation::List | Operation::Get | Operation::Query(_) => Access::Anonymous,
            Operation::Create | Operation::Update | Operation::Delete => Access::Authenticated,
        }
    }
}
