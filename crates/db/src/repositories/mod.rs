pub mod movie_repo;
pub mod product_repo;
pub mod product_type_repo;
pub mod revoked_token_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use product_repo::ProductRepo;
pub use product_type_repo::ProductTypeRepo;
pub use revoked_token_repo::RevokedTokenRepo;
pub use user_repo::UserRepo;
