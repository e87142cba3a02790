//! Concrete resource handlers.
//!
//! Each handler owns its repository and overrides the generic
//! [`ResourceHandler`](boxoffice_core::resource::ResourceHandler) defaults
//! where its resource differs: eager loading, extra validation, and the
//! access each operation requires.

pub mod movie;
pub mod product;
pub mod product_type;

pub use movie::MovieHandler;
pub use product::ProductHandler;
pub use product_type::ProductTypeHandler;
