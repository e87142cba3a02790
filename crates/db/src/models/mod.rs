pub mod base64_bytes;
pub mod movie;
pub mod product;
pub mod product_type;
pub mod user;
