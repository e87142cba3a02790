//! Product entity, its eager-loaded join row, and DTOs.
//!
//! A product references a [`ProductType`]. Plain queries leave
//! `Product::product_type` empty; eager-loading queries select the type name
//! alongside and fill it through [`ProductWithTypeRow`].

use boxoffice_core::error::CoreError;
use boxoffice_core::resource::{DtoMapping, Resource};
use boxoffice_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::product_type::ProductType;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub product_type_id: DbId,
    pub price: f64,
    pub image_data: Option<Vec<u8>>,
    pub image_type: Option<String>,
    /// Populated only by eager-loading queries.
    #[sqlx(skip)]
    pub product_type: Option<ProductType>,
}

impl Resource for Product {
    const NAME: &'static str = "Product";

    fn id(&self) -> DbId {
        self.id
    }
}

/// A `products` row joined with its type name.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithTypeRow {
    #[sqlx(flatten)]
    pub product: Product,
    pub product_type_name: String,
}

impl From<ProductWithTypeRow> for Product {
    fn from(row: ProductWithTypeRow) -> Self {
        let product_type = ProductType {
            id: row.product.product_type_id,
            name: row.product_type_name,
        };
        Product {
            product_type: Some(product_type),
            ..row.product
        }
    }
}

/// Classification embedded in [`ProductDto`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeSummary {
    pub id: DbId,
    pub name: String,
}

fn default_active() -> bool {
    true
}

/// Wire shape of a product.
///
/// `productType` is output-only: it is filled when the product was
/// eager-loaded and ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[validate(range(min = 1))]
    pub product_type_id: DbId,
    #[validate(range(min = 0.0, max = 99_999_999.99))]
    pub price: f64,
    #[serde(default, with = "crate::models::base64_bytes")]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub image_type: Option<String>,
    #[serde(default)]
    pub product_type: Option<ProductTypeSummary>,
}

impl ProductDto {
    /// Cross-field rules `validator` attributes cannot express.
    ///
    /// Image bytes need an `image/*` content type, and the price must be a
    /// finite number.
    pub fn check_consistency(&self) -> Result<(), CoreError> {
        if !self.price.is_finite() {
            return Err(CoreError::Validation("price: must be a finite number".into()));
        }
        match (&self.image_data, self.image_type.as_deref()) {
            (Some(_), None) => Err(CoreError::Validation(
                "imageType: required when imageData is present".into(),
            )),
            (_, Some(t)) if !t.starts_with("image/") => Err(CoreError::Validation(format!(
                "imageType: expected an image/* content type, got {t}"
            ))),
            _ => Ok(()),
        }
    }
}

impl DtoMapping<Product> for ProductDto {
    fn to_dto(entity: &Product) -> Self {
        ProductDto {
            id: Some(entity.id),
            name: entity.name.clone(),
            is_active: entity.is_active,
            product_type_id: entity.product_type_id,
            price: entity.price,
            image_data: entity.image_data.clone(),
            image_type: entity.image_type.clone(),
            product_type: entity.product_type.as_ref().map(|t| ProductTypeSummary {
                id: t.id,
                name: t.name.clone(),
            }),
        }
    }

    fn to_entity(&self) -> Product {
        Product {
            id: 0,
            name: self.name.clone(),
            is_active: self.is_active,
            product_type_id: self.product_type_id,
            price: self.price,
            image_data: self.image_data.clone(),
            image_type: self.image_type.clone(),
            product_type: None,
        }
    }
}
