//! Product type (classification) entity and DTO.

use boxoffice_core::resource::{DtoMapping, Resource};
use boxoffice_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `product_types` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductType {
    pub id: DbId,
    pub name: String,
}

impl Resource for ProductType {
    const NAME: &'static str = "ProductType";

    fn id(&self) -> DbId {
        self.id
    }
}

/// Wire shape of a product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl DtoMapping<ProductType> for ProductTypeDto {
    fn to_dto(entity: &ProductType) -> Self {
        ProductTypeDto {
            id: Some(entity.id),
            name: entity.name.clone(),
        }
    }

    fn to_entity(&self) -> ProductType {
        ProductType {
            id: 0,
            name: self.name.clone(),
        }
    }
}
