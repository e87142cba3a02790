use async_trait::async_trait;
use boxoffice_core::access::{Access, Operation};
use boxoffice_core::error::CoreError;
use boxoffice_core::resource::{DtoMapping, Resource, ResourceHandler, ResourceStore};
use boxoffice_core::types::DbId;
use boxoffice_db::models::product::{Product, ProductDto};
use boxoffice_db::repositories::ProductRepo;
use validator::Validate;

/// `GET /api/Product/GetByProductId/{id}`.
pub const GET_BY_PRODUCT_ID: Operation = Operation::Query("GetByProductId");

/// Concession products, always served with their product type attached.
pub struct ProductHandler {
    repo: ProductRepo,
}

impl ProductHandler {
    pub fn new(repo: ProductRepo) -> Self {
        Self { repo }
    }

    /// Products whose id equals `id`: an empty list when there is none.
    pub async fn get_by_product_id(&self, id: DbId) -> Result<Vec<ProductDto>, CoreError> {
        let products = self.repo.find_by_product_id(id).await?;
        Ok(products.iter().map(ProductDto::to_dto).collect())
    }
}

/// Access each product operation requires.
fn product_access(op: Operation) -> Access {
    match op {
        Operation::List | GET_BY_PRODUCT_ID => Access::Anonymous,
        _ => Access::Authenticated,
    }
}

fn validate_product(input: &ProductDto) -> Result<(), CoreError> {
    input.validate()?;
    input.check_consistency()
}

#[async_trait]
impl ResourceHandler for ProductHandler {
    type Entity = Product;
    type Dto = ProductDto;

    fn store(&self) -> &dyn ResourceStore<Product> {
        &self.repo
    }

    fn access(&self, op: Operation) -> Access {
        product_access(op)
    }

    fn validate(&self, input: &ProductDto) -> Result<(), CoreError> {
        validate_product(input)
    }

    async fn list_all(&self) -> Result<Vec<ProductDto>, CoreError> {
        let products = self.repo.list_with_product_type().await?;
        Ok(products.iter().map(ProductDto::to_dto).collect())
    }

    async fn get_by_id(&self, id: DbId) -> Result<ProductDto, CoreError> {
        self.repo
            .find_with_product_type(id)
            .await?
            .map(|product| ProductDto::to_dto(&product))
            .ok_or(CoreError::NotFound {
                entity: Product::NAME,
                id,
            })
    }

    // Writes return the bare row; reading it back attaches the product type
    // so the response matches `get_by_id`.
    async fn create(&self, input: ProductDto) -> Result<ProductDto, CoreError> {
        self.validate(&input)?;
        let created = self.repo.insert(&input.to_entity()).await?;
        self.get_by_id(created.id).await
    }

    async fn update(&self, id: DbId, input: ProductDto) -> Result<ProductDto, CoreError> {
        self.validate(&input)?;
        self.repo
            .update(id, &input.to_entity())
            .await?
            .ok_or(CoreError::NotFound {
                entity: Product::NAME,
                id,
            })?;
        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn nachos() -> ProductDto {
        ProductDto {
            id: None,
            name: "Nachos".into(),
            is_active: true,
            product_type_id: 1,
            price: 4.0,
            image_data: None,
            image_type: None,
            product_type: None,
        }
    }

    #[test]
    fn listing_and_lookup_by_product_id_are_public() {
        assert_eq!(product_access(Operation::List), Access::Anonymous);
        assert_eq!(product_access(GET_BY_PRODUCT_ID), Access::Anonymous);
    }

    #[test]
    fn single_reads_and_mutations_need_a_login() {
        for op in [
            Operation::Get,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
            Operation::Query("Other"),
        ] {
            assert_eq!(product_access(op), Access::Authenticated, "{op:?}");
        }
    }

    #[test]
    fn image_without_content_type_fails_validation() {
        let input = ProductDto {
            image_data: Some(vec![0x89, 0x50]),
            ..nachos()
        };
        assert_matches!(validate_product(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_name_fails_validation() {
        let input = ProductDto {
            name: String::new(),
            ..nachos()
        };
        assert_matches!(validate_product(&input), Err(CoreError::Validation(_)));
        assert!(validate_product(&nachos()).is_ok());
    }
}
