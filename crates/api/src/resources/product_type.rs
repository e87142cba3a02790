use boxoffice_core::access::{Access, Operation};
use boxoffice_core::resource::{ResourceHandler, ResourceStore};
use boxoffice_db::models::product_type::{ProductType, ProductTypeDto};
use boxoffice_db::repositories::ProductTypeRepo;

/// Product classifications. Anyone may read them; only admins change them.
pub struct ProductTypeHandler {
    repo: ProductTypeRepo,
}

impl ProductTypeHandler {
    pub fn new(repo: ProductTypeRepo) -> Self {
        Self { repo }
    }
}

impl ResourceHandler for ProductTypeHandler {
    type Entity = ProductType;
    type Dto = ProductTypeDto;

    fn store(&self) -> &dyn ResourceStore<ProductType> {
        &self.repo
    }

    fn access(&self, op: Operation) -> Access {
        match op {
            Operation::List | Operation::Get => Access::Anonymous,
            _ => Access::Admin,
        }
    }
}
