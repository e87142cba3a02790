//! Generic resource controller contract.
//!
//! A resource is a persisted entity with an integer surrogate key, exposed on
//! the wire through a DTO. [`ResourceHandler`] supplies default
//! list/get/create/update/delete semantics on top of a [`ResourceStore`] and
//! a [`DtoMapping`]; concrete resources override individual methods to
//! eager-load related rows or to change what each operation requires.
//!
//! Nothing here knows about HTTP. The API crate adapts any handler to routes.

use async_trait::async_trait;
use validator::Validate;

use crate::access::{Access, Operation};
use crate::error::CoreError;
use crate::types::DbId;

/// A persisted entity identified by a [`DbId`].
pub trait Resource: Send + Sync + 'static {
    /// Entity name used in `NotFound` errors and log fields.
    const NAME: &'static str;

    fn id(&self) -> DbId;
}

/// Pure conversions between a stored entity `E` and its wire shape.
///
/// Both directions must be total and deterministic for every field the DTO
/// declares. `to_entity` leaves the id unassigned (zero); stores never read
/// it.
pub trait DtoMapping<E>: Sized {
    fn to_dto(entity: &E) -> Self;
    fn to_entity(&self) -> E;
}

/// Query/session abstraction over the persistent store for one entity type.
#[async_trait]
pub trait ResourceStore<E: Resource>: Send + Sync {
    /// Every row, in store default order.
    async fn list_all(&self) -> Result<Vec<E>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, CoreError>;

    /// Insert `entity` and return the stored row with its assigned id.
    async fn insert(&self, entity: &E) -> Result<E, CoreError>;

    /// Overwrite the mutable fields of row `id`. `None` if no such row.
    async fn update(&self, id: DbId, entity: &E) -> Result<Option<E>, CoreError>;

    /// Remove row `id` permanently. `false` if no such row.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;
}

/// Uniform CRUD over a resource type.
///
/// Every method has a default; implementors provide only [`store`] and
/// override what differs for their resource.
///
/// [`store`]: ResourceHandler::store
#[async_trait]
pub trait ResourceHandler: Send + Sync + 'static {
    type Entity: Resource;
    type Dto: DtoMapping<Self::Entity> + Validate + Send + Sync + 'static;

    fn store(&self) -> &dyn ResourceStore<Self::Entity>;

    /// Access requirement for `op`. Defaults to any authenticated caller.
    fn access(&self, op: Operation) -> Access {
        let _ = op;
        Access::Authenticated
    }

    /// Validate an inbound DTO before it is mapped and persisted.
    fn validate(&self, input: &Self::Dto) -> Result<(), CoreError> {
        input.validate()?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Self::Dto>, CoreError> {
        let entities = self.store().list_all().await?;
        Ok(entities.iter().map(Self::Dto::to_dto).collect())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Self::Dto, CoreError> {
        self.store()
            .find_by_id(id)
            .await?
            .map(|entity| Self::Dto::to_dto(&entity))
            .ok_or(CoreError::NotFound {
                entity: Self::Entity::NAME,
                id,
            })
    }

    async fn create(&self, input: Self::Dto) -> Result<Self::Dto, CoreError> {
        self.validate(&input)?;
        let created = self.store().insert(&input.to_entity()).await?;
        Ok(Self::Dto::to_dto(&created))
    }

    async fn update(&self, id: DbId, input: Self::Dto) -> Result<Self::Dto, CoreError> {
        self.validate(&input)?;
        let updated = self
            .store()
            .update(id, &input.to_entity())
            .await?
            .ok_or(CoreError::NotFound {
                entity: Self::Entity::NAME,
                id,
            })?;
        Ok(Self::Dto::to_dto(&updated))
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.store().delete(id).await? {
            return Err(CoreError::NotFound {
                entity: Self::Entity::NAME,
                id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: DbId,
        label: String,
    }

    impl Resource for Widget {
        const NAME: &'static str = "Widget";

        fn id(&self) -> DbId {
            self.id
        }
    }

    #[derive(Debug, Clone, PartialEq, Validate)]
    struct WidgetDto {
        id: Option<DbId>,
        #[validate(length(min = 1))]
        label: String,
    }

    impl DtoMapping<Widget> for WidgetDto {
        fn to_dto(entity: &Widget) -> Self {
            WidgetDto {
                id: Some(entity.id),
                label: entity.label.clone(),
            }
        }

        fn to_entity(&self) -> Widget {
            Widget {
                id: 0,
                label: self.label.clone(),
            }
        }
    }

    /// Vec-backed store assigning sequential ids.
    #[derive(Default)]
    struct FakeStore {
        rows: Mutex<Vec<Widget>>,
        unavailable: bool,
    }

    impl FakeStore {
        fn check(&self) -> Result<(), CoreError> {
            if self.unavailable {
                return Err(CoreError::StoreUnavailable("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ResourceStore<Widget> for FakeStore {
        async fn list_all(&self) -> Result<Vec<Widget>, CoreError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: DbId) -> Result<Option<Widget>, CoreError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|w| w.id == id).cloned())
        }

        async fn insert(&self, entity: &Widget) -> Result<Widget, CoreError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|w| w.id).max().unwrap_or(0) + 1;
            let row = Widget {
                id,
                label: entity.label.clone(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn update(&self, id: DbId, entity: &Widget) -> Result<Option<Widget>, CoreError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|w| w.id == id).map(|w| {
                w.label = entity.label.clone();
                w.clone()
            }))
        }

        async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|w| w.id != id);
            Ok(rows.len() < before)
        }
    }

    #[derive(Default)]
    struct WidgetHandler {
        store: FakeStore,
    }

    impl ResourceHandler for WidgetHandler {
        type Entity = Widget;
        type Dto = WidgetDto;

        fn store(&self) -> &dyn ResourceStore<Widget> {
            &self.store
        }
    }

    fn dto(label: &str) -> WidgetDto {
        WidgetDto {
            id: None,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let handler = WidgetHandler::default();
        let created = handler.create(dto("gear")).await.unwrap();
        let id = created.id.expect("store assigns an id");

        let fetched = handler.get_by_id(id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.label, "gear");
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let handler = WidgetHandler::default();
        let input = WidgetDto {
            id: Some(99),
            label: "sprocket".into(),
        };
        let created = handler.create(input).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let handler = WidgetHandler::default();
        assert_matches!(
            handler.get_by_id(42).await,
            Err(CoreError::NotFound { entity: "Widget", id: 42 })
        );
        assert_matches!(
            handler.update(42, dto("x")).await,
            Err(CoreError::NotFound { id: 42, .. })
        );
        assert_matches!(
            handler.delete(42).await,
            Err(CoreError::NotFound { id: 42, .. })
        );
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let handler = WidgetHandler::default();
        let id = handler.create(dto("bolt")).await.unwrap().id.unwrap();
        handler.delete(id).await.unwrap();
        assert_matches!(handler.get_by_id(id).await, Err(CoreError::NotFound { .. }));
        assert_matches!(handler.delete(id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_all_matches_persisted_count() {
        let handler = WidgetHandler::default();
        for label in ["a", "b", "c"] {
            handler.create(dto(label)).await.unwrap();
        }
        let first = handler.list_all().await.unwrap();
        let second = handler.list_all().await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let handler = WidgetHandler::default();
        let id = handler.create(dto("old")).await.unwrap().id.unwrap();
        let updated = handler.update(id, dto("new")).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.label, "new");
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_the_store() {
        let handler = WidgetHandler::default();
        assert_matches!(handler.create(dto("")).await, Err(CoreError::Validation(_)));
        assert!(handler.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failures_surface_unchanged() {
        let handler = WidgetHandler {
            store: FakeStore {
                unavailable: true,
                ..FakeStore::default()
            },
        };
        assert_matches!(handler.list_all().await, Err(CoreError::StoreUnavailable(_)));
    }

    #[test]
    fn default_access_requires_authentication() {
        let handler = WidgetHandler::default();
        for op in [
            Operation::List,
            Operation::Get,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
        ] {
            assert_eq!(handler.access(op), Access::Authenticated);
        }
    }
}
