//! Base repository traits - the generic data-access layer.
//!
//! These traits provide a foundation for all repositories with common
//! CRUD operations that can be composed as needed. Domain repositories
//! implement `fn db()` and inherit the query construction; the generic
//! layer surfaces raw store errors and leaves duplicate detection and
//! "missing id" policy to the domain layer.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, QuerySelect, Value,
};

use crate::errors::AppResult;
use crate::types::PageParams;

/// Typed partial update.
///
/// One explicit patch struct per entity; fields left as `None` are not
/// touched. Replaces dynamic field-mapping updates with per-entity code
/// while preserving partial-update semantics.
pub trait Patch<A>: Send {
    fn apply(self, model: &mut A);
}

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find entity by primary key. Absent is `None`, never an error.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<E::Model>> {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Equality lookup on an arbitrary column, first match.
    async fn find_by<V>(&self, column: E::Column, value: V) -> AppResult<Option<E::Model>>
    where
        V: Into<Value> + Send,
    {
        E::find()
            .filter(column.eq(value))
            .one(self.db())
            .await
            .map_err(Into::into)
    }

    /// Equality lookup on an arbitrary column, all matches.
    async fn find_all_by<V>(&self, column: E::Column, value: V) -> AppResult<Vec<E::Model>>
    where
        V: Into<Value> + Send,
    {
        E::find()
            .filter(column.eq(value))
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// List entities in the store's natural order, skipping `page.skip`
    /// and returning at most `page.limit`. Empty is a valid outcome.
    async fn list(&self, page: PageParams) -> AppResult<Vec<E::Model>> {
        E::find()
            .offset(page.skip)
            .limit(page.limit)
            .all(self.db())
            .await
            .map_err(Into::into)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, A>: Send + Sync
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Clone + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert a new entity and return it with its generated id populated.
    /// Constraint violations surface as raw store errors here; translating
    /// the expected ones is the domain layer's job.
    async fn insert(&self, model: A) -> AppResult<E::Model> {
        model.insert(self.db()).await.map_err(Into::into)
    }

    /// Apply a typed partial update to the entity with the given id.
    ///
    /// Returns `None` when the id has no match (a no-op, not an error).
    /// An empty patch returns the entity unchanged without issuing an
    /// UPDATE statement.
    async fn patch<P>(&self, id: i32, patch: P) -> AppResult<Option<E::Model>>
    where
        P: Patch<A>,
    {
        let Some(found) = E::find_by_id(id).one(self.db()).await? else {
            return Ok(None);
        };

        let mut active = found.clone().into_active_model();
        patch.apply(&mut active);
        if !active.is_changed() {
            return Ok(Some(found));
        }

        active.update(self.db()).await.map(Some).map_err(Into::into)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Delete by primary key. Returns `false` when the id has no match
    /// (a no-op, not an error).
    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected > 0)
    }
}

/// Full CRUD repository - combines all operations.
pub trait CrudRepository<E, A>: ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Clone + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudRepository for types implementing all traits
impl<T, E, A> CrudRepository<E, A> for T
where
    T: ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>,
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Clone + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}
