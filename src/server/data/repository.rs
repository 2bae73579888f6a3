//! Generic CRUD repository over SeaORM entities
//!
//! `Repository<E>` translates entity-level create, read, update and delete calls
//! into SeaORM operations for any entity `E`. Entity-specific repositories wrap it
//! and only add conversion between entity models and domain models.
//!
//! Nothing here spans a transaction: concurrent updates to the same row race and
//! the last write wins.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};

/// Primary key value type of entity `E`.
pub type PrimaryKey<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Repository providing typed CRUD operations for the entity `E`.
pub struct Repository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> Repository<'a, E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    /// Creates a new Repository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Inserts a new row
    ///
    /// The primary key should be left `NotSet` so the store assigns it.
    ///
    /// # Returns
    /// - `Ok(E::Model)` - The inserted row including its assigned primary key
    /// - `Err(DbErr)` - Insert rejected (constraint violation, connectivity)
    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.insert(self.db).await
    }

    /// Returns every row in store-defined order
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    /// Finds a row by primary key
    ///
    /// # Returns
    /// - `Ok(Some(E::Model))` - The matching row
    /// - `Ok(None)` - No row has this primary key
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_by_id(&self, id: PrimaryKey<E>) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Replaces the row identified by `id` with `model`
    ///
    /// `model` must carry the same primary key and every column `Set`; columns left
    /// `NotSet` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(E::Model))` - The row as stored after the update
    /// - `Ok(None)` - No row has this primary key
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: PrimaryKey<E>,
        model: E::ActiveModel,
    ) -> Result<Option<E::Model>, DbErr> {
        if E::find_by_id(id).one(self.db).await?.is_none() {
            return Ok(None);
        }

        match model.update(self.db).await {
            Ok(updated) => Ok(Some(updated)),
            // Row deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes the row identified by `id`
    ///
    /// Deleting a missing row is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: PrimaryKey<E>) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
