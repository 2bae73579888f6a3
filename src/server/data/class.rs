//! Class data repository for database operations
//!
//! Provides the `ClassRepository` which binds the generic repository to the
//! `class` entity and converts entity models into class domain models.

use sea_orm::{ActiveValue, DatabaseConnection};

use crate::server::{
    data::repository::Repository,
    error::AppError,
    model::class::{Class, CreateClassParam, UpdateClassParam},
    util::parse::to_primary_key,
};

/// Repository providing database operations for class management.
pub struct ClassRepository<'a> {
    repo: Repository<'a, entity::class::Entity>,
}

impl<'a> ClassRepository<'a> {
    /// Creates a new ClassRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// Creates a new class
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the class creation data
    ///
    /// # Returns
    /// - `Ok(Class)` - The created class with its assigned ID
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateClassParam) -> Result<Class, AppError> {
        let model = self
            .repo
            .create(entity::class::ActiveModel {
                id: ActiveValue::NotSet,
                class_name: ActiveValue::Set(param.class_name),
                student_count: ActiveValue::Set(param.student_count),
            })
            .await?;

        Class::from_entity(model)
    }

    /// Gets every class
    pub async fn get_all(&self) -> Result<Vec<Class>, AppError> {
        self.repo
            .get_all()
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect()
    }

    /// Finds a class by ID
    ///
    /// # Returns
    /// - `Ok(Some(Class))` - The requested class if found
    /// - `Ok(None)` - The requested class does not exist
    /// - `Err(AppError::DbErr)` - Database error during get operation
    pub async fn get_by_id(&self, id: u32) -> Result<Option<Class>, AppError> {
        let Some(key) = to_primary_key(id) else {
            return Ok(None);
        };

        self.repo
            .get_by_id(key)
            .await?
            .map(Class::from_entity)
            .transpose()
    }

    /// Replaces every field of an existing class
    ///
    /// # Returns
    /// - `Ok(Some(Class))` - The updated class
    /// - `Ok(None)` - No class has the provided ID
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn update(&self, param: UpdateClassParam) -> Result<Option<Class>, AppError> {
        let Some(key) = to_primary_key(param.id) else {
            return Ok(None);
        };

        let model = entity::class::ActiveModel {
            id: ActiveValue::Unchanged(key),
            class_name: ActiveValue::Set(param.class_name),
            student_count: ActiveValue::Set(param.student_count),
        };

        self.repo
            .update(key, model)
            .await?
            .map(Class::from_entity)
            .transpose()
    }

    /// Deletes the class with the provided ID; a missing class is not an error
    pub async fn delete(&self, id: u32) -> Result<(), AppError> {
        if let Some(key) = to_primary_key(id) {
            let rows = self.repo.delete(key).await?;
            tracing::debug!("Deleted {} class row(s) for id {}", rows, id);
        }

        Ok(())
    }
}
