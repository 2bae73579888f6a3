use sea_orm::DatabaseConnection;

use crate::server::{
    data::class::ClassRepository,
    error::AppError,
    model::class::{Class, CreateClassParam, UpdateClassParam},
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new class
    pub async fn create(&self, param: CreateClassParam) -> Result<Class, AppError> {
        ClassRepository::new(self.db).create(param).await
    }

    /// Gets every class
    pub async fn get_all(&self) -> Result<Vec<Class>, AppError> {
        ClassRepository::new(self.db).get_all().await
    }

    /// Gets a class by ID, returning `AppError::NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: u32) -> Result<Class, AppError> {
        ClassRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a class, returning `AppError::NotFound` if it doesn't exist
    pub async fn update(&self, param: UpdateClassParam) -> Result<Class, AppError> {
        let id = param.id;

        ClassRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a class; succeeds whether or not it existed
    pub async fn delete(&self, id: u32) -> Result<(), AppError> {
        ClassRepository::new(self.db).delete(id).await
    }
}

fn not_found(id: u32) -> AppError {
    AppError::NotFound(format!("Class {} not found", id))
}
