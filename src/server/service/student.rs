use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        StudentRepository::new(self.db).create(param).await
    }

    /// Gets every student
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        StudentRepository::new(self.db).get_all().await
    }

    /// Gets a student by ID, returning `AppError::NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: u32) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a student, returning `AppError::NotFound` if it doesn't exist
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Student, AppError> {
        let id = param.id;

        StudentRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a student; succeeds whether or not it existed
    pub async fn delete(&self, id: u32) -> Result<(), AppError> {
        StudentRepository::new(self.db).delete(id).await
    }
}

fn not_found(id: u32) -> AppError {
    AppError::NotFound(format!("Student {} not found", id))
}
