//! Student data repository for database operations
//!
//! Provides the `StudentRepository` which binds the generic repository to the
//! `student` entity and converts entity models into student domain models.

use sea_orm::{ActiveValue, DatabaseConnection};

use crate::server::{
    data::repository::Repository,
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
    util::parse::to_primary_key,
};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a> {
    repo: Repository<'a, entity::student::Entity>,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// Creates a new student
    ///
    /// The referenced class is not checked for existence.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its assigned ID
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        let model = self
            .repo
            .create(entity::student::ActiveModel {
                id: ActiveValue::NotSet,
                student_name: ActiveValue::Set(param.student_name),
                class_id: ActiveValue::Set(param.class_id),
                student_section: ActiveValue::Set(param.student_section),
            })
            .await?;

        Student::from_entity(model)
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        self.repo
            .get_all()
            .await?
            .into_iter()
            .map(Student::from_entity)
            .collect()
    }

    /// Finds a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The requested student if found
    /// - `Ok(None)` - The requested student does not exist
    /// - `Err(AppError::DbErr)` - Database error during get operation
    pub async fn get_by_id(&self, id: u32) -> Result<Option<Student>, AppError> {
        let Some(key) = to_primary_key(id) else {
            return Ok(None);
        };

        self.repo
            .get_by_id(key)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Replaces every field of an existing student
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student has the provided ID
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, AppError> {
        let Some(key) = to_primary_key(param.id) else {
            return Ok(None);
        };

        let model = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(key),
            student_name: ActiveValue::Set(param.student_name),
            class_id: ActiveValue::Set(param.class_id),
            student_section: ActiveValue::Set(param.student_section),
        };

        self.repo
            .update(key, model)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    pub async fn delete(&self, id: u32) -> Result<(), AppError> {
        if let Some(key) = to_primary_key(id) {
            let rows = self.repo.delete(key).await?;
            tracing::debug!("Deleted {} student row(s) for id {}", rows, id);
        }

        Ok(())
    }
}
