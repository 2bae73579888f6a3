//! Student factory for creating test student rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// The class reference is not checked, so any `class_id` can be used.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, class.id.into())
///     .student_name("Ada")
///     .student_section("B")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_name: String,
    class_id: i64,
    student_section: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_name: `"Student {id}"` where id is auto-incremented
    /// - student_section: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `class_id` - Class the student references
    pub fn new(db: &'a DatabaseConnection, class_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            student_name: format!("Student {}", id),
            class_id,
            student_section: None,
        }
    }

    /// Sets the student name.
    pub fn student_name(mut self, student_name: impl Into<String>) -> Self {
        self.student_name = student_name.into();
        self
    }

    /// Sets the section label.
    pub fn student_section(mut self, student_section: impl Into<String>) -> Self {
        self.student_section = Some(student_section.into());
        self
    }

    /// Builds and inserts the student row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            student_name: ActiveValue::Set(self.student_name),
            class_id: ActiveValue::Set(self.class_id),
            student_section: ActiveValue::Set(self.student_section),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values referencing `class_id`.
///
/// Shorthand for `StudentFactory::new(db, class_id).build().await`.
pub async fn create_student(
    db: &DatabaseConnection,
    class_id: i64,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, class_id).build().await
}
