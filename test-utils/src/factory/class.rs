//! Class factory for creating test class rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class::ClassFactory;
///
/// let class = ClassFactory::new(&db)
///     .class_name("History")
///     .student_count(12)
///     .build()
///     .await?;
/// ```
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    class_name: String,
    student_count: i64,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - class_name: `"Class {id}"` where id is auto-incremented
    /// - student_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            class_name: format!("Class {}", id),
            student_count: 0,
        }
    }

    /// Sets the class name.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the stored student count.
    pub fn student_count(mut self, student_count: i64) -> Self {
        self.student_count = student_count;
        self
    }

    /// Builds and inserts the class row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::class::Model)` - Created class with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            id: ActiveValue::NotSet,
            class_name: ActiveValue::Set(self.class_name),
            student_count: ActiveValue::Set(self.student_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values.
///
/// Shorthand for `ClassFactory::new(db).build().await`.
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).build().await
}
