//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let class = factory::create_class(&db).await?;
//!     let student = factory::create_student(&db, class.id.into()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let class = factory::class::ClassFactory::new(&db)
//!     .class_name("Math")
//!     .student_count(30)
//!     .build()
//!     .await?;
//! ```

pub mod class;
pub mod helpers;
pub mod student;

pub use class::create_class;
pub use student::create_student;
