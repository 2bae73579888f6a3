pub use super::class::Entity as Class;
pub use super::student::Entity as Student;
