use super::*;

/// Tests deleting a student twice.
///
/// Expected: Ok(()) both times and the student is gone
#[tokio::test]
async fn deletes_student_idempotently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_student(db, 1).await?;

    let repo = StudentRepository::new(db);
    repo.delete(stored.id as u32).await?;
    repo.delete(stored.id as u32).await?;

    assert!(repo.get_by_id(stored.id as u32).await?.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that deleting a class leaves its students in place.
///
/// Expected: the student still references the deleted class
#[tokio::test]
async fn class_delete_does_not_cascade() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let stored = factory::create_student(db, class.id.into()).await?;

    crate::server::data::class::ClassRepository::new(db)
        .delete(class.id as u32)
        .await?;

    let student = StudentRepository::new(db)
        .get_by_id(stored.id as u32)
        .await?
        .unwrap();
    assert_eq!(student.class_id, i64::from(class.id));

    Ok(())
}
