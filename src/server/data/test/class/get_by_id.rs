use super::*;

/// Tests getting an existing class by ID.
///
/// Expected: Ok(Some(Class)) equal to the stored row
#[tokio::test]
async fn gets_existing_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::class::ClassFactory::new(db)
        .class_name("History")
        .student_count(12)
        .build()
        .await?;

    let class = ClassRepository::new(db)
        .get_by_id(stored.id as u32)
        .await?
        .unwrap();

    assert_eq!(class.id, stored.id as u32);
    assert_eq!(class.class_name, "History");
    assert_eq!(class.student_count, 12);

    Ok(())
}

/// Tests getting a nonexistent class by ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassRepository::new(db).get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests getting an ID beyond the storage key range.
///
/// Expected: Ok(None) rather than a database error
#[tokio::test]
async fn returns_none_for_out_of_range_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassRepository::new(db).get_by_id(u32::MAX).await?;

    assert!(result.is_none());

    Ok(())
}
