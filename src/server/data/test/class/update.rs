use super::*;

/// Tests replacing every field of an existing class.
///
/// Expected: Ok(Some(Class)) with the new values, persisted
#[tokio::test]
async fn replaces_existing_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::class::ClassFactory::new(db)
        .class_name("Math")
        .student_count(20)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(UpdateClassParam {
            id: stored.id as u32,
            class_name: "Algebra".to_string(),
            student_count: 0,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, stored.id as u32);
    assert_eq!(updated.class_name, "Algebra");
    assert_eq!(updated.student_count, 0);

    let fetched = repo.get_by_id(stored.id as u32).await?.unwrap();
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests updating a nonexistent class.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_nonexistent_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let result = repo
        .update(UpdateClassParam {
            id: 5,
            class_name: "Nothing".to_string(),
            student_count: 1,
        })
        .await?;

    assert!(result.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
