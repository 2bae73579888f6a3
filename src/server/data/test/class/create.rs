use super::*;

/// Tests creating a class.
///
/// Verifies that the repository inserts the class and returns it with the
/// store-assigned ID and the provided fields.
///
/// Expected: Ok(Class)
#[tokio::test]
async fn creates_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let class = repo
        .create(CreateClassParam {
            class_name: "Math".to_string(),
            student_count: 0,
        })
        .await?;

    assert_eq!(class.id, 1);
    assert_eq!(class.class_name, "Math");
    assert_eq!(class.student_count, 0);

    Ok(())
}

/// Tests that class names are not unique.
///
/// Expected: Ok(Class) twice with distinct IDs
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let param = CreateClassParam {
        class_name: "Science".to_string(),
        student_count: 3,
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.class_name, second.class_name);

    Ok(())
}

/// Tests that a create fails with a database error when the table is missing.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassRepository::new(db)
        .create(CreateClassParam {
            class_name: "Math".to_string(),
            student_count: 0,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
