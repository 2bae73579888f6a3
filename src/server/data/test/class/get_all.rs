use super::*;

/// Tests listing classes on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let classes = ClassRepository::new(db).get_all().await?;

    assert!(classes.is_empty());

    Ok(())
}

/// Tests that the listing reflects creates, deletes and updates.
///
/// Creates three classes, deletes one and renames another.
///
/// Expected: Ok(Vec) with two classes in their last-written state
#[tokio::test]
async fn reflects_creates_deletes_and_updates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_class(db).await?;
    let b = factory::create_class(db).await?;
    let _c = factory::create_class(db).await?;

    let repo = ClassRepository::new(db);
    repo.delete(a.id as u32).await?;
    repo.update(UpdateClassParam {
        id: b.id as u32,
        class_name: "Renamed".to_string(),
        student_count: 9,
    })
    .await?;

    let classes = repo.get_all().await?;

    assert_eq!(classes.len(), 2);
    assert!(classes.iter().all(|c| c.id != a.id as u32));
    let renamed = classes.iter().find(|c| c.id == b.id as u32).unwrap();
    assert_eq!(renamed.class_name, "Renamed");
    assert_eq!(renamed.student_count, 9);

    Ok(())
}
