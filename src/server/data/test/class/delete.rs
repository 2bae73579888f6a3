use super::*;

/// Tests deleting an existing class.
///
/// Expected: Ok(()) and the class is gone
#[tokio::test]
async fn deletes_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_class(db).await?;

    let repo = ClassRepository::new(db);
    repo.delete(stored.id as u32).await?;

    assert!(repo.get_by_id(stored.id as u32).await?.is_none());

    Ok(())
}

/// Tests that deleting is idempotent.
///
/// Expected: Ok(()) for a missing ID, and again for the same ID
#[tokio::test]
async fn deleting_missing_class_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);

    assert!(repo.delete(404).await.is_ok());
    assert!(repo.delete(404).await.is_ok());
    assert!(repo.delete(u32::MAX).await.is_ok());

    Ok(())
}

/// Tests that deleting one class leaves the others untouched.
///
/// Expected: Ok(()) with the remaining class still present
#[tokio::test]
async fn deletes_only_target_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Class).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_class(db).await?;
    let other = factory::create_class(db).await?;

    let repo = ClassRepository::new(db);
    repo.delete(target.id as u32).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id as u32);

    Ok(())
}
