use super::*;

/// Tests listing students on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let students = StudentRepository::new(db).get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests that the listing reflects creates, deletes and updates.
///
/// Creates three students, deletes one and moves another to a new class.
///
/// Expected: Ok(Vec) with two students in their last-written state
#[tokio::test]
async fn reflects_creates_deletes_and_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_student(db, 1).await?;
    let b = factory::create_student(db, 1).await?;
    let _c = factory::create_student(db, 1).await?;

    let repo = StudentRepository::new(db);
    repo.delete(a.id as u32).await?;
    repo.update(UpdateStudentParam {
        id: b.id as u32,
        student_name: "Moved".to_string(),
        class_id: 2,
        student_section: Some("E".to_string()),
    })
    .await?;

    let students = repo.get_all().await?;

    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s.id != a.id as u32));
    let moved = students.iter().find(|s| s.id == b.id as u32).unwrap();
    assert_eq!(moved.student_name, "Moved");
    assert_eq!(moved.class_id, 2);
    assert_eq!(moved.student_section.as_deref(), Some("E"));

    Ok(())
}
