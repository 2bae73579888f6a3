use super::*;

/// Tests creating a student with a section.
///
/// Expected: Ok(Student) with the assigned ID and provided fields
#[tokio::test]
async fn creates_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let student = StudentRepository::new(db)
        .create(CreateStudentParam {
            student_name: "Ada".to_string(),
            class_id: class.id.into(),
            student_section: Some("A".to_string()),
        })
        .await?;

    assert_eq!(student.id, 1);
    assert_eq!(student.student_name, "Ada");
    assert_eq!(student.class_id, i64::from(class.id));
    assert_eq!(student.student_section.as_deref(), Some("A"));

    Ok(())
}

/// Tests that the class reference is not validated.
///
/// Expected: Ok(Student) referencing a class that does not exist
#[tokio::test]
async fn accepts_unknown_class_reference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db)
        .create(CreateStudentParam {
            student_name: "Grace".to_string(),
            class_id: 777,
            student_section: None,
        })
        .await?;

    assert_eq!(student.class_id, 777);
    assert!(student.student_section.is_none());

    Ok(())
}
