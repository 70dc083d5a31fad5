use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use mockall::predicate;
use pretty_assertions::assert_eq;
use shala_api::middleware::error_handling::AppError;
use shala_core::{
    errors::ShalaError,
    models::student::{RegisterStudentRequest, StudentResponse},
};
use shala_db::models::DbStudent;
use uuid::Uuid;

use crate::test_utils::TestContext;

// Test wrapper mirroring the register_student handler logic against mocks
async fn test_register_student_wrapper(
    ctx: &TestContext,
    request: RegisterStudentRequest,
) -> Result<StudentResponse, AppError> {
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_string();
    if name.is_empty() || email.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Name and Email are required".to_string(),
        )));
    }

    let id = match request.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let student = ctx
        .student_repo
        .create_student(id, name, email, request.phone)
        .await?;

    Ok(StudentResponse {
        id: student.id,
        name: student.name,
        email: student.email,
        phone: student.phone,
        joined_at: student.joined_at,
    })
}

fn db_student(id: String, name: String, email: String, phone: Option<String>) -> DbStudent {
    DbStudent {
        id,
        name,
        email,
        phone,
        joined_at: chrono::Utc::now(),
    }
}

#[tokio::test]
async fn test_register_student_with_provider_uid() {
    let mut ctx = TestContext::new();
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    ctx.student_repo
        .expect_create_student()
        .with(
            predicate::eq("auth-uid-123".to_string()),
            predicate::eq(name.clone()),
            predicate::eq(email.clone()),
            predicate::eq(None),
        )
        .times(1)
        .returning(|id, name, email, phone| Ok(db_student(id, name, email, phone)));

    let student = test_register_student_wrapper(
        &ctx,
        RegisterStudentRequest {
            id: Some("auth-uid-123".to_string()),
            name,
            email,
            phone: None,
        },
    )
    .await
    .expect("Registration should succeed");

    assert_eq!(student.id, "auth-uid-123");
}

#[tokio::test]
async fn test_register_student_generates_id_when_missing() {
    let mut ctx = TestContext::new();

    ctx.student_repo
        .expect_create_student()
        .times(1)
        .returning(|id, name, email, phone| Ok(db_student(id, name, email, phone)));

    let student = test_register_student_wrapper(
        &ctx,
        RegisterStudentRequest {
            id: None,
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("9876543210".to_string()),
        },
    )
    .await
    .expect("Registration should succeed");

    // Admin manual entry gets a generated uuid id
    assert!(Uuid::parse_str(&student.id).is_ok());
    assert_eq!(student.phone.as_deref(), Some("9876543210"));
}

#[tokio::test]
async fn test_register_student_requires_name_and_email() {
    let ctx = TestContext::new();

    let err = test_register_student_wrapper(
        &ctx,
        RegisterStudentRequest {
            id: None,
            name: "".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        },
    )
    .await
    .expect_err("Missing name should be rejected");

    assert!(matches!(err.0, ShalaError::Validation(_)));
}

#[tokio::test]
async fn test_register_student_duplicate_id() {
    let mut ctx = TestContext::new();

    ctx.student_repo.expect_create_student().returning(|id, _, _, _| {
        Err(ShalaError::Validation(format!(
            "Student with ID {} is already registered",
            id
        )))
    });

    let err = test_register_student_wrapper(
        &ctx,
        RegisterStudentRequest {
            id: Some("auth-uid-123".to_string()),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        },
    )
    .await
    .expect_err("Duplicate registration should fail");

    assert!(matches!(err.0, ShalaError::Validation(_)));
}
