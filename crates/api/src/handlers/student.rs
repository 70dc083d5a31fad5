use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use shala_core::{
    errors::ShalaError,
    models::student::{RegisterStudentRequest, StudentResponse},
};
use shala_db::models::DbStudent;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn student_response(student: DbStudent) -> StudentResponse {
    StudentResponse {
        id: student.id,
        name: student.name,
        email: student.email,
        phone: student.phone,
        joined_at: student.joined_at,
    }
}

/// Registers a student. Self-signup passes the identity-provider uid as
/// `id`; admin manual entry omits it and an id is generated.
#[axum::debug_handler]
pub async fn register_student(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Name and Email are required".to_string(),
        )));
    }

    let id = match payload.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let student = shala_db::repositories::student::create_student(
        &state.db_pool,
        &id,
        name,
        email,
        payload.phone.as_deref(),
    )
    .await?;

    Ok(Json(student_response(student)))
}

/// A single student's profile.
#[axum::debug_handler]
pub async fn get_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = shala_db::repositories::student::get_student_by_id(&state.db_pool, &id)
        .await
        .map_err(ShalaError::Database)?
        .ok_or_else(|| ShalaError::NotFound(format!("Student with ID {} not found", id)))?;

    Ok(Json(student_response(student)))
}

/// Admin listing of students, newest member first.
#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = shala_db::repositories::student::list_students(&state.db_pool)
        .await
        .map_err(ShalaError::Database)?;

    Ok(Json(students.into_iter().map(student_response).collect()))
}
