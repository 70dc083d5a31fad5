use chrono::Utc;
use eyre::Result;
use shala_core::errors::{ShalaError, ShalaResult};
use sqlx::{Pool, Postgres};

use crate::db_err;
use crate::models::DbStudent;

pub async fn create_student(
    pool: &Pool<Postgres>,
    id: &str,
    name: &str,
    email: &str,
    phone: Option<&str>,
) -> ShalaResult<DbStudent> {
    let now = Utc::now();

    tracing::debug!("Registering student: id={}, email={}", id, email);

    let result = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (id, name, email, phone, joined_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, phone, joined_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(student) => Ok(student),
        // 23505 = unique_violation: the id is already registered
        Err(err)
            if err
                .as_database_error()
                .and_then(|db| db.code())
                .as_deref()
                == Some("23505") =>
        {
            Err(ShalaError::Validation(format!(
                "Student with ID {} is already registered",
                id
            )))
        }
        Err(err) => Err(db_err(err)),
    }
}

pub async fn get_student_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, name, email, phone, joined_at
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn list_students(pool: &Pool<Postgres>) -> Result<Vec<DbStudent>> {
    let students = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, name, email, phone, joined_at
        FROM students
        ORDER BY joined_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(students)
}

pub async fn count_students(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
