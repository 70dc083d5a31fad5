use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAnnouncement;

pub async fn create_announcement(
    pool: &Pool<Postgres>,
    title: &str,
    message: &str,
    author: &str,
) -> Result<DbAnnouncement> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let announcement = sqlx::query_as::<_, DbAnnouncement>(
        r#"
        INSERT INTO announcements (id, title, message, sent_at, author)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, message, sent_at, author
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(message)
    .bind(now)
    .bind(author)
    .fetch_one(pool)
    .await?;

    Ok(announcement)
}

pub async fn list_announcements(pool: &Pool<Postgres>) -> Result<Vec<DbAnnouncement>> {
    let announcements = sqlx::query_as::<_, DbAnnouncement>(
        r#"
        SELECT id, title, message, sent_at, author
        FROM announcements
        ORDER BY sent_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(announcements)
}
