use axum::{extract::State, Json};
use std::sync::Arc;

use shala_core::{
    errors::ShalaError,
    models::announcement::{AnnouncementResponse, CreateAnnouncementRequest},
};
use shala_db::models::DbAnnouncement;

use crate::{middleware::error_handling::AppError, ApiState};

fn announcement_response(announcement: DbAnnouncement) -> AnnouncementResponse {
    AnnouncementResponse {
        id: announcement.id,
        title: announcement.title,
        message: announcement.message,
        sent_at: announcement.sent_at,
        author: announcement.author,
    }
}

/// Stores a broadcast announcement. Storing the record is the whole
/// delivery; there is no per-student fan-out.
#[axum::debug_handler]
pub async fn create_announcement(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> Result<Json<AnnouncementResponse>, AppError> {
    let title = payload.title.trim();
    let message = payload.message.trim();
    if title.is_empty() || message.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Title and Message are required".to_string(),
        )));
    }

    let author = payload
        .author
        .as_deref()
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .unwrap_or("Admin");

    let announcement = shala_db::repositories::announcement::create_announcement(
        &state.db_pool,
        title,
        message,
        author,
    )
    .await
    .map_err(ShalaError::Database)?;

    Ok(Json(announcement_response(announcement)))
}

/// All announcements, newest first.
#[axum::debug_handler]
pub async fn list_announcements(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AnnouncementResponse>>, AppError> {
    let announcements = shala_db::repositories::announcement::list_announcements(&state.db_pool)
        .await
        .map_err(ShalaError::Database)?;

    Ok(Json(
        announcements
            .into_iter()
            .map(announcement_response)
            .collect(),
    ))
}
