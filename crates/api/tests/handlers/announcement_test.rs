use mockall::predicate;
use pretty_assertions::assert_eq;
use shala_api::middleware::error_handling::AppError;
use shala_core::{
    errors::ShalaError,
    models::announcement::{AnnouncementResponse, CreateAnnouncementRequest},
};
use shala_db::models::DbAnnouncement;
use uuid::Uuid;

use crate::test_utils::TestContext;

// Test wrapper mirroring the create_announcement handler logic against mocks
async fn test_create_announcement_wrapper(
    ctx: &TestContext,
    request: CreateAnnouncementRequest,
) -> Result<AnnouncementResponse, AppError> {
    let title = request.title.trim().to_string();
    let message = request.message.trim().to_string();
    if title.is_empty() || message.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Title and Message are required".to_string(),
        )));
    }

    let author = request
        .author
        .as_deref()
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .unwrap_or("Admin")
        .to_string();

    let announcement = ctx
        .announcement_repo
        .create_announcement(title, message, author)
        .await?;

    Ok(AnnouncementResponse {
        id: announcement.id,
        title: announcement.title,
        message: announcement.message,
        sent_at: announcement.sent_at,
        author: announcement.author,
    })
}

fn db_announcement(title: String, message: String, author: String) -> DbAnnouncement {
    DbAnnouncement {
        id: Uuid::new_v4(),
        title,
        message,
        sent_at: chrono::Utc::now(),
        author,
    }
}

#[tokio::test]
async fn test_create_announcement_defaults_author() {
    let mut ctx = TestContext::new();

    ctx.announcement_repo
        .expect_create_announcement()
        .with(
            predicate::eq("Studio closed".to_string()),
            predicate::eq("No classes on Friday".to_string()),
            predicate::eq("Admin".to_string()),
        )
        .times(1)
        .returning(|title, message, author| Ok(db_announcement(title, message, author)));

    let announcement = test_create_announcement_wrapper(
        &ctx,
        CreateAnnouncementRequest {
            title: "Studio closed".to_string(),
            message: "No classes on Friday".to_string(),
            author: None,
        },
    )
    .await
    .expect("Announcement should be stored");

    assert_eq!(announcement.author, "Admin");
}

#[tokio::test]
async fn test_create_announcement_requires_title_and_message() {
    let ctx = TestContext::new();

    let err = test_create_announcement_wrapper(
        &ctx,
        CreateAnnouncementRequest {
            title: "Studio closed".to_string(),
            message: "   ".to_string(),
            author: None,
        },
    )
    .await
    .expect_err("Blank message should be rejected");

    assert!(matches!(err.0, ShalaError::Validation(_)));
}
