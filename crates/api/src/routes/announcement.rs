use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/announcements",
            post(handlers::announcement::create_announcement),
        )
        .route(
            "/api/announcements",
            get(handlers::announcement::list_announcements),
        )
}
