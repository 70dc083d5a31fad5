use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", post(handlers::slot::create_slot))
        .route("/api/slots", get(handlers::slot::list_slots))
        .route("/api/slots/generate", post(handlers::slot::generate_slots))
        .route(
            "/api/slots/available",
            get(handlers::slot::list_available_slots),
        )
        .route("/api/slots/:id", delete(handlers::slot::delete_slot))
}
