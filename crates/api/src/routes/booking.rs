use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/bookings", get(handlers::booking::list_bookings))
        .route(
            "/api/students/:id/bookings",
            get(handlers::booking::get_student_bookings),
        )
}
