use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/students", post(handlers::student::register_student))
        .route("/api/students", get(handlers::student::list_students))
        .route("/api/students/:id", get(handlers::student::get_student))
}
