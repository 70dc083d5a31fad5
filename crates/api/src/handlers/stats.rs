use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use shala_core::{errors::ShalaError, models::stats::DashboardStats};

use crate::{middleware::error_handling::AppError, ApiState};

/// Admin dashboard summary: member count, today's bookings, and total
/// stored revenue.
#[axum::debug_handler]
pub async fn dashboard_stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DashboardStats>, AppError> {
    let today = Utc::now().date_naive();

    let total_students = shala_db::repositories::student::count_students(&state.db_pool)
        .await
        .map_err(ShalaError::Database)?;
    let today_bookings =
        shala_db::repositories::booking::count_bookings_on(&state.db_pool, today)
            .await
            .map_err(ShalaError::Database)?;
    let total_revenue = shala_db::repositories::booking::total_revenue(&state.db_pool)
        .await
        .map_err(ShalaError::Database)?;

    Ok(Json(DashboardStats {
        total_students,
        today_bookings,
        total_revenue,
    }))
}
