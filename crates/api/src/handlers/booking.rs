use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use shala_core::{
    errors::ShalaError,
    models::booking::{BookingResponse, BookingsQuery, CreateBookingRequest},
    schedule,
};
use shala_db::models::DbBooking;

use crate::{middleware::error_handling::AppError, ApiState};

fn booking_response(booking: DbBooking) -> BookingResponse {
    BookingResponse {
        id: booking.id,
        student_id: booking.student_id,
        slot_id: booking.slot_id,
        date: booking.date,
        time: booking.time,
        status: booking.status,
        price: booking.price,
        created_at: booking.created_at,
    }
}

fn sort_newest_first(bookings: &mut [DbBooking]) {
    bookings.sort_by(|a, b| {
        schedule::slot_sort_key(b.date, &b.time).cmp(&schedule::slot_sort_key(a.date, &a.time))
    });
}

/// Reserves a slot for a student. The caller's identity arrives explicitly
/// in the payload; the atomic check-and-claim happens in the reservation
/// coordinator, so a lost race comes back as `409 Conflict`.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let student_id = payload.student_id.trim();
    if student_id.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Student id is required".to_string(),
        )));
    }

    let booking =
        shala_db::repositories::booking::reserve_slot(&state.db_pool, student_id, payload.slot_id)
            .await?;

    Ok(Json(booking_response(booking)))
}

/// A student's booking history, newest class first.
#[axum::debug_handler]
pub async fn get_student_bookings(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let mut bookings =
        shala_db::repositories::booking::get_bookings_by_student_id(&state.db_pool, &student_id)
            .await
            .map_err(ShalaError::Database)?;

    sort_newest_first(&mut bookings);

    Ok(Json(bookings.into_iter().map(booking_response).collect()))
}

/// Admin listing of bookings, optionally restricted to one class day.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let mut bookings = shala_db::repositories::booking::list_bookings(&state.db_pool, query.date)
        .await
        .map_err(ShalaError::Database)?;

    sort_newest_first(&mut bookings);

    Ok(Json(bookings.into_iter().map(booking_response).collect()))
}
