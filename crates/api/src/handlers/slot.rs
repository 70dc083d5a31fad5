use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use shala_core::{
    errors::ShalaError,
    models::slot::{
        AvailableSlotsQuery, CreateSlotRequest, GenerateSlotsRequest, GenerateSlotsResponse,
        SlotResponse,
    },
    schedule,
};
use shala_db::models::DbSlot;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn slot_response(slot: DbSlot) -> SlotResponse {
    SlotResponse {
        id: slot.id,
        date: slot.date,
        time: slot.time,
        is_booked: slot.is_booked,
        occupant_id: slot.occupant_id,
    }
}

fn validate_time(time: &str) -> Result<&str, AppError> {
    let time = time.trim();
    if time.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Time is required".to_string(),
        )));
    }
    if schedule::time_of_day(time).is_none() {
        return Err(AppError(ShalaError::Validation(format!(
            "Invalid time \"{}\"; expected a clock time like \"6:00 AM\"",
            time
        ))));
    }
    Ok(time)
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let time = validate_time(&payload.time)?;

    let slot = shala_db::repositories::slot::create_slot(&state.db_pool, payload.date, time)
        .await
        .map_err(ShalaError::Database)?;

    Ok(Json(slot_response(slot)))
}

#[axum::debug_handler]
pub async fn generate_slots(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<GenerateSlotsRequest>,
) -> Result<Json<GenerateSlotsResponse>, AppError> {
    if payload.dates.is_empty() || payload.times.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Select at least one day and one time slot".to_string(),
        )));
    }

    let mut times = Vec::with_capacity(payload.times.len());
    for time in &payload.times {
        times.push(validate_time(time)?.to_string());
    }

    let created =
        shala_db::repositories::slot::generate_slots(&state.db_pool, &payload.dates, &times)
            .await
            .map_err(ShalaError::Database)?;

    Ok(Json(GenerateSlotsResponse { created }))
}

/// Admin listing of every slot, newest class first.
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let mut slots = shala_db::repositories::slot::list_slots(&state.db_pool)
        .await
        .map_err(ShalaError::Database)?;

    slots.sort_by(|a, b| {
        schedule::slot_sort_key(b.date, &b.time).cmp(&schedule::slot_sort_key(a.date, &a.time))
    });

    Ok(Json(slots.into_iter().map(slot_response).collect()))
}

/// Open slots for a given day, earliest class first. The listing may be
/// slightly stale; a stale "available" slot simply fails reservation.
#[axum::debug_handler]
pub async fn list_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let mut slots =
        shala_db::repositories::slot::list_available_slots(&state.db_pool, query.date)
            .await
            .map_err(ShalaError::Database)?;

    slots.sort_by_key(|slot| schedule::slot_sort_key(slot.date, &slot.time));

    Ok(Json(slots.into_iter().map(slot_response).collect()))
}

/// Deletes a slot; only unbooked slots may be deleted.
#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    shala_db::repositories::slot::delete_slot(&state.db_pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
