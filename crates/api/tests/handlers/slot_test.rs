use axum::Json;
use mockall::predicate;
use pretty_assertions::assert_eq;
use shala_api::middleware::error_handling::AppError;
use shala_core::{
    errors::ShalaError,
    models::slot::{CreateSlotRequest, GenerateSlotsRequest, SlotResponse},
    schedule,
};
use shala_db::models::DbSlot;
use uuid::Uuid;

use crate::test_utils::{june, unbooked_slot, TestContext};

fn to_response(slot: DbSlot) -> SlotResponse {
    SlotResponse {
        id: slot.id,
        date: slot.date,
        time: slot.time,
        is_booked: slot.is_booked,
        occupant_id: slot.occupant_id,
    }
}

// Test wrapper mirroring the create_slot handler logic against mocks
async fn test_create_slot_wrapper(
    ctx: &TestContext,
    request: CreateSlotRequest,
) -> Result<Json<SlotResponse>, AppError> {
    let time = request.time.trim();
    if time.is_empty() || schedule::time_of_day(time).is_none() {
        return Err(AppError(ShalaError::Validation(format!(
            "Invalid time \"{}\"",
            time
        ))));
    }

    let slot = ctx
        .slot_repo
        .create_slot(request.date, time.to_string())
        .await?;

    Ok(Json(to_response(slot)))
}

// Test wrapper mirroring the generate_slots handler logic
async fn test_generate_slots_wrapper(
    ctx: &TestContext,
    request: GenerateSlotsRequest,
) -> Result<u64, AppError> {
    if request.dates.is_empty() || request.times.is_empty() {
        return Err(AppError(ShalaError::Validation(
            "Select at least one day and one time slot".to_string(),
        )));
    }
    for time in &request.times {
        if schedule::time_of_day(time).is_none() {
            return Err(AppError(ShalaError::Validation(format!(
                "Invalid time \"{}\"",
                time
            ))));
        }
    }

    let created = ctx
        .slot_repo
        .generate_slots(request.dates, request.times)
        .await?;

    Ok(created)
}

// Test wrapper mirroring the available-slots listing
async fn test_available_slots_wrapper(
    ctx: &TestContext,
    date: chrono::NaiveDate,
) -> Result<Vec<SlotResponse>, AppError> {
    let mut slots = ctx.slot_repo.list_available_slots(date).await?;
    slots.sort_by_key(|slot| schedule::slot_sort_key(slot.date, &slot.time));
    Ok(slots.into_iter().map(to_response).collect())
}

#[tokio::test]
async fn test_create_slot_success() {
    let mut ctx = TestContext::new();
    let slot = unbooked_slot(june(1), "6:00 AM");
    let returned = slot.clone();

    ctx.slot_repo
        .expect_create_slot()
        .with(predicate::eq(june(1)), predicate::eq("6:00 AM".to_string()))
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));

    let response = test_create_slot_wrapper(
        &ctx,
        CreateSlotRequest {
            date: june(1),
            time: "6:00 AM".to_string(),
        },
    )
    .await
    .expect("Slot creation should succeed");

    assert_eq!(response.0.id, slot.id);
    assert!(!response.0.is_booked);
}

#[tokio::test]
async fn test_create_slot_rejects_garbage_time() {
    let ctx = TestContext::new();

    let err = test_create_slot_wrapper(
        &ctx,
        CreateSlotRequest {
            date: june(1),
            time: "sunrise".to_string(),
        },
    )
    .await
    .expect_err("Unparseable time should be rejected");

    assert!(matches!(err.0, ShalaError::Validation(_)));
}

#[tokio::test]
async fn test_generate_slots_counts_pairs() {
    let mut ctx = TestContext::new();
    let dates = vec![june(1), june(2)];
    let times = vec!["6:00 AM".to_string(), "7:00 AM".to_string(), "4:00 PM".to_string()];

    ctx.slot_repo
        .expect_generate_slots()
        .with(predicate::eq(dates.clone()), predicate::eq(times.clone()))
        .times(1)
        .returning(|dates, times| Ok((dates.len() * times.len()) as u64));

    let created = test_generate_slots_wrapper(&ctx, GenerateSlotsRequest { dates, times })
        .await
        .expect("Generation should succeed");

    assert_eq!(created, 6);
}

#[tokio::test]
async fn test_generate_slots_requires_selection() {
    let ctx = TestContext::new();

    let err = test_generate_slots_wrapper(
        &ctx,
        GenerateSlotsRequest {
            dates: vec![],
            times: vec!["6:00 AM".to_string()],
        },
    )
    .await
    .expect_err("Empty day selection should be rejected");

    assert!(matches!(err.0, ShalaError::Validation(_)));
}

#[tokio::test]
async fn test_available_slots_sorted_by_time_of_day() {
    let mut ctx = TestContext::new();

    let evening = unbooked_slot(june(1), "4:00 PM");
    let dawn = unbooked_slot(june(1), "6:00 AM");
    let noon = unbooked_slot(june(1), "12:00 PM");

    let unsorted = vec![evening.clone(), dawn.clone(), noon.clone()];
    ctx.slot_repo
        .expect_list_available_slots()
        .with(predicate::eq(june(1)))
        .returning(move |_| Ok(unsorted.clone()));

    let slots = test_available_slots_wrapper(&ctx, june(1))
        .await
        .expect("Listing should succeed");

    let times: Vec<_> = slots.iter().map(|slot| slot.time.as_str()).collect();
    assert_eq!(times, vec!["6:00 AM", "12:00 PM", "4:00 PM"]);
}

#[tokio::test]
async fn test_delete_booked_slot_surfaces_validation_error() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_delete_slot()
        .with(predicate::eq(slot_id))
        .returning(|id| {
            Err(ShalaError::Validation(format!(
                "Slot {} is booked and cannot be deleted",
                id
            )))
        });

    let err = ctx
        .slot_repo
        .delete_slot(slot_id)
        .await
        .expect_err("Deleting a booked slot should fail");

    assert!(matches!(err, ShalaError::Validation(_)));
}
