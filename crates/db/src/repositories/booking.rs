//! Booking repository, including the slot reservation coordinator.
//!
//! `reserve_slot` is the only code path that creates bookings. It runs as a
//! single transaction holding a row lock on the target slot, so two
//! concurrent reservations of the same slot serialize: one commits, the
//! other observes `is_booked` and fails without mutating anything.

use chrono::{NaiveDate, Utc};
use eyre::Result;
use shala_core::errors::{ShalaError, ShalaResult};
use shala_core::models::booking::{BookingStatus, DROP_IN_PRICE};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::db_err;
use crate::models::{DbBooking, DbSlot};

/// Atomically claims `slot_id` for `student_id` and records the booking.
///
/// Fails with `NotFound` when the slot does not exist and `AlreadyBooked`
/// when its `is_booked` flag is already set; neither failure mutates state.
pub async fn reserve_slot(
    pool: &Pool<Postgres>,
    student_id: &str,
    slot_id: Uuid,
) -> ShalaResult<DbBooking> {
    tracing::debug!("Reserving slot: slot_id={}, student_id={}", slot_id, student_id);

    let mut tx = pool.begin().await.map_err(db_err)?;

    // Row lock: concurrent reservations of the same slot queue up here.
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, is_booked, occupant_id
        FROM slots
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(slot_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(db_err)?
    .ok_or_else(|| ShalaError::NotFound(format!("Slot with ID {} not found", slot_id)))?;

    if slot.is_booked {
        // Dropping the transaction rolls it back; nothing was written.
        return Err(ShalaError::AlreadyBooked(format!(
            "Slot {} on {} at {} is no longer available",
            slot.id, slot.date, slot.time
        )));
    }

    sqlx::query(
        r#"
        UPDATE slots
        SET is_booked = TRUE, occupant_id = $2
        WHERE id = $1
        "#,
    )
    .bind(slot_id)
    .bind(student_id)
    .execute(&mut *tx)
    .await
    .map_err(db_err)?;

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, student_id, slot_id, date, time, status, price, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, student_id, slot_id, date, time, status, price, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(student_id)
    .bind(slot_id)
    .bind(slot.date)
    .bind(&slot.time)
    .bind(BookingStatus::Upcoming.as_str())
    .bind(DROP_IN_PRICE)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(db_err)?;

    tx.commit().await.map_err(db_err)?;

    tracing::debug!("Slot reserved: slot_id={}, booking_id={}", slot_id, booking.id);
    Ok(booking)
}

pub async fn get_bookings_by_student_id(
    pool: &Pool<Postgres>,
    student_id: &str,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, student_id, slot_id, date, time, status, price, created_at
        FROM bookings
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn list_bookings(
    pool: &Pool<Postgres>,
    date: Option<NaiveDate>,
) -> Result<Vec<DbBooking>> {
    let bookings = match date {
        Some(date) => {
            sqlx::query_as::<_, DbBooking>(
                r#"
                SELECT id, student_id, slot_id, date, time, status, price, created_at
                FROM bookings
                WHERE date = $1
                "#,
            )
            .bind(date)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbBooking>(
                r#"
                SELECT id, student_id, slot_id, date, time, status, price, created_at
                FROM bookings
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(bookings)
}

pub async fn count_bookings_on(pool: &Pool<Postgres>, date: NaiveDate) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM bookings WHERE date = $1
        "#,
    )
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn total_revenue(pool: &Pool<Postgres>) -> Result<i64> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COALESCE(SUM(price), 0) FROM bookings
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(total)
}
