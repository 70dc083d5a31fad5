use chrono::NaiveDate;
use eyre::Result;
use shala_core::errors::{ShalaError, ShalaResult};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::db_err;
use crate::models::DbSlot;

pub async fn create_slot(pool: &Pool<Postgres>, date: NaiveDate, time: &str) -> Result<DbSlot> {
    let id = Uuid::new_v4();

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, date, time, is_booked, occupant_id)
        VALUES ($1, $2, $3, FALSE, NULL)
        RETURNING id, date, time, is_booked, occupant_id
        "#,
    )
    .bind(id)
    .bind(date)
    .bind(time)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

/// Inserts one unbooked slot per (date, time) pair, all in one transaction.
pub async fn generate_slots(
    pool: &Pool<Postgres>,
    dates: &[NaiveDate],
    times: &[String],
) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut created = 0u64;

    for date in dates {
        for time in times {
            sqlx::query(
                r#"
                INSERT INTO slots (id, date, time, is_booked, occupant_id)
                VALUES ($1, $2, $3, FALSE, NULL)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(date)
            .bind(time)
            .execute(&mut *tx)
            .await?;
            created += 1;
        }
    }

    tx.commit().await?;

    tracing::debug!("Generated {} slots", created);
    Ok(created)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, is_booked, occupant_id
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Every slot in the store. Final (date, time-of-day) ordering happens in
/// the caller because `time` is a display string.
pub async fn list_slots(pool: &Pool<Postgres>) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, is_booked, occupant_id
        FROM slots
        ORDER BY date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Open slots for one calendar day. The read runs outside any lock, so a
/// returned slot may already be taken by the time it is reserved.
pub async fn list_available_slots(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, is_booked, occupant_id
        FROM slots
        WHERE date = $1 AND is_booked = FALSE
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Deletes an unbooked slot. Refuses booked slots under the same row lock
/// the reservation coordinator takes, so a concurrent reservation cannot
/// slip in between the check and the delete.
pub async fn delete_slot(pool: &Pool<Postgres>, id: Uuid) -> ShalaResult<()> {
    let mut tx = pool.begin().await.map_err(db_err)?;

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, is_booked, occupant_id
        FROM slots
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(db_err)?
    .ok_or_else(|| ShalaError::NotFound(format!("Slot with ID {} not found", id)))?;

    if slot.is_booked {
        return Err(ShalaError::Validation(format!(
            "Slot {} is booked and cannot be deleted",
            id
        )));
    }

    sqlx::query("DELETE FROM slots WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

    tx.commit().await.map_err(db_err)?;

    Ok(())
}
