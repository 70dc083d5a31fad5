use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub is_booked: bool,
    pub occupant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub student_id: String,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAnnouncement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub author: String,
}
