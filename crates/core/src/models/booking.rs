use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Drop-in class price in rupees. Stored on every booking; never charged.
pub const DROP_IN_PRICE: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A student's reservation of a specific slot. Written exactly once by the
/// reservation coordinator; `status` never leaves `upcoming` here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: String,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub student_id: String,
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub student_id: String,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsQuery {
    pub date: Option<NaiveDate>,
}
