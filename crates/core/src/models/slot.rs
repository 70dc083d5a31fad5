use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable class time unit. `is_booked` is true exactly when
/// `occupant_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub is_booked: bool,
    pub occupant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlotsRequest {
    pub dates: Vec<NaiveDate>,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlotsResponse {
    pub created: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub is_booked: bool,
    pub occupant_id: Option<String>,
}
