use serde::{Deserialize, Serialize};

/// Admin dashboard summary. Revenue is the sum of stored booking prices
/// across all time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_students: i64,
    pub today_bookings: i64,
    pub total_revenue: i64,
}
