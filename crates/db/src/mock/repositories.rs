use chrono::NaiveDate;
use mockall::mock;
use shala_core::errors::ShalaResult;
use uuid::Uuid;

use crate::models::{DbAnnouncement, DbBooking, DbSlot, DbStudent};

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            date: NaiveDate,
            time: String,
        ) -> eyre::Result<DbSlot>;

        pub async fn generate_slots(
            &self,
            dates: Vec<NaiveDate>,
            times: Vec<String>,
        ) -> eyre::Result<u64>;

        pub async fn get_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSlot>>;

        pub async fn list_slots(&self) -> eyre::Result<Vec<DbSlot>>;

        pub async fn list_available_slots(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn delete_slot(&self, id: Uuid) -> ShalaResult<()>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn reserve_slot(
            &self,
            student_id: String,
            slot_id: Uuid,
        ) -> ShalaResult<DbBooking>;

        pub async fn get_bookings_by_student_id(
            &self,
            student_id: String,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn list_bookings(
            &self,
            date: Option<NaiveDate>,
        ) -> eyre::Result<Vec<DbBooking>>;
    }
}

mock! {
    pub StudentRepo {
        pub async fn create_student(
            &self,
            id: String,
            name: String,
            email: String,
            phone: Option<String>,
        ) -> ShalaResult<DbStudent>;

        pub async fn get_student_by_id(
            &self,
            id: String,
        ) -> eyre::Result<Option<DbStudent>>;

        pub async fn list_students(&self) -> eyre::Result<Vec<DbStudent>>;

        pub async fn count_students(&self) -> eyre::Result<i64>;
    }
}

mock! {
    pub AnnouncementRepo {
        pub async fn create_announcement(
            &self,
            title: String,
            message: String,
            author: String,
        ) -> eyre::Result<DbAnnouncement>;

        pub async fn list_announcements(&self) -> eyre::Result<Vec<DbAnnouncement>>;
    }
}
