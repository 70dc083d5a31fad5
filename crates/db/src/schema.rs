use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id VARCHAR(255) PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(32) NULL,
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            time VARCHAR(16) NOT NULL,
            is_booked BOOLEAN NOT NULL DEFAULT FALSE,
            occupant_id VARCHAR(255) NULL,
            CONSTRAINT occupant_matches_booked CHECK (is_booked = (occupant_id IS NOT NULL))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id VARCHAR(255) NOT NULL,
            slot_id UUID NOT NULL REFERENCES slots(id),
            date DATE NOT NULL,
            time VARCHAR(16) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'upcoming',
            price INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create announcements table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS announcements (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            message TEXT NOT NULL,
            sent_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            author VARCHAR(255) NOT NULL DEFAULT 'Admin'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes (one statement per call; prepared statements reject batches)
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_slots_date ON slots(date)",
        "CREATE INDEX IF NOT EXISTS idx_slots_date_available ON slots(date, is_booked)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_student_id ON bookings(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_slot_id ON bookings(slot_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings(date)",
        "CREATE INDEX IF NOT EXISTS idx_announcements_sent_at ON announcements(sent_at)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
