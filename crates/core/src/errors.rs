use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShalaError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Slot already booked: {0}")]
    AlreadyBooked(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ShalaResult<T> = Result<T, ShalaError>;
