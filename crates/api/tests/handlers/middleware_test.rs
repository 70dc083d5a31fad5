use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use shala_api::middleware::error_handling::AppError;
use shala_core::errors::ShalaError;

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError(ShalaError::NotFound("Slot not found".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_already_booked_maps_to_409() {
    let response = AppError(ShalaError::AlreadyBooked("Slot is taken".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_validation_maps_to_400() {
    let response = AppError(ShalaError::Validation("Time is required".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_database_maps_to_500() {
    let response = AppError(ShalaError::Database(eyre::eyre!("connection refused"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    let err: AppError = eyre::eyre!("connection refused").into();
    assert!(matches!(err.0, ShalaError::Database(_)));
}
