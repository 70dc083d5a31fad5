//! # Shala Core
//!
//! Domain types shared across the booking service: the studio's data model
//! (slots, bookings, students, announcements), request/response payloads for
//! the API, the domain error type, and the pure scheduling helpers used for
//! display-time parsing and bulk slot generation.

/// Domain error type and result alias
pub mod errors;
/// Data model and API payload types
pub mod models;
/// Pure helpers for class-time parsing, ordering and generation
pub mod schedule;
