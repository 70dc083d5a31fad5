//! Pure helpers around the studio's display-time slot format.
//!
//! Slots carry their class time as a 12-hour display string (`"6:00 AM"`),
//! so ordering and validation happen in code rather than in SQL.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Default studio timetable used by bulk generation.
pub const MORNING_TIMES: [&str; 7] = [
    "6:00 AM", "7:00 AM", "8:00 AM", "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
];
pub const EVENING_TIMES: [&str; 4] = ["4:00 PM", "5:00 PM", "6:00 PM", "7:00 PM"];

/// How far ahead the weekly quick-generate reaches.
pub const GENERATION_WINDOW_DAYS: usize = 7;

/// Parses a display time like `"6:00 AM"` into a time of day.
pub fn time_of_day(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%I:%M %p").ok()
}

/// Ordering key for a slot. Unparseable times sort to the start of the day.
pub fn slot_sort_key(date: NaiveDate, time: &str) -> (NaiveDate, NaiveTime) {
    (date, time_of_day(time).unwrap_or(NaiveTime::MIN))
}

/// The `count` calendar days starting at `from`, inclusive.
pub fn upcoming_days(from: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|offset| from + Duration::days(offset as i64))
        .collect()
}
