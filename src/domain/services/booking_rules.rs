use chrono::NaiveDate;

use crate::domain::models::booking::Booking;
use crate::error::FieldErrors;

pub const START_IN_PAST: &str = "startDate cannot be in the past";
pub const END_NOT_AFTER_START: &str = "endDate cannot be on or before startDate";
pub const START_CONFLICT: &str = "Start date conflicts with an existing booking";
pub const END_CONFLICT: &str = "End date conflicts with an existing booking";

/// Error pair reported when a range is missing or unreadable, before any
/// date comparison runs.
pub fn malformed_range_errors() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert("startDate".to_string(), START_IN_PAST.to_string());
    errors.insert("endDate".to_string(), END_NOT_AFTER_START.to_string());
    errors
}

/// Checks that a candidate range is well-formed and not behind `today`.
/// The branches are mutually exclusive; the first match decides which
/// fields carry an error.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if start < today && end <= start {
        errors.insert("startDate".to_string(), START_IN_PAST.to_string());
        errors.insert("endDate".to_string(), END_NOT_AFTER_START.to_string());
    } else if start < today {
        errors.insert("startDate".to_string(), START_IN_PAST.to_string());
    } else if end <= start {
        errors.insert("endDate".to_string(), END_NOT_AFTER_START.to_string());
    }
    errors
}

/// Closed intervals [s1, e1] and [s2, e2] share at least one day.
pub fn overlaps(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && e1 >= s2
}

#[derive(Debug, Clone)]
pub struct BookingConflict {
    pub booking: Booking,
    pub errors: FieldErrors,
}

/// Returns the first booking in `existing` overlapping [start, end], with
/// field errors composed for it. The checks are deliberately NOT mutually
/// exclusive: each may overwrite what an earlier one wrote for the same
/// field, and the containment check replaces the whole map. Keep the order.
pub fn find_conflict(start: NaiveDate, end: NaiveDate, existing: &[Booking]) -> Option<BookingConflict> {
    let hit = existing
        .iter()
        .find(|b| overlaps(start, end, b.start_date, b.end_date))?;

    let mut errors = FieldErrors::new();

    if end == hit.start_date {
        errors.insert("endDate".to_string(), END_CONFLICT.to_string());
    }
    if start >= hit.start_date {
        errors.insert("startDate".to_string(), START_CONFLICT.to_string());
    }
    if end <= hit.end_date {
        errors.insert("endDate".to_string(), END_CONFLICT.to_string());
    }
    if start < hit.start_date && end > hit.end_date {
        errors.clear();
        errors.insert("startDate".to_string(), START_CONFLICT.to_string());
        errors.insert("endDate".to_string(), END_CONFLICT.to_string());
    }

    if errors.is_empty() {
        return None;
    }

    Some(BookingConflict {
        booking: hit.clone(),
        errors,
    })
}
