//! Caller-side validation of recurrence requests.
//!
//! Expansion assumes its input is well-formed and never re-checks it; this
//! module is the gate requests pass before they reach the generator.

use chrono::NaiveDate;
use thiserror::Error;

use crate::recur::core::RecurrenceRequest;

/// Rejection reasons for a recurrence request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    #[error("at least one time slot is required")]
    NoTimeSlots,

    #[error("visits per period is {declared} but {actual} time slots were provided")]
    SlotCountMismatch { declared: u32, actual: usize },

    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error("end date and occurrence count are mutually exclusive")]
    ConflictingTermination,

    #[error("occurrence count must be positive")]
    ZeroOccurrences,

    #[error("day of month {0} is outside 1..=31")]
    DayOfMonthOutOfRange(u8),
}

/// ## Summary
/// Validates a recurrence request before expansion.
///
/// Checks the declared visits-per-period against the slot count, the
/// start/end ordering, the termination mode exclusivity, and slot field
/// ranges. Time-of-day and weekday validity are already guaranteed by the
/// types.
///
/// ## Errors
/// Returns the first violated rule.
pub fn validate_request(request: &RecurrenceRequest) -> Result<(), RequestValidationError> {
    if request.time_slots.is_empty() {
        return Err(RequestValidationError::NoTimeSlots);
    }

    let actual = request.time_slots.len();
    let declared_matches =
        usize::try_from(request.visits_per_period).is_ok_and(|declared| declared == actual);
    if !declared_matches {
        return Err(RequestValidationError::SlotCountMismatch {
            declared: request.visits_per_period,
            actual,
        });
    }

    if request.end_date.is_some() && request.occurrences.is_some() {
        return Err(RequestValidationError::ConflictingTermination);
    }

    if let Some(end) = request.end_date
        && request.start_date > end
    {
        return Err(RequestValidationError::StartAfterEnd {
            start: request.start_date,
            end,
        });
    }

    if request.occurrences == Some(0) {
        return Err(RequestValidationError::ZeroOccurrences);
    }

    for slot in &request.time_slots {
        if let Some(day) = slot.day_of_month
            && !(1..=31).contains(&day)
        {
            return Err(RequestValidationError::DayOfMonthOutOfRange(day));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::recur::core::{Frequency, SlotTime, TimeSlot, Weekday};

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn weekly_request() -> RecurrenceRequest {
        RecurrenceRequest::new(
            Frequency::Weekly,
            date(2024, 1, 1),
            vec![TimeSlot::weekly(
                Weekday::Monday,
                SlotTime::new(9, 0).unwrap(),
            )],
        )
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert_eq!(validate_request(&weekly_request().with_occurrences(4)), Ok(()));
    }

    #[test]
    fn rejects_empty_slots() {
        let mut request = weekly_request();
        request.time_slots.clear();
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::NoTimeSlots)
        );
    }

    #[test]
    fn rejects_slot_count_mismatch() {
        let mut request = weekly_request();
        request.visits_per_period = 3;
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::SlotCountMismatch {
                declared: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_start_after_end() {
        let request = weekly_request().with_end_date(date(2023, 12, 31));
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::StartAfterEnd {
                start: date(2024, 1, 1),
                end: date(2023, 12, 31),
            })
        );
    }

    #[test]
    fn rejects_conflicting_termination() {
        let mut request = weekly_request();
        request.end_date = Some(date(2024, 6, 1));
        request.occurrences = Some(4);
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::ConflictingTermination)
        );
    }

    #[test]
    fn rejects_zero_occurrences() {
        let request = weekly_request().with_occurrences(0);
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::ZeroOccurrences)
        );
    }

    #[test]
    fn rejects_day_of_month_out_of_range() {
        let mut request = weekly_request();
        request.frequency = Frequency::Monthly;
        request.time_slots = vec![TimeSlot::monthly(32, SlotTime::new(9, 0).unwrap())];
        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::DayOfMonthOutOfRange(32))
        );
    }
}
