//! The recurrence request: one generation call's complete input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::slot::TimeSlot;

/// Input to one expansion call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    /// Period length: one day, week, or month.
    pub frequency: Frequency,

    /// Declared number of visits per period. Informational; validation
    /// checks it against the slot count, expansion never consults it.
    pub visits_per_period: u32,

    /// First period begins on this date (no time component).
    pub start_date: NaiveDate,

    /// One entry per visit-within-period. Order carries no meaning but is
    /// preserved.
    pub time_slots: Vec<TimeSlot>,

    /// Inclusive end bound (mutually exclusive with `occurrences`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Number of periods to generate (mutually exclusive with `end_date`).
    /// Counts periods, not individual visits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
}

impl RecurrenceRequest {
    /// Creates an open-ended request. `visits_per_period` is derived from
    /// the slot count.
    #[must_use]
    pub fn new(frequency: Frequency, start_date: NaiveDate, time_slots: Vec<TimeSlot>) -> Self {
        let visits_per_period = u32::try_from(time_slots.len()).unwrap_or(u32::MAX);
        Self {
            frequency,
            visits_per_period,
            start_date,
            time_slots,
            end_date: None,
            occurrences: None,
        }
    }

    /// Sets the inclusive end date.
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self.occurrences = None; // Mutually exclusive
        self
    }

    /// Sets the period count.
    #[must_use]
    pub fn with_occurrences(mut self, occurrences: u32) -> Self {
        self.occurrences = Some(occurrences);
        self.end_date = None; // Mutually exclusive
        self
    }

    /// Returns the termination mode. When a hand-built request carries both
    /// bounds, the end date wins.
    #[must_use]
    pub fn termination(&self) -> Termination {
        if let Some(end_date) = self.end_date {
            Termination::EndDate(end_date)
        } else if let Some(periods) = self.occurrences {
            Termination::Periods(periods)
        } else {
            Termination::OpenEnded
        }
    }
}

/// How a recurrence ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Inclusive calendar-date bound.
    EndDate(NaiveDate),
    /// Fixed number of periods (days/weeks/months, not visits).
    Periods(u32),
    /// No bound given; expansion stops at the period cap.
    OpenEnded,
}
