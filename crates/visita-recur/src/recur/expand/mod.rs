//! Expansion of a recurrence request into concrete visit instants.
//!
//! The pipeline has three pure stages: enumerate periods, map each
//! (period, slot) pair to a candidate instant, then filter by the start/end
//! bounds and sort + dedupe. Nothing here errors; an unproductive request
//! yields an empty list.

mod period;

use chrono::NaiveDateTime;

use visita_core::constants::OPEN_ENDED_PERIOD_CAP;

use crate::recur::core::{RecurrenceRequest, ResolvedSlot, Termination};
use period::Period;

/// Options for recurrence expansion.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionOptions {
    /// Maximum number of periods to enumerate, in any termination mode.
    pub period_cap: usize,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            period_cap: OPEN_ENDED_PERIOD_CAP,
        }
    }
}

impl ExpansionOptions {
    /// Sets the period cap.
    #[must_use]
    pub const fn with_period_cap(mut self, period_cap: usize) -> Self {
        self.period_cap = period_cap;
        self
    }
}

/// ## Summary
/// Expands a recurrence request into the complete, ascending, deduplicated
/// list of visit instants.
///
/// Periods are counted from period 0, the day/week/month containing the
/// start date. Candidates falling before the start date (partial first
/// period) or after the end date are dropped. `occurrences` counts periods,
/// not visits. Slots missing the day selector their frequency requires are
/// skipped. Two slots resolving to the same instant collapse to one.
///
/// Never errors: a request that can produce nothing returns an empty list.
///
/// ## Side Effects
///
/// None beyond tracing output; the expansion itself is a pure function of
/// its arguments.
#[must_use]
pub fn expand_visits(request: &RecurrenceRequest, options: ExpansionOptions) -> Vec<NaiveDateTime> {
    let resolved: Vec<ResolvedSlot> = request
        .time_slots
        .iter()
        .filter_map(|slot| {
            let resolved = slot.resolve(request.frequency);
            if resolved.is_none() {
                tracing::debug!(
                    frequency = %request.frequency,
                    slot = ?slot,
                    "slot lacks the day selector for this frequency, skipping"
                );
            }
            resolved
        })
        .collect();
    if resolved.is_empty() {
        return Vec::new();
    }

    let termination = request.termination();
    let period_limit = match termination {
        Termination::Periods(periods) => options
            .period_cap
            .min(usize::try_from(periods).unwrap_or(usize::MAX)),
        Termination::EndDate(_) | Termination::OpenEnded => options.period_cap,
    };

    let mut candidates: Vec<NaiveDateTime> = Vec::new();
    let mut recurrence_ended = false;
    for k in 0..period_limit {
        let Some(period) = Period::nth(request.frequency, request.start_date, k) else {
            recurrence_ended = true;
            break;
        };
        if let Termination::EndDate(end_date) = termination
            && period.first_day > end_date
        {
            recurrence_ended = true;
            break;
        }
        for slot in &resolved {
            candidates.extend(candidate(*slot, period));
        }
    }

    if truncated_by_cap(request, termination, period_limit, recurrence_ended) {
        tracing::warn!(
            period_cap = options.period_cap,
            frequency = %request.frequency,
            "expansion stopped at the period cap before the recurrence ended"
        );
    }

    let mut visits: Vec<NaiveDateTime> = candidates
        .into_iter()
        .filter(|instant| instant.date() >= request.start_date)
        .filter(|instant| match termination {
            Termination::EndDate(end_date) => instant.date() <= end_date,
            Termination::Periods(_) | Termination::OpenEnded => true,
        })
        .collect();
    visits.sort_unstable();
    visits.dedup();
    visits
}

/// Maps one resolved slot within one period to its candidate instant.
fn candidate(slot: ResolvedSlot, period: Period) -> Option<NaiveDateTime> {
    match slot {
        ResolvedSlot::Daily { time } => Some(time.on(period.first_day)),
        ResolvedSlot::Weekly { weekday, time } => period.day_at(weekday).map(|date| time.on(date)),
        ResolvedSlot::Monthly { day, time } => period.clamped_day(day).map(|date| time.on(date)),
    }
}

/// Whether the period loop was cut short by the cap rather than by the
/// recurrence's own termination.
fn truncated_by_cap(
    request: &RecurrenceRequest,
    termination: Termination,
    period_limit: usize,
    recurrence_ended: bool,
) -> bool {
    if recurrence_ended {
        return false;
    }
    match termination {
        Termination::OpenEnded => true,
        Termination::Periods(periods) => usize::try_from(periods).unwrap_or(usize::MAX) > period_limit,
        Termination::EndDate(end_date) => {
            // The loop exhausted the cap; truncation occurred only if the
            // next period would still have been in range.
            Period::nth(request.frequency, request.start_date, period_limit)
                .is_some_and(|period| period.first_day <= end_date)
        }
    }
}
