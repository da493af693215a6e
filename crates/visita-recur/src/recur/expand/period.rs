//! Recurrence period arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::recur::core::{Frequency, Weekday};

/// The k-th recurrence period: an inclusive range of calendar days.
///
/// Daily periods are single days, weekly periods are Sunday-aligned weeks,
/// monthly periods are calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Period {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl Period {
    /// Computes the k-th period on or around `start_date`.
    ///
    /// Period 0 is the day/week/month containing `start_date`. Returns
    /// `None` if the date arithmetic leaves chrono's representable range.
    pub(crate) fn nth(frequency: Frequency, start_date: NaiveDate, k: usize) -> Option<Self> {
        let days_forward = u64::try_from(k).ok()?;
        match frequency {
            Frequency::Daily => {
                let day = start_date.checked_add_days(Days::new(days_forward))?;
                Some(Self {
                    first_day: day,
                    last_day: day,
                })
            }
            Frequency::Weekly => {
                let to_sunday = u64::from(Weekday::of(start_date).index());
                let sunday = start_date
                    .checked_sub_days(Days::new(to_sunday))?
                    .checked_add_days(Days::new(days_forward * 7))?;
                Some(Self {
                    first_day: sunday,
                    last_day: sunday.checked_add_days(Days::new(6))?,
                })
            }
            Frequency::Monthly => {
                let months_forward = u32::try_from(k).ok()?;
                let first = start_date
                    .with_day(1)?
                    .checked_add_months(Months::new(months_forward))?;
                let last = first
                    .checked_add_months(Months::new(1))?
                    .checked_sub_days(Days::new(1))?;
                Some(Self {
                    first_day: first,
                    last_day: last,
                })
            }
        }
    }

    /// Date of the given weekday within this (weekly) period.
    pub(crate) fn day_at(&self, weekday: Weekday) -> Option<NaiveDate> {
        self.first_day
            .checked_add_days(Days::new(u64::from(weekday.index())))
    }

    /// Date of the given day-of-month within this (monthly) period, clamped
    /// to the month's last day. Day 0 yields `None`.
    pub(crate) fn clamped_day(&self, day: u8) -> Option<NaiveDate> {
        let day = u32::from(day);
        if day >= self.last_day.day() {
            Some(self.last_day)
        } else {
            self.first_day.with_day(day)
        }
    }
}
