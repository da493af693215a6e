//! Time-slot value types.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::frequency::{Frequency, Weekday};

/// Wall-clock time of day for a visit, minute precision.
///
/// Renders and parses as `HH:MM` (24-hour), the shape visit records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    /// Creates a slot time from hour and minute.
    ///
    /// Returns `None` if the hour or minute is out of range.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0).map(Self)
    }

    /// Parses an `HH:MM` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.split_once(':')?;
        if hour.len() != 2 || minute.len() != 2 {
            return None;
        }
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    /// Combines this time with a calendar date into a concrete instant.
    #[must_use]
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.0)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for SlotTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid HH:MM time: {s:?}"))
    }
}

impl Serialize for SlotTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One visit template within a recurrence period, as callers supply it.
///
/// The day selectors are optional here because the caller-facing shape is
/// loose; [`TimeSlot::resolve`] binds a slot to a frequency and drops slots
/// missing the selector that frequency requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Wall-clock time of the visit.
    pub time: SlotTime,

    /// Day of week, consulted only for weekly recurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Weekday>,

    /// Day of month (1-31), consulted only for monthly recurrences.
    /// Days past a month's end clamp to that month's last day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
}

impl TimeSlot {
    /// Creates a slot for a daily recurrence.
    #[must_use]
    pub const fn daily(time: SlotTime) -> Self {
        Self {
            time,
            day_of_week: None,
            day_of_month: None,
        }
    }

    /// Creates a slot for a weekly recurrence.
    #[must_use]
    pub const fn weekly(day_of_week: Weekday, time: SlotTime) -> Self {
        Self {
            time,
            day_of_week: Some(day_of_week),
            day_of_month: None,
        }
    }

    /// Creates a slot for a monthly recurrence.
    #[must_use]
    pub const fn monthly(day_of_month: u8, time: SlotTime) -> Self {
        Self {
            time,
            day_of_week: None,
            day_of_month: Some(day_of_month),
        }
    }

    /// Binds this slot to a frequency.
    ///
    /// Returns `None` when the slot lacks the day selector the frequency
    /// requires; such a slot produces no visits.
    #[must_use]
    pub const fn resolve(self, frequency: Frequency) -> Option<ResolvedSlot> {
        Some(match frequency {
            Frequency::Daily => ResolvedSlot::Daily { time: self.time },
            Frequency::Weekly => match self.day_of_week {
                Some(weekday) => ResolvedSlot::Weekly {
                    weekday,
                    time: self.time,
                },
                None => return None,
            },
            Frequency::Monthly => match self.day_of_month {
                Some(day) => ResolvedSlot::Monthly {
                    day,
                    time: self.time,
                },
                None => return None,
            },
        })
    }
}

/// A slot whose day selector is bound to its frequency.
///
/// Expansion only ever sees resolved slots, so a weekly slot without a
/// weekday is impossible past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSlot {
    Daily { time: SlotTime },
    Weekly { weekday: Weekday, time: SlotTime },
    Monthly { day: u8, time: SlotTime },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_time_parse() {
        assert_eq!(SlotTime::parse("09:30"), SlotTime::new(9, 30));
        assert_eq!(SlotTime::parse("00:00"), SlotTime::new(0, 0));
        assert_eq!(SlotTime::parse("23:59"), SlotTime::new(23, 59));
        assert_eq!(SlotTime::parse("24:00"), None);
        assert_eq!(SlotTime::parse("9:30"), None);
        assert_eq!(SlotTime::parse("09:60"), None);
        assert_eq!(SlotTime::parse("0930"), None);
    }

    #[test]
    fn slot_time_display() {
        assert_eq!(SlotTime::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn resolve_binds_selector_to_frequency() {
        let time = SlotTime::new(9, 0).unwrap();
        let weekly = TimeSlot::weekly(Weekday::Monday, time);

        assert!(matches!(
            weekly.resolve(Frequency::Weekly),
            Some(ResolvedSlot::Weekly {
                weekday: Weekday::Monday,
                ..
            })
        ));
        // A weekly slot still resolves for daily; the selector is ignored.
        assert!(matches!(
            weekly.resolve(Frequency::Daily),
            Some(ResolvedSlot::Daily { .. })
        ));
        // But it cannot resolve for monthly.
        assert_eq!(weekly.resolve(Frequency::Monthly), None);
    }

    #[test]
    fn resolve_drops_bare_slot_for_weekly_and_monthly() {
        let bare = TimeSlot::daily(SlotTime::new(12, 0).unwrap());
        assert_eq!(bare.resolve(Frequency::Weekly), None);
        assert_eq!(bare.resolve(Frequency::Monthly), None);
    }

    #[test]
    fn time_slot_serde_shape() {
        let slot = TimeSlot::weekly(Weekday::Friday, SlotTime::new(14, 30).unwrap());
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"time":"14:30","dayOfWeek":5}"#);

        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
