//! Visit record model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use visita_recur::RecurrenceRequest;

/// A persisted visit schedule: the recurrence as requested plus every
/// concrete date it expanded to. Timestamps serialize as ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub visitor_id: Uuid,
    pub recurrence: RecurrenceRequest,
    pub generated_dates: Vec<NaiveDateTime>,
}

impl Visit {
    /// Creates a visit record with a fresh id.
    #[must_use]
    pub fn new(
        patient_id: Uuid,
        visitor_id: Uuid,
        recurrence: RecurrenceRequest,
        generated_dates: Vec<NaiveDateTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            visitor_id,
            recurrence,
            generated_dates,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use visita_recur::{Frequency, SlotTime, TimeSlot};

    use super::*;

    #[test]
    fn visit_serializes_dates_as_iso_8601() {
        let recurrence = RecurrenceRequest::new(
            Frequency::Daily,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![TimeSlot::daily(SlotTime::new(9, 0).unwrap())],
        )
        .with_occurrences(1);
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        ];
        let visit = Visit::new(Uuid::new_v4(), Uuid::new_v4(), recurrence, dates);

        let json = serde_json::to_value(&visit).unwrap();
        assert_eq!(json["generatedDates"][0], "2024-01-01T09:00:00");

        let back: Visit = serde_json::from_value(json).unwrap();
        assert_eq!(back, visit);
    }
}
