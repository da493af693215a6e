//! Scheduling operations: validate, expand, persist.

use uuid::Uuid;

use visita_recur::{ExpansionOptions, RecurrenceRequest, expand_visits, validate_request};

use crate::error::ServiceError;
use crate::model::Visit;
use crate::store::RecordStore;

/// ## Summary
/// Schedules a recurring visit: validates the request, expands it into
/// concrete dates, and persists the resulting record.
///
/// An expansion that yields no dates rejects the submission with
/// [`ServiceError::NothingSchedulable`]; nothing is persisted in that case.
///
/// ## Errors
/// Returns a validation, empty-schedule, or store error.
pub fn schedule_visits<S: RecordStore>(
    store: &mut S,
    patient_id: Uuid,
    visitor_id: Uuid,
    request: RecurrenceRequest,
    options: ExpansionOptions,
) -> Result<Visit, ServiceError> {
    validate_request(&request)?;

    let dates = expand_visits(&request, options);
    if dates.is_empty() {
        tracing::debug!(
            frequency = %request.frequency,
            start_date = %request.start_date,
            "recurrence expanded to nothing, rejecting"
        );
        return Err(ServiceError::NothingSchedulable);
    }

    let visit = Visit::new(patient_id, visitor_id, request, dates);
    store.add(visit.clone())?;
    tracing::debug!(
        visit_id = %visit.id,
        dates = visit.generated_dates.len(),
        "visit schedule persisted"
    );
    Ok(visit)
}

/// ## Summary
/// Replaces an existing visit's recurrence, regenerating its dates.
///
/// ## Errors
/// Returns a validation or empty-schedule error, or [`StoreError::NotFound`]
/// if the visit does not exist.
///
/// [`StoreError::NotFound`]: crate::store::StoreError::NotFound
pub fn reschedule_visit<S: RecordStore>(
    store: &mut S,
    id: Uuid,
    request: RecurrenceRequest,
    options: ExpansionOptions,
) -> Result<Visit, ServiceError> {
    validate_request(&request)?;

    let existing = store
        .get(id)
        .ok_or(ServiceError::Store(crate::store::StoreError::NotFound(id)))?;

    let dates = expand_visits(&request, options);
    if dates.is_empty() {
        return Err(ServiceError::NothingSchedulable);
    }

    let visit = Visit {
        id,
        patient_id: existing.patient_id,
        visitor_id: existing.visitor_id,
        recurrence: request,
        generated_dates: dates,
    };
    store.update(visit.clone())?;
    Ok(visit)
}

/// ## Summary
/// Removes a visit schedule.
///
/// ## Errors
/// Returns [`StoreError::NotFound`] if the visit does not exist.
///
/// [`StoreError::NotFound`]: crate::store::StoreError::NotFound
pub fn cancel_visit<S: RecordStore>(store: &mut S, id: Uuid) -> Result<(), ServiceError> {
    store.delete(id)?;
    tracing::debug!(visit_id = %id, "visit schedule cancelled");
    Ok(())
}
