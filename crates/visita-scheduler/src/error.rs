use thiserror::Error;

use visita_recur::RequestValidationError;

use crate::store::StoreError;

/// Scheduling service error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request failed caller-side validation.
    #[error("invalid recurrence request: {0}")]
    InvalidRequest(#[from] RequestValidationError),

    /// The recurrence expanded to zero visits. Surfaced to the user as
    /// "nothing could be scheduled"; the submission is rejected rather than
    /// persisting an empty schedule.
    #[error("the recurrence produces no schedulable visits")]
    NothingSchedulable,

    #[error(transparent)]
    Store(#[from] StoreError),
}
