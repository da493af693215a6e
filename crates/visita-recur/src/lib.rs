//! Recurring-visit date generation.
//!
//! Turns a recurrence request (frequency, time slots, start condition,
//! termination condition) into the complete ordered list of concrete visit
//! timestamps. The expansion is a pure function: no I/O, no clock reads,
//! no shared state.

pub mod recur;

pub use recur::core::{
    Frequency, RecurrenceRequest, ResolvedSlot, SlotTime, Termination, TimeSlot, Weekday,
};
pub use recur::expand::{ExpansionOptions, expand_visits};
pub use recur::validation::{RequestValidationError, validate_request};
