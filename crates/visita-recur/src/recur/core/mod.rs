//! Core recurrence models.
//!
//! These types are designed for:
//! - Round-trip fidelity with the caller-facing JSON shape (camelCase keys)
//! - Type safety: a slot is bound to its frequency's day selector before
//!   expansion, so a mismatched slot can never produce a date
//! - Determinism: no type here reads the clock

mod frequency;
mod request;
mod slot;

pub use frequency::{Frequency, Weekday};
pub use request::{RecurrenceRequest, Termination};
pub use slot::{ResolvedSlot, SlotTime, TimeSlot};
