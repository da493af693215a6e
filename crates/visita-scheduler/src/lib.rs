//! Visit scheduling service: validates a recurrence request, expands it
//! into concrete dates, and persists the resulting visit record through an
//! abstract record store.

pub mod error;
pub mod model;
pub mod schedule;
pub mod store;

pub use error::ServiceError;
pub use model::Visit;
pub use schedule::{cancel_visit, reschedule_visit, schedule_visits};
pub use store::{MemoryStore, RecordStore, StoreError};
