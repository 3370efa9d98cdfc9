//! Persistence of monthly work records.
//!
//! The [`WorkRecordRepository`] trait is the storage port. The server wires
//! in [`InMemoryWorkRecordRepository`]; other backends implement the same
//! trait. [`save_monthly_record`] is the save path used by the API: aggregate
//! the month, then upsert under the (job, year, month) key.

mod in_memory;
mod repository;

pub use in_memory::InMemoryWorkRecordRepository;
pub use repository::{WorkRecordRepository, save_manual_record, save_monthly_record};
