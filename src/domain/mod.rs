//! Domain module
//!
//! Core domain types and business rules.

pub mod book;
pub mod events;
pub mod fee;
pub mod notice;

pub use book::BookRecord;
pub use events::{CirculationEvent, Journal, JournalEntry};
pub use fee::{FeePolicy, NEGATIVE_OVERDUE_DAYS};
pub use notice::Notice;
