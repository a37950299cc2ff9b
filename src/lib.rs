//! library_circulation Library
//!
//! In-memory circulation core for a small lending library: copy inventory,
//! loans gated on reader activity, and dynamic late fees.

pub mod config;
pub mod domain;
pub mod manager;
pub mod services;
pub mod shared;

mod error;

pub use config::{Config, ConfigError};
pub use domain::{BookRecord, CirculationEvent, FeePolicy, JournalEntry, Notice};
pub use error::{LibraryError, LibraryResult};
pub use manager::LibraryManager;
pub use services::{
    InMemoryUserDirectory, NotificationService, TracingNotificationService, UserService,
};
pub use shared::SharedLibrary;
