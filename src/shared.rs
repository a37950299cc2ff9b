//! Shared Library
//!
//! Thread-safe handle around a `LibraryManager`. Each operation runs under a
//! single lock acquisition, so the availability check and the counter update
//! of a borrow or return can never interleave with another caller's.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::domain::{FeePolicy, JournalEntry};
use crate::error::LibraryResult;
use crate::manager::LibraryManager;

#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<LibraryManager>>,
}

impl SharedLibrary {
    pub fn new(manager: LibraryManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // Every manager operation leaves the state consistent before it can
    // panic, so a poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, LibraryManager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_book(&self, book_id: &str, copies: u32) {
        self.lock().add_book(book_id, copies);
    }

    pub fn get_available_copies(&self, book_id: &str) -> u32 {
        self.lock().get_available_copies(book_id)
    }

    pub fn total_copies(&self, book_id: &str) -> u32 {
        self.lock().total_copies(book_id)
    }

    pub fn borrow_book(&self, book_id: &str, user_id: &str) -> bool {
        self.lock().borrow_book(book_id, user_id)
    }

    pub fn return_book(&self, book_id: &str, user_id: &str) -> bool {
        self.lock().return_book(book_id, user_id)
    }

    pub fn is_borrowed_by(&self, book_id: &str, user_id: &str) -> bool {
        self.lock().is_borrowed_by(book_id, user_id)
    }

    pub fn loans_of(&self, user_id: &str) -> Vec<String> {
        self.lock().loans_of(user_id)
    }

    pub fn fee_policy(&self) -> FeePolicy {
        *self.lock().fee_policy()
    }

    pub fn calculate_dynamic_late_fee(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> LibraryResult<Decimal> {
        self.lock()
            .calculate_dynamic_late_fee(overdue_days, is_bestseller, is_premium_member)
    }

    /// Snapshot of the journal at the time of the call
    pub fn journal(&self) -> Vec<JournalEntry> {
        self.lock().journal().to_vec()
    }
}
