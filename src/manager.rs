//! Library Manager
//!
//! Owns book inventory and the record of who holds which copy. Borrowing is
//! gated on the reader being active; every successful borrow or return
//! notifies the reader and lands in the circulation journal.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{BookRecord, CirculationEvent, FeePolicy, Journal, JournalEntry, Notice};
use crate::error::LibraryResult;
use crate::services::{NotificationService, UserService};

/// In-memory circulation desk
pub struct LibraryManager {
    users: Arc<dyn UserService>,
    notifications: Arc<dyn NotificationService>,
    fee_policy: FeePolicy,

    /// book id -> copy counters
    books: HashMap<String, BookRecord>,

    /// book id -> user id -> copies currently held
    loans: HashMap<String, HashMap<String, u32>>,

    journal: Journal,
}

impl LibraryManager {
    pub fn new(
        users: Arc<dyn UserService>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            users,
            notifications,
            fee_policy: FeePolicy::default(),
            books: HashMap::new(),
            loans: HashMap::new(),
            journal: Journal::new(),
        }
    }

    /// Replace the default late fee policy
    pub fn with_fee_policy(mut self, fee_policy: FeePolicy) -> Self {
        self.fee_policy = fee_policy;
        self
    }

    pub fn fee_policy(&self) -> &FeePolicy {
        &self.fee_policy
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Register `copies` copies of a book, all available.
    ///
    /// Adding an id that already exists overwrites its counters. Outstanding
    /// loans are kept.
    pub fn add_book(&mut self, book_id: &str, copies: u32) {
        let previous = self.books.insert(book_id.to_string(), BookRecord::new(copies));

        if let Some(previous) = previous {
            tracing::warn!(
                book_id = %book_id,
                previous_total = previous.total(),
                copies = copies,
                "Book record overwritten"
            );
        } else {
            tracing::info!(book_id = %book_id, copies = copies, "Book added");
        }

        self.journal.record(CirculationEvent::BookAdded {
            book_id: book_id.to_string(),
            copies,
        });
    }

    /// Copies currently on the shelf; 0 for unknown books
    pub fn get_available_copies(&self, book_id: &str) -> u32 {
        self.books.get(book_id).map_or(0, BookRecord::available)
    }

    /// Copies acquired; 0 for unknown books
    pub fn total_copies(&self, book_id: &str) -> u32 {
        self.books.get(book_id).map_or(0, BookRecord::total)
    }

    // =========================================================================
    // Loans
    // =========================================================================

    /// Lend one copy of a book to a reader.
    ///
    /// Returns false if the reader is inactive (they are told so) or no copy
    /// is available (nobody is told anything).
    pub fn borrow_book(&mut self, book_id: &str, user_id: &str) -> bool {
        if !self.users.is_user_active(user_id) {
            tracing::debug!(book_id = %book_id, user_id = %user_id, "Borrow refused: inactive account");
            self.notify(user_id, Notice::AccountInactive);
            return false;
        }

        let Some(book) = self.books.get_mut(book_id) else {
            tracing::debug!(book_id = %book_id, user_id = %user_id, "Borrow refused: unknown book");
            return false;
        };

        if !book.check_out() {
            tracing::debug!(book_id = %book_id, user_id = %user_id, "Borrow refused: no copies available");
            return false;
        }
        let available = book.available();

        *self
            .loans
            .entry(book_id.to_string())
            .or_default()
            .entry(user_id.to_string())
            .or_insert(0) += 1;

        tracing::info!(book_id = %book_id, user_id = %user_id, available = available, "Book borrowed");

        self.journal.record(CirculationEvent::BookBorrowed {
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
        });
        self.notify(user_id, Notice::borrowed(book_id));
        true
    }

    /// Take back one copy from the reader who borrowed it.
    ///
    /// Returns false, changing nothing, if this reader holds no copy of the book.
    pub fn return_book(&mut self, book_id: &str, user_id: &str) -> bool {
        if !self.release_loan(book_id, user_id) {
            tracing::debug!(book_id = %book_id, user_id = %user_id, "Return refused: no such loan");
            return false;
        }

        match self.books.get_mut(book_id) {
            Some(book) => {
                if !book.check_in() {
                    tracing::warn!(
                        book_id = %book_id,
                        user_id = %user_id,
                        total = book.total(),
                        "Returned copy exceeds total copies; counter left at total"
                    );
                }
                tracing::info!(
                    book_id = %book_id,
                    user_id = %user_id,
                    available = book.available(),
                    "Book returned"
                );
            }
            None => {
                tracing::warn!(book_id = %book_id, user_id = %user_id, "Returned loan has no book record");
            }
        }

        self.journal.record(CirculationEvent::BookReturned {
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
        });
        self.notify(user_id, Notice::returned(book_id));
        true
    }

    /// Whether the reader currently holds at least one copy of the book
    pub fn is_borrowed_by(&self, book_id: &str, user_id: &str) -> bool {
        self.loans
            .get(book_id)
            .and_then(|holders| holders.get(user_id))
            .is_some_and(|count| *count > 0)
    }

    /// Book ids the reader currently holds, sorted
    pub fn loans_of(&self, user_id: &str) -> Vec<String> {
        let mut book_ids: Vec<String> = self
            .loans
            .iter()
            .filter(|(_, holders)| holders.contains_key(user_id))
            .map(|(book_id, _)| book_id.clone())
            .collect();
        book_ids.sort();
        book_ids
    }

    // =========================================================================
    // Fees
    // =========================================================================

    /// Late fee for a loan overdue by `overdue_days`.
    ///
    /// # Errors
    /// - `LibraryError::InvalidArgument` if `overdue_days` is negative
    pub fn calculate_dynamic_late_fee(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> LibraryResult<Decimal> {
        self.fee_policy
            .calculate(overdue_days, is_bestseller, is_premium_member)
    }

    // =========================================================================
    // Journal
    // =========================================================================

    pub fn journal(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    /// Drop one loan of `book_id` held by `user_id`. False if there was none.
    fn release_loan(&mut self, book_id: &str, user_id: &str) -> bool {
        let Some(holders) = self.loans.get_mut(book_id) else {
            return false;
        };
        let Some(count) = holders.get_mut(user_id) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            holders.remove(user_id);
            if holders.is_empty() {
                self.loans.remove(book_id);
            }
        }
        true
    }

    fn notify(&self, user_id: &str, notice: Notice) {
        self.notifications.notify_user(user_id, &notice.to_string());
    }
}

impl fmt::Debug for LibraryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryManager")
            .field("fee_policy", &self.fee_policy)
            .field("books", &self.books)
            .field("loans", &self.loans)
            .field("journal_len", &self.journal.len())
            .finish()
    }
}
