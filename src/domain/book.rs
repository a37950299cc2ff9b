//! Book inventory record

use serde::{Deserialize, Serialize};

/// Copy counters for one book.
///
/// # Invariants
/// - `available <= total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    total: u32,
    available: u32,
}

impl BookRecord {
    /// A freshly acquired book: every copy is on the shelf.
    pub fn new(copies: u32) -> Self {
        Self {
            total: copies,
            available: copies,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Take one copy off the shelf. Returns false when none is left.
    pub fn check_out(&mut self) -> bool {
        match self.available.checked_sub(1) {
            Some(left) => {
                self.available = left;
                true
            }
            None => false,
        }
    }

    /// Put one copy back. Returns false if the shelf was already full,
    /// in which case the counter is left at `total`.
    pub fn check_in(&mut self) -> bool {
        if self.available < self.total {
            self.available += 1;
            true
        } else {
            false
        }
    }
}
