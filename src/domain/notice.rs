//! User notices
//!
//! Messages sent to readers through the notification collaborator.
//! The rendered text is part of the public contract.

use std::fmt;

/// A message addressed to a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Borrowing was refused because the account is inactive
    AccountInactive,

    /// A copy was lent out
    Borrowed { book_id: String },

    /// A copy came back
    Returned { book_id: String },
}

impl Notice {
    pub fn borrowed(book_id: impl Into<String>) -> Self {
        Self::Borrowed {
            book_id: book_id.into(),
        }
    }

    pub fn returned(book_id: impl Into<String>) -> Self {
        Self::Returned {
            book_id: book_id.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AccountInactive => write!(f, "Your account is not active."),
            Notice::Borrowed { book_id } => write!(f, "You have borrowed the book: {}", book_id),
            Notice::Returned { book_id } => write!(f, "You have returned the book: {}", book_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::AccountInactive.to_string(), "Your account is not active.");
        assert_eq!(
            Notice::borrowed("dune").to_string(),
            "You have borrowed the book: dune"
        );
        assert_eq!(
            Notice::returned("dune").to_string(),
            "You have returned the book: dune"
        );
    }
}
