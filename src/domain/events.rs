//! Circulation Events
//!
//! Facts recorded by the library manager after each successful state change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inventory and loan events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CirculationEvent {
    /// A book record was created (or overwritten)
    BookAdded { book_id: String, copies: u32 },

    /// A copy was lent to a reader
    BookBorrowed { book_id: String, user_id: String },

    /// A reader returned a copy
    BookReturned { book_id: String, user_id: String },
}

impl CirculationEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            CirculationEvent::BookAdded { .. } => "BookAdded",
            CirculationEvent::BookBorrowed { .. } => "BookBorrowed",
            CirculationEvent::BookReturned { .. } => "BookReturned",
        }
    }

    /// Get the book ID this event relates to
    pub fn book_id(&self) -> &str {
        match self {
            CirculationEvent::BookAdded { book_id, .. } => book_id,
            CirculationEvent::BookBorrowed { book_id, .. } => book_id,
            CirculationEvent::BookReturned { book_id, .. } => book_id,
        }
    }
}

/// One recorded event with its journal metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub sequence: u64,
    pub event: CirculationEvent,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only, in-memory list of circulation events.
///
/// Entries are never evicted, so the journal grows for as long as its owner lives.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return its sequence number (starting at 1)
    pub fn record(&mut self, event: CirculationEvent) -> u64 {
        let sequence = self.entries.len() as u64 + 1;
        self.entries.push(JournalEntry {
            id: Uuid::new_v4(),
            sequence,
            event,
            recorded_at: Utc::now(),
        });
        sequence
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_sequences_from_one() {
        let mut journal = Journal::new();
        assert!(journal.is_empty());

        let first = journal.record(CirculationEvent::BookAdded {
            book_id: "dune".to_string(),
            copies: 2,
        });
        let second = journal.record(CirculationEvent::BookBorrowed {
            book_id: "dune".to_string(),
            user_id: "alice".to_string(),
        });

        assert_eq!((first, second), (1, 2));
        assert_eq!(journal.len(), 2);
        assert_ne!(journal.entries()[0].id, journal.entries()[1].id);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = CirculationEvent::BookReturned {
            book_id: "dune".to_string(),
            user_id: "alice".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "BookReturned");
        assert_eq!(json["book_id"], "dune");
        assert_eq!(event.event_type(), "BookReturned");
        assert_eq!(event.book_id(), "dune");
    }
}
