use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::Book;

/// Outcome of asking the library to place a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed,
    NoEligibleShelf,
    NoRoom,
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Placed => "placed",
            Placement::NoEligibleShelf => "no shelf available",
            Placement::NoRoom => "no room available",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct PlacementRecord {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub pages: Option<u64>,
    pub outcome: Placement,
    pub recorded_at: DateTime<Utc>,
}

impl PlacementRecord {
    pub fn new(book: &Book, outcome: Placement) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: book.title.clone(),
            genre: book.genre.clone(),
            pages: book.pages,
            outcome,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PlacementLog {
    records: Vec<PlacementRecord>,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, book: &Book, outcome: Placement) {
        self.records.push(PlacementRecord::new(book, outcome));
    }

    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    pub fn placed(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.records.iter().filter(|r| r.outcome.is_placed())
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.records.len() - self.placed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "Strata: Stories from Deep Time".to_string(),
            vec!["Laura Poppick".to_string()],
            "non-fiction".to_string(),
            Some(288),
            false,
        )
    }

    #[test]
    fn test_log_counts() {
        let mut log = PlacementLog::new();
        let book = sample_book();
        log.record(&book, Placement::Placed);
        log.record(&book, Placement::NoRoom);
        log.record(&book, Placement::NoEligibleShelf);
        assert_eq!(log.records().len(), 3);
        assert_eq!(log.placed_count(), 1);
        assert_eq!(log.rejected_count(), 2);
    }

    #[test]
    fn test_record_captures_book_fields() {
        let book = sample_book();
        let record = PlacementRecord::new(&book, Placement::Placed);
        assert_eq!(record.title, book.title);
        assert_eq!(record.genre, "non-fiction");
        assert_eq!(record.pages, Some(288));
        assert!(record.outcome.is_placed());
    }
}
