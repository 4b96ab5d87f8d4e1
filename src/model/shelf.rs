use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::Book;

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("book {title:?} is wrong genre, {book_genre} != {shelf_genre}")]
    GenreMismatch {
        title: String,
        book_genre: String,
        shelf_genre: String,
    },
    #[error("book {title:?} has no pages")]
    InvalidBook { title: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Shelf {
    size: u64,
    genre: String,
    books: Vec<Book>,
}

impl Shelf {
    pub fn new(size: u64, genre: String) -> Self {
        Self {
            size,
            genre,
            books: Vec::new(),
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn pages_used(&self) -> u64 {
        self.books.iter().map(|b| b.pages.unwrap_or(0)).sum()
    }

    /// Room left on the shelf in pages, recomputed from the current books.
    pub fn room_left(&self) -> u64 {
        self.size.saturating_sub(self.pages_used())
    }

    /// Attempt to add a book to the shelf. `Ok(false)` means the shelf has
    /// no room for this book and was left unchanged; genre mismatches and
    /// books without a valid page count are errors.
    pub fn add_book(&mut self, book: &Book) -> Result<bool, ShelfError> {
        if book.genre != self.genre {
            return Err(ShelfError::GenreMismatch {
                title: book.title.clone(),
                book_genre: book.genre.clone(),
                shelf_genre: self.genre.clone(),
            });
        }
        let pages = match book.pages {
            Some(pages) if pages > 0 => pages,
            _ => {
                return Err(ShelfError::InvalidBook {
                    title: book.title.clone(),
                })
            }
        };
        let room_left = self.room_left();
        if room_left < pages {
            debug!("no room left on shelf, {} > {}", pages, room_left);
            return Ok(false);
        }
        self.books.push(book.clone());
        Ok(true)
    }
}
