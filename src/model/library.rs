use tracing::info;

use crate::model::{Book, Placement, Shelf, ShelfError};

#[derive(Debug, Default)]
pub struct Library {
    shelves: Vec<Shelf>,
}

impl Library {
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self { shelves }
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn books_count(&self) -> usize {
        self.shelves.iter().map(|s| s.books().len()).sum()
    }

    /// Route a book to the first shelf of its genre with room for it,
    /// probing shelves in declaration order.
    pub fn add_book(&mut self, book: &Book) -> Result<Placement, ShelfError> {
        let mut candidates = self
            .shelves
            .iter_mut()
            .filter(|shelf| shelf.genre() == book.genre)
            .peekable();
        if candidates.peek().is_none() {
            info!("book {:?} could not be added, no shelf available", book.title);
            return Ok(Placement::NoEligibleShelf);
        }
        for shelf in candidates {
            if shelf.add_book(book)? {
                info!("book {:?} added to library", book.title);
                return Ok(Placement::Placed);
            }
        }
        info!("book {:?} could not be added, no room available", book.title);
        Ok(Placement::NoRoom)
    }
}
