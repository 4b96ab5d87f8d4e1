use serde::Serialize;

use crate::export::{Export, ExportError};
use crate::model::Shelf;

#[derive(Serialize)]
struct ShelfExportRow {
    genre: String,
    size: u64,
    books: usize,
    pages_used: u64,
    room_left: u64,
}

fn to_export_row(shelf: &Shelf) -> ShelfExportRow {
    ShelfExportRow {
        genre: shelf.genre().to_string(),
        size: shelf.size(),
        books: shelf.books().len(),
        pages_used: shelf.pages_used(),
        room_left: shelf.room_left(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl Export for [Shelf] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for shelf in self {
            wtr.serialize(to_export_row(shelf))?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        use std::io::Write;

        for shelf in self {
            writeln!(
                buffer,
                "### {} ({} of {} pages used)",
                capitalize(shelf.genre()),
                shelf.pages_used(),
                shelf.size()
            )?;
            for book in shelf.books() {
                let pages = book
                    .pages
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                let read = if book.read { "Read" } else { "Not Read" };
                writeln!(
                    buffer,
                    "- **{}** by {} ({} pages, {})",
                    book.title,
                    book.authors.join(", "),
                    pages,
                    read
                )?;
            }
            writeln!(buffer)?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::JsonToString)
    }
}
