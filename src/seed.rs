use crate::model::{Book, Shelf};

/// The starter shelves, in the order the library probes them.
pub fn starter_shelves() -> Vec<Shelf> {
    vec![
        Shelf::new(4000, "non-fiction".to_string()),
        Shelf::new(3000, "fantasy".to_string()),
        Shelf::new(3000, "mystery".to_string()),
    ]
}

pub fn starter_books() -> Vec<Book> {
    vec![
        Book::new(
            "A Flower Traveled in My Blood: The Incredible True Story of the Grandmothers Who Fought to Find a Stolen Generation of Children".to_string(),
            vec!["Haley Cohen Gilliland".to_string()],
            "non-fiction".to_string(),
            Some(512),
            false,
        ),
        Book::new(
            "Strata: Stories from Deep Time".to_string(),
            vec!["Laura Poppick".to_string()],
            "non-fiction".to_string(),
            Some(288),
            false,
        ),
        Book::new(
            "Will Eisner: A Comics Biography".to_string(),
            vec![
                "Steve Weiner".to_string(),
                "Dan Mazur (illustrator)".to_string(),
            ],
            "non-fiction".to_string(),
            Some(300),
            false,
        ),
    ]
}

/// Parse a JSON array of book records, the shape a caller-side intake form
/// produces. Records may omit `pages`; such books are rejected at placement.
pub fn books_from_json(json: &str) -> Result<Vec<Book>, serde_json::Error> {
    serde_json::from_str(json)
}
