use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub genre: String,
    pub pages: Option<u64>,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: String,
        authors: Vec<String>,
        genre: String,
        pages: Option<u64>,
        read: bool,
    ) -> Self {
        Self {
            title,
            authors,
            genre,
            pages,
            read,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn pages(&self) -> Option<u64> {
        self.pages
    }
}
