use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single generated chapter. `content` is plain text; paragraphs are separated by newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub content: String,
}

/// The structured content produced by one generation request.
///
/// Every field is required on deserialization. A payload missing any of them
/// (or with a chapter missing `title`/`content`) is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
}

/// A Book as held by the studio session, stamped with the time it was generated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBook {
    pub book: Book,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedBook {
    pub fn new(book: Book) -> Self {
        Self {
            book,
            generated_at: Utc::now(),
        }
    }
}
