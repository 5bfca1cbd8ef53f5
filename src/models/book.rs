//! Book record and its genre classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of genres a book can belong to.
///
/// Serialized with the human-readable labels; any other label is rejected
/// when a request body is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    Thriller,
}

impl Genre {
    /// All genres, in declaration order.
    pub const ALL: [Genre; 6] = [
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::Thriller,
    ];

    /// Wire label of the genre.
    pub fn label(self) -> &'static str {
        match self {
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
///
/// Used both as the request body for create/replace and as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "title": "The Hobbit",
    "author": "J.R.R. Tolkien",
    "publication_year": 1937,
    "genre": "Fantasy"
}))]
pub struct Book {
    /// Catalog identifier, also the storage key
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i64,
    pub genre: Genre,
}

impl Book {
    /// Creates a new Book
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i64,
        genre: Genre,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
            genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_deserialize() {
        let raw = r#"{"id":1,"title":"Dune","author":"Frank Herbert","publication_year":1965,"genre":"Science Fiction"}"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(
            book,
            Book::new(1, "Dune", "Frank Herbert", 1965, Genre::ScienceFiction)
        );
    }

    #[test]
    fn test_book_serialize_uses_labels() {
        let book = Book::new(7, "It", "Stephen King", 1986, Genre::Horror);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "It",
                "author": "Stephen King",
                "publication_year": 1986,
                "genre": "Horror"
            })
        );
    }

    #[test]
    fn test_genre_labels_match_serde() {
        for genre in Genre::ALL {
            let encoded = serde_json::to_string(&genre).unwrap();
            assert_eq!(encoded, format!("\"{}\"", genre.label()));
            assert_eq!(genre.to_string(), genre.label());
        }
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let result: Result<Genre, _> = serde_json::from_str("\"Poetry\"");
        assert!(result.is_err());

        // Variant names are not accepted in place of labels
        let result: Result<Genre, _> = serde_json::from_str("\"ScienceFiction\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let raw = r#"{"id":1,"title":"Dune","author":"Frank Herbert","genre":"Fantasy"}"#;
        assert!(serde_json::from_str::<Book>(raw).is_err());
    }
}
