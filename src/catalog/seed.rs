//! Records the catalog starts with.

use crate::models::{Book, Genre};

/// Returns the startup records, in listing order.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "The Hobbit", "J.R.R. Tolkien", 1937, Genre::ScienceFiction),
        Book::new(2, "The Lord of the Rings", "J.R.R. Tolkien", 1954, Genre::Fantasy),
        Book::new(3, "The Return of the King", "J.R.R. Tolkien", 1955, Genre::Fantasy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_ordered() {
        let ids: Vec<i64> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
