//! Book Store Module
//!
//! Ordered id -> book mapping backing every catalog endpoint.

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::seed_books;
use crate::models::Book;

// == Book Store ==
/// Insertion-ordered catalog storage.
///
/// Overwriting an existing id keeps its original position; removing an id
/// keeps the relative order of the rest.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: IndexMap<i64, Book>,
}

impl BookStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the startup records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for book in seed_books() {
            store.insert(book);
        }
        store
    }

    // == List ==
    /// Returns the full contents in insertion order.
    pub fn list(&self) -> &IndexMap<i64, Book> {
        &self.books
    }

    // == Insert ==
    /// Inserts a book under its own id, overwriting any previous record.
    ///
    /// Returns the stored record.
    pub fn insert(&mut self, book: Book) -> Book {
        let previous = self.books.insert(book.id, book.clone());
        debug!(id = book.id, overwrite = previous.is_some(), "book stored");
        book
    }

    // == Get ==
    /// Looks up a book by id.
    pub fn get(&self, id: i64) -> Option<Book> {
        self.books.get(&id).cloned()
    }

    // == Update ==
    /// Replaces the record stored at `id`.
    ///
    /// Returns `None` without inserting anything when `id` is absent. The
    /// record is stored under `id` as given, even if `book.id` differs.
    pub fn update(&mut self, id: i64, book: Book) -> Option<Book> {
        let slot = self.books.get_mut(&id)?;
        *slot = book.clone();
        debug!(id, "book replaced");
        Some(book)
    }

    // == Delete ==
    /// Removes the record at `id`. Absent ids are ignored.
    pub fn delete(&mut self, id: i64) {
        if self.books.shift_remove(&id).is_some() {
            debug!(id, "book removed");
        }
    }

    // == Contains ==
    /// Returns true if a book is stored under `id`.
    pub fn contains(&self, id: i64) -> bool {
        self.books.contains_key(&id)
    }

    // == Length ==
    /// Returns the current number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn dune() -> Book {
        Book::new(1, "Dune", "Frank Herbert", 1965, Genre::ScienceFiction)
    }

    fn ids(store: &BookStore) -> Vec<i64> {
        store.list().keys().copied().collect()
    }

    #[test]
    fn test_store_new() {
        let store = BookStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_seeded() {
        let store = BookStore::seeded();
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get(1).unwrap().title, "The Hobbit");
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = BookStore::new();

        let stored = store.insert(dune());
        assert_eq!(stored, dune());
        assert_eq!(store.get(1), Some(dune()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = BookStore::new();
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_store_insert_overwrite_keeps_position() {
        let mut store = BookStore::seeded();
        let replacement = Book::new(1, "The Hobbit", "J.R.R. Tolkien", 1937, Genre::Fantasy);

        store.insert(replacement.clone());

        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get(1), Some(replacement));
    }

    #[test]
    fn test_store_list_insertion_order() {
        let mut store = BookStore::new();
        for id in [3, 1, 2] {
            store.insert(Book::new(id, "t", "a", 2000, Genre::Mystery));
        }
        assert_eq!(ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn test_store_update_existing() {
        let mut store = BookStore::new();
        store.insert(dune());

        let revised = Book::new(1, "Dune Messiah", "Frank Herbert", 1969, Genre::ScienceFiction);
        assert_eq!(store.update(1, revised.clone()), Some(revised.clone()));
        assert_eq!(store.get(1), Some(revised));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_update_absent_does_not_insert() {
        let mut store = BookStore::seeded();
        let before = store.clone();

        assert!(store.update(42, dune()).is_none());
        assert_eq!(store.list(), before.list());
    }

    #[test]
    fn test_store_update_keeps_path_key() {
        let mut store = BookStore::new();
        store.insert(dune());

        let mismatched = Book::new(5, "Children of Dune", "Frank Herbert", 1976, Genre::ScienceFiction);
        store.update(1, mismatched.clone());

        assert_eq!(store.get(1), Some(mismatched));
        assert!(!store.contains(5));
    }

    #[test]
    fn test_store_delete() {
        let mut store = BookStore::seeded();

        store.delete(2);

        assert!(!store.contains(2));
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let mut store = BookStore::seeded();

        store.delete(99);
        store.delete(99);

        assert_eq!(store.len(), 3);
    }
}
