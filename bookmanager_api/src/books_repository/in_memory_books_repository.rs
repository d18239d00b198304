use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::api::{Book, BookId};
use crate::books_repository::{BooksRepository, BooksRepositoryError};

#[derive(Default)]
pub struct InMemoryBooksRepository {
    books: parking_lot::RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBooksRepository {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: parking_lot::RwLock::new(
                books.into_iter().map(|book| (book.id.clone(), book)).collect(),
            ),
        }
    }
}

#[async_trait::async_trait]
impl BooksRepository for InMemoryBooksRepository {
    async fn add_book(&self, book: Book) -> Result<(), BooksRepositoryError> {
        match self.books.write().entry(book.id.clone()) {
            Entry::Occupied(_) => Err(BooksRepositoryError::AlreadyExists(book.id)),
            Entry::Vacant(entry) => {
                entry.insert(book);
                Ok(())
            }
        }
    }

    async fn update_book(&self, book: Book) -> Result<(), BooksRepositoryError> {
        let mut locked_books = self.books.write();
        if let Some(stored) = locked_books.get_mut(&book.id) {
            *stored = book;
            Ok(())
        } else {
            Err(BooksRepositoryError::NotFound(book.id))
        }
    }

    async fn get_book(&self, book_id: &str) -> Result<Book, BooksRepositoryError> {
        self.books
            .read()
            .get(book_id)
            .cloned()
            .ok_or_else(|| BooksRepositoryError::NotFound(book_id.to_string()))
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), BooksRepositoryError> {
        self.books
            .write()
            .remove(book_id)
            .map(|_| ())
            .ok_or_else(|| BooksRepositoryError::NotFound(book_id.to_string()))
    }

    async fn list_books(&self) -> Result<Vec<Book>, BooksRepositoryError> {
        Ok(self.books.read().values().cloned().collect())
    }
}
