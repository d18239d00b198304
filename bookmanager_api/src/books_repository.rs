pub use in_memory_books_repository::InMemoryBooksRepository;

use crate::api::{Book, BookId};

mod in_memory_books_repository;

#[derive(thiserror::Error, Debug)]
pub enum BooksRepositoryError {
    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error("Book {0} already exists")]
    AlreadyExists(BookId),
}

#[async_trait::async_trait]
pub trait BooksRepository: Send + Sync {
    /// Adds book under its own id, fails if the id is already taken
    async fn add_book(&self, book: Book) -> Result<(), BooksRepositoryError>;
    /// Replaces the book stored under `book.id`
    async fn update_book(&self, book: Book) -> Result<(), BooksRepositoryError>;
    async fn get_book(&self, book_id: &str) -> Result<Book, BooksRepositoryError>;
    async fn delete_book(&self, book_id: &str) -> Result<(), BooksRepositoryError>;
    /// Lists all books ordered by id
    async fn list_books(&self) -> Result<Vec<Book>, BooksRepositoryError>;
}
