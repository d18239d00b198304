use bookmanager_api::api::Book;

use crate::book_api::BookApi;
use crate::confirm::Confirm;
use crate::draft::{BookDraft, BookField};

pub const FETCH_FAILED: &str = "Failed to fetch books.";
pub const SAVE_FAILED: &str = "Operation failed.";
pub const BOOK_ADDED: &str = "Book added successfully!";
pub const BOOK_UPDATED: &str = "Book updated successfully!";
pub const BOOK_DELETED: &str = "Book deleted successfully!";
pub const DELETE_FAILED: &str = "Delete failed.";
pub const DELETE_BY_ID_FAILED: &str = "Book not found or delete failed.";
pub const DELETE_ID_REQUIRED: &str = "Please enter a Book ID to delete.";
pub const SEARCH_ID_REQUIRED: &str = "Please enter a Book ID.";
pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum SaveMode {
    Create,
    Update,
}

/// State behind the book form and table.
///
/// The server is the source of truth: every successful mutation is followed by a
/// full reload of the book list, the cache is never patched locally.
/// Remote failures never surface as errors, they end up in [`Self::message`].
pub struct BookFormManager<A> {
    api: A,
    books: Vec<Book>,
    draft: BookDraft,
    edit_mode: bool,
    message: String,
    search_id: String,
    delete_id: String,
    view_book: Option<Book>,
}

impl<A: BookApi> BookFormManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: vec![],
            draft: BookDraft::default(),
            edit_mode: false,
            message: String::new(),
            search_id: String::new(),
            delete_id: String::new(),
            view_book: None,
        }
    }

    /// Creates the manager and performs the initial load of the list
    pub async fn mount(api: A) -> Self {
        let mut manager = Self::new(api);
        manager.list().await;
        manager
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn search_id(&self) -> &str {
        &self.search_id
    }

    pub fn delete_id(&self) -> &str {
        &self.delete_id
    }

    pub fn view_book(&self) -> Option<&Book> {
        self.view_book.as_ref()
    }

    /// Replaces the cached list with the server's, keeps the old cache on failure
    pub async fn list(&mut self) {
        match self.api.list_books().await {
            Ok(books) => self.books = books,
            Err(err) => {
                tracing::error!("Error fetching books: {:#}", err);
                self.message = FETCH_FAILED.to_string();
            }
        }
    }

    /// Returns false when the field is not editable, the id is locked in edit mode
    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) -> bool {
        if self.edit_mode && field == BookField::Id {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    pub fn set_search_id(&mut self, search_id: impl Into<String>) {
        self.search_id = search_id.into();
    }

    pub fn set_delete_id(&mut self, delete_id: impl Into<String>) {
        self.delete_id = delete_id.into();
    }

    /// Updates the book in edit mode, creates a new one otherwise
    pub async fn submit(&mut self) {
        if self.edit_mode {
            self.update().await
        } else {
            self.create().await
        }
    }

    pub async fn create(&mut self) {
        self.save(SaveMode::Create).await
    }

    pub async fn update(&mut self) {
        self.save(SaveMode::Update).await
    }

    async fn save(&mut self, mode: SaveMode) {
        let book = match self.draft.validate(mode == SaveMode::Update) {
            Ok(book) => book,
            Err(err) => {
                self.message = err.to_string();
                return;
            }
        };

        let (result, success_message) = match mode {
            SaveMode::Create => (self.api.add_book(&book).await, BOOK_ADDED),
            SaveMode::Update => (self.api.update_book(&book).await, BOOK_UPDATED),
        };

        match result {
            Ok(()) => {
                tracing::info!("Saved book {}", book.id);
                self.message = success_message.to_string();
                self.draft = BookDraft::default();
                self.edit_mode = false;
                self.list().await;
            }
            Err(err) => {
                tracing::error!("Error saving book: {:#}", err);
                self.message = SAVE_FAILED.to_string();
            }
        }
    }

    /// Loads the book into the draft for editing
    pub fn edit(&mut self, book: Book) {
        self.draft = BookDraft::from(&book);
        self.edit_mode = true;
        self.message.clear();
    }

    /// Starts editing a book from the cached list
    pub fn edit_by_id(&mut self, book_id: &str) {
        match self.books.iter().find(|book| book.id == book_id).cloned() {
            Some(book) => self.edit(book),
            None => self.message = BOOK_NOT_FOUND.to_string(),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = BookDraft::default();
        self.edit_mode = false;
    }

    /// Deletes a book picked from the list, nothing happens unless confirmed
    pub async fn delete(&mut self, book_id: &str, confirmer: &mut dyn Confirm) {
        if !confirmer.confirm(DELETE_PROMPT) {
            return;
        }
        match self.api.delete_book(book_id).await {
            Ok(()) => {
                tracing::info!("Deleted book {}", book_id);
                self.message = BOOK_DELETED.to_string();
                self.list().await;
            }
            Err(err) => {
                tracing::error!("Error deleting book: {:#}", err);
                self.message = DELETE_FAILED.to_string();
            }
        }
    }

    /// Deletes the book named in the delete-by-id input
    pub async fn delete_by_id(&mut self, confirmer: &mut dyn Confirm) {
        let book_id = self.delete_id.trim().to_string();
        if book_id.is_empty() {
            self.message = DELETE_ID_REQUIRED.to_string();
            return;
        }

        let prompt = format!("Are you sure you want to delete book with ID {}?", book_id);
        if !confirmer.confirm(&prompt) {
            return;
        }
        match self.api.delete_book(&book_id).await {
            Ok(()) => {
                tracing::info!("Deleted book {}", book_id);
                self.message = BOOK_DELETED.to_string();
                self.delete_id.clear();
                self.list().await;
            }
            Err(err) => {
                tracing::error!("Error deleting book by ID: {:#}", err);
                self.message = DELETE_BY_ID_FAILED.to_string();
            }
        }
    }

    /// Looks up the book named in the search-by-id input
    pub async fn get_by_id(&mut self) {
        let book_id = self.search_id.trim().to_string();
        if book_id.is_empty() {
            self.message = SEARCH_ID_REQUIRED.to_string();
            self.view_book = None;
            return;
        }

        match self.api.get_book(&book_id).await {
            Ok(Some(book)) => {
                self.view_book = Some(book);
                self.message.clear();
            }
            Ok(None) => {
                self.message = BOOK_NOT_FOUND.to_string();
                self.view_book = None;
            }
            Err(err) => {
                tracing::error!("Error fetching book by ID: {:#}", err);
                self.message = BOOK_NOT_FOUND.to_string();
                self.view_book = None;
            }
        }
    }
}
