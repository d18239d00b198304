use std::collections::BTreeMap;

use anyhow::bail;
use parking_lot::{Mutex, RwLock};

use bookmanager_api::api::{Book, BookId};

use crate::book_api::BookApi;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ApiCall {
    List,
    Get(BookId),
    Add(Book),
    Update(Book),
    Delete(BookId),
}

/// In-memory book api that records every call and can be switched to fail
#[derive(Default)]
pub struct RecordingBookApi {
    books: RwLock<BTreeMap<BookId, Book>>,
    calls: Mutex<Vec<ApiCall>>,
    failing: RwLock<bool>,
    list_failing: RwLock<bool>,
}

impl RecordingBookApi {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let api = Self::default();
        api.books
            .write()
            .extend(books.into_iter().map(|book| (book.id.clone(), book)));
        api
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.write() = failing;
    }

    /// Fails only the list call, mutations still go through
    pub fn set_list_failing(&self, failing: bool) {
        *self.list_failing.write() = failing;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: ApiCall) -> anyhow::Result<()> {
        self.calls.lock().push(call);
        if *self.failing.read() {
            bail!("Connection refused")
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookApi for RecordingBookApi {
    async fn list_books(&self) -> anyhow::Result<Vec<Book>> {
        self.record(ApiCall::List)?;
        if *self.list_failing.read() {
            bail!("Connection reset")
        }
        Ok(self.books.read().values().cloned().collect())
    }

    async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        self.record(ApiCall::Get(book_id.to_string()))?;
        Ok(self.books.read().get(book_id).cloned())
    }

    async fn add_book(&self, book: &Book) -> anyhow::Result<()> {
        self.record(ApiCall::Add(book.clone()))?;
        self.books.write().insert(book.id.clone(), book.clone());
        Ok(())
    }

    async fn update_book(&self, book: &Book) -> anyhow::Result<()> {
        self.record(ApiCall::Update(book.clone()))?;
        match self.books.write().get_mut(&book.id) {
            Some(stored) => *stored = book.clone(),
            None => bail!("Book {} not found", book.id),
        }
        Ok(())
    }

    async fn delete_book(&self, book_id: &str) -> anyhow::Result<()> {
        self.record(ApiCall::Delete(book_id.to_string()))?;
        if self.books.write().remove(book_id).is_none() {
            bail!("Book {} not found", book_id)
        }
        Ok(())
    }
}

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Herbert".to_string(),
        publisher: "Chilton".to_string(),
        category: "SciFi".to_string(),
        isbn: "123".to_string(),
        year: 1965,
        copies: 3,
    }
}
