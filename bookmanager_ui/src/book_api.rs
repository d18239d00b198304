use bookmanager_api::api::Book;
use bookmanager_api::client::BookApiClient;

/// Remote operations the form manager depends on
#[async_trait::async_trait]
pub trait BookApi: Send + Sync {
    async fn list_books(&self) -> anyhow::Result<Vec<Book>>;
    /// Returns None when the book does not exist
    async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>>;
    async fn add_book(&self, book: &Book) -> anyhow::Result<()>;
    async fn update_book(&self, book: &Book) -> anyhow::Result<()>;
    async fn delete_book(&self, book_id: &str) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl BookApi for BookApiClient {
    async fn list_books(&self) -> anyhow::Result<Vec<Book>> {
        BookApiClient::list_books(self).await
    }

    async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        BookApiClient::get_book(self, book_id).await
    }

    async fn add_book(&self, book: &Book) -> anyhow::Result<()> {
        BookApiClient::add_book(self, book).await
    }

    async fn update_book(&self, book: &Book) -> anyhow::Result<()> {
        BookApiClient::update_book(self, book).await
    }

    async fn delete_book(&self, book_id: &str) -> anyhow::Result<()> {
        BookApiClient::delete_book(self, book_id).await
    }
}
