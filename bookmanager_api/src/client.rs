use anyhow::{anyhow, bail, Context};
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::api::Book;

pub struct BookApiClient {
    url: String,
    client: ClientWithMiddleware,
}

impl BookApiClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        // reject a malformed base url up front, not on the first request
        Url::parse(url).with_context(|| format!("Invalid book api url {}", url))?;

        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Appends path segments to the base url, each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.url).context("Invalid book api url")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Book api url {} cannot be a base", self.url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Calls GET /all endpoint
    pub async fn list_books(&self) -> anyhow::Result<Vec<Book>> {
        let response = self.client.get(self.endpoint(&["all"])?).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to list books {}", error)
        }
    }

    /// Calls GET /get/{book_id} endpoint
    /// Returns book if it was present
    /// None if book was not found
    /// and error in case of any other failure
    pub async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .get(self.endpoint(&["get", book_id])?)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to get book {} {}", book_id, error)
        }
    }

    /// Calls POST /add endpoint
    pub async fn add_book(&self, book: &Book) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.endpoint(&["add"])?)
            .json(book)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to add book {} {}", book.id, error)
        }
        Ok(())
    }

    /// Calls PUT /update endpoint with the whole book, id included
    pub async fn update_book(&self, book: &Book) -> anyhow::Result<()> {
        let response = self
            .client
            .put(self.endpoint(&["update"])?)
            .json(book)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to update book {} {}", book.id, error)
        }
        Ok(())
    }

    /// Calls DELETE /delete/{book_id} endpoint
    pub async fn delete_book(&self, book_id: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .delete(self.endpoint(&["delete", book_id])?)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to delete book {} {}", book_id, error)
        }
        Ok(())
    }
}
