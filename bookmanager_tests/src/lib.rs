use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{App, HttpServer};
use paperclip::actix::{web, OpenApiExt};

use bookmanager_api::api::Book;
use bookmanager_api::app_config::config_app;
use bookmanager_api::books_repository::{BooksRepository, InMemoryBooksRepository};


/// Starts the stub book api on an ephemeral port, seeded with `books`.
/// Must be called from within a tokio runtime, returns the base url.
pub fn spawn_stub_server(books: impl IntoIterator<Item = Book>) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();

    let books_repository: Arc<dyn BooksRepository> =
        Arc::new(InMemoryBooksRepository::with_books(books));
    let server = HttpServer::new(move || {
        App::new()
            .wrap_api()
            .app_data(web::Data::new(books_repository.clone()))
            .configure(config_app)
            .build()
    })
    .workers(1)
    .listen(listener)?
    .run();
    tokio::spawn(server);

    Ok(format!("http://127.0.0.1:{}", port))
}

/// Url of a port nobody listens on
pub fn unreachable_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}", port))
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
