use std::fmt;

use bookmanager_api::api::Book;

use crate::book_api::BookApi;
use crate::draft::BookField;
use crate::form_manager::BookFormManager;

const TABLE_COLUMNS: [&str; 5] = ["ID", "Title", "Author", "Year", "Copies"];

/// Whole screen: message, form, viewed book and the book list
pub struct Screen<'a, A>(pub &'a BookFormManager<A>);

pub fn render<A: BookApi>(manager: &BookFormManager<A>) -> String {
    Screen(manager).to_string()
}

impl<A: BookApi> fmt::Display for Screen<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manager = self.0;
        writeln!(f, "== Book Manager ==")?;
        if !manager.message().is_empty() {
            writeln!(f, "> {}", manager.message())?;
        }

        writeln!(f)?;
        write_form(f, manager)?;

        if let Some(book) = manager.view_book() {
            writeln!(f, "\n-- View Book by ID --")?;
            write_book(f, book)?;
        }

        writeln!(f, "\n-- Book List --")?;
        write_table(f, manager.books())
    }
}

fn write_form<A: BookApi>(
    f: &mut fmt::Formatter<'_>,
    manager: &BookFormManager<A>,
) -> fmt::Result {
    let edit_mode = manager.is_edit_mode();
    writeln!(
        f,
        "-- {} --",
        if edit_mode { "Update Book" } else { "Add Book" }
    )?;
    for field in BookField::ALL {
        // id is locked while editing
        if edit_mode && field == BookField::Id {
            continue;
        }
        writeln!(
            f,
            "{:<10} {}",
            format!("{}:", field.label()),
            manager.draft().get(field)
        )?;
    }
    if edit_mode {
        writeln!(f, "(editing book {}, `cancel` to discard)", manager.draft().id)?;
    }
    Ok(())
}

fn write_book(f: &mut fmt::Formatter<'_>, book: &Book) -> fmt::Result {
    let values = [
        book.id.clone(),
        book.title.clone(),
        book.author.clone(),
        book.publisher.clone(),
        book.category.clone(),
        book.isbn.clone(),
        book.year.to_string(),
        book.copies.to_string(),
    ];
    for (field, value) in BookField::ALL.into_iter().zip(values) {
        writeln!(f, "{}: {}", field.label(), value)?;
    }
    Ok(())
}

fn write_table(f: &mut fmt::Formatter<'_>, books: &[Book]) -> fmt::Result {
    if books.is_empty() {
        return writeln!(f, "No books available");
    }

    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|book| {
            [
                book.id.clone(),
                book.title.clone(),
                book.author.clone(),
                book.year.to_string(),
                book.copies.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_COLUMNS.map(|header| header.chars().count());
    for row in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = TABLE_COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(f, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use crate::test_support::{book, RecordingBookApi};

    #[tokio::test]
    async fn test_renders_empty_list_and_add_form() {
        let manager = BookFormManager::mount(RecordingBookApi::default()).await;
        let screen = render(&manager);

        assert!(screen.contains("-- Add Book --"));
        assert!(screen.contains("ID:"));
        assert!(screen.contains("No books available"));
        assert!(!screen.contains("> "));
    }

    #[tokio::test]
    async fn test_renders_table_and_hides_id_while_editing() {
        let api = RecordingBookApi::with_books([book("5", "Dune"), book("12", "Emma")]);
        let mut manager = BookFormManager::mount(api).await;
        manager.edit_by_id("5");

        let screen = render(&manager);
        assert!(screen.contains("-- Update Book --"));
        assert!(!screen.contains("ID:"));
        assert!(screen.contains("Title:     Dune"));
        assert!(screen.contains("ID | Title | Author  | Year | Copies"));
        assert!(screen.contains("12 | Emma  | Herbert | 1965 | 3"));
        assert!(screen.contains("5  | Dune  | Herbert | 1965 | 3"));
    }

    #[tokio::test]
    async fn test_renders_message_and_viewed_book() {
        let api = RecordingBookApi::with_books([book("5", "Dune")]);
        let mut manager = BookFormManager::mount(api).await;
        manager.set_search_id("5");
        manager.get_by_id().await;
        manager.set_delete_id("");
        manager.delete_by_id(&mut |_: &str| true).await;

        let screen = render(&manager);
        assert!(screen.contains("> Please enter a Book ID to delete."));
        assert!(screen.contains("-- View Book by ID --"));
        assert!(screen.contains("Publisher: Chilton"));
        assert!(screen.contains("ISBN: 123"));
    }

    #[tokio::test]
    async fn test_screen_display_matches_render() {
        let api = RecordingBookApi::with_books([book("5", "Dune")]);
        let manager = BookFormManager::mount(api).await;

        let screen = format!("{}", Screen(&manager));
        assert_eq!(screen, render(&manager));
        assert!(screen.starts_with("== Book Manager ==\n\n-- Add Book --\n"));
        assert!(screen.ends_with(
            "-- Book List --\nID | Title | Author  | Year | Copies\n5  | Dune  | Herbert | 1965 | 3\n"
        ));
    }
}
