use std::fmt;
use std::str::FromStr;

use bookmanager_api::api::Book;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BookField {
    Id,
    Title,
    Author,
    Publisher,
    Category,
    Isbn,
    Year,
    Copies,
}

impl BookField {
    /// Form order, validation reports the first failing field in this order
    pub const ALL: [BookField; 8] = [
        BookField::Id,
        BookField::Title,
        BookField::Author,
        BookField::Publisher,
        BookField::Category,
        BookField::Isbn,
        BookField::Year,
        BookField::Copies,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BookField::Id => "id",
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Publisher => "publisher",
            BookField::Category => "category",
            BookField::Isbn => "isbn",
            BookField::Year => "year",
            BookField::Copies => "copies",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookField::Id => "ID",
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Publisher => "Publisher",
            BookField::Category => "Category",
            BookField::Isbn => "ISBN",
            BookField::Year => "Year",
            BookField::Copies => "Copies",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[error("Unknown book field {0}")]
pub struct UnknownField(pub String);

impl FromStr for BookField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum DraftError {
    #[error("Please fill out the {0} field.")]
    MissingField(BookField),

    #[error("Please enter a valid number for the {0} field.")]
    InvalidNumber(BookField),
}

/// Book as typed into the form, every field is kept as raw text until validated
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct BookDraft {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    pub isbn: String,
    pub year: String,
    pub copies: String,
}

impl BookDraft {
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Id => &self.id,
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Publisher => &self.publisher,
            BookField::Category => &self.category,
            BookField::Isbn => &self.isbn,
            BookField::Year => &self.year,
            BookField::Copies => &self.copies,
        }
    }

    pub fn set(&mut self, field: BookField, value: impl Into<String>) {
        let slot = match field {
            BookField::Id => &mut self.id,
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Publisher => &mut self.publisher,
            BookField::Category => &mut self.category,
            BookField::Isbn => &mut self.isbn,
            BookField::Year => &mut self.year,
            BookField::Copies => &mut self.copies,
        };
        *slot = value.into();
    }

    /// Checks every field in form order and converts the draft into a book.
    /// `id` may stay blank unless `require_id` is set.
    pub fn validate(&self, require_id: bool) -> Result<Book, DraftError> {
        if let Some(field) = BookField::ALL
            .into_iter()
            .filter(|&field| require_id || field != BookField::Id)
            .find(|&field| self.get(field).trim().is_empty())
        {
            return Err(DraftError::MissingField(field));
        }

        Ok(Book {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            category: self.category.clone(),
            isbn: self.isbn.clone(),
            year: parse_number(&self.year, BookField::Year)?,
            copies: parse_number(&self.copies, BookField::Copies)?,
        })
    }
}

fn parse_number<T: FromStr>(value: &str, field: BookField) -> Result<T, DraftError> {
    value
        .trim()
        .parse()
        .map_err(|_| DraftError::InvalidNumber(field))
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            category: book.category.clone(),
            isbn: book.isbn.clone(),
            year: book.year.to_string(),
            copies: book.copies.to_string(),
        }
    }
}
