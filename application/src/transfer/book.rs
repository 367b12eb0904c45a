use kernel::prelude::entity::{Book, BookId};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            id: (*book.id()).into(),
            title: book.title().clone().into(),
            author: book.author().clone().into(),
            isbn: book.isbn().clone().into(),
            total_copies: book.copies().total(),
            available_copies: book.copies().available(),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

impl GetBookDto {
    pub(crate) fn book_id(&self) -> BookId {
        BookId::new(self.id)
    }
}

pub struct GetBooksByIsbnDto {
    pub isbn: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SearchField {
    Title,
    Author,
}

pub struct SearchBooksDto {
    pub field: SearchField,
    pub query: String,
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: i32,
}

#[derive(Debug)]
pub struct AddCopiesDto {
    pub book_id: Uuid,
    pub count: i32,
}
