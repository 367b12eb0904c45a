use std::fmt::{Display, Formatter};

use application::transfer::BookDto;

use crate::controller::Exhaust;
use crate::response::listing;

#[derive(Debug)]
pub struct BookResponse(BookDto);

impl From<BookDto> for BookResponse {
    fn from(book: BookDto) -> Self {
        Self(book)
    }
}

impl Display for BookResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let book = &self.0;
        write!(
            f,
            "{} | {} | ISBN:{} | available:{}/{} | id:{}",
            book.title,
            book.author,
            book.isbn,
            book.available_copies,
            book.total_copies,
            book.id
        )
    }
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = String;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        listing("Books:", input.into_iter().map(BookResponse::from))
    }
}

/// A freshly added book together with the other books sharing its ISBN.
impl Exhaust<(BookDto, Vec<BookDto>)> for BookPresenter {
    type To = String;
    fn emit(&self, input: (BookDto, Vec<BookDto>)) -> Self::To {
        let (book, same_isbn) = input;
        let isbn = book.isbn.clone();
        let added = format!("Added: {}", BookResponse::from(book));
        match same_isbn.len() {
            0 => added,
            n => format!("{added}\nNote: {n} other book(s) share ISBN {isbn}"),
        }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = String;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        match input {
            Some(book) => format!("Updated: {}", BookResponse::from(book)),
            None => "No book with that id".to_string(),
        }
    }
}

pub struct SearchPresenter;

impl Exhaust<Vec<BookDto>> for SearchPresenter {
    type To = String;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        listing("Results:", input.into_iter().map(BookResponse::from))
    }
}
