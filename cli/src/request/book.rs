use application::transfer::{AddCopiesDto, CreateBookDto, SearchBooksDto, SearchField};

use crate::controller::TryIntake;
use crate::error::RequestError;
use crate::request::{parse_count, parse_id};

#[derive(Debug)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    isbn: String,
    copies: String,
}

impl CreateBookRequest {
    pub fn new(title: String, author: String, isbn: String, copies: String) -> Self {
        Self {
            title,
            author,
            isbn,
            copies,
        }
    }
}

#[derive(Debug)]
pub struct SearchBooksRequest {
    field: String,
    query: String,
}

impl SearchBooksRequest {
    pub fn new(field: String, query: String) -> Self {
        Self { field, query }
    }
}

#[derive(Debug)]
pub struct AddCopiesRequest {
    id: String,
    count: String,
}

impl AddCopiesRequest {
    pub fn new(id: String, count: String) -> Self {
        Self { id, count }
    }
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = RequestError;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            copies: parse_count(&input.copies)?,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
        })
    }
}

impl TryIntake<SearchBooksRequest> for BookTransformer {
    type To = SearchBooksDto;
    type Error = RequestError;
    fn emit(&self, input: SearchBooksRequest) -> Result<Self::To, Self::Error> {
        let field = match input.field.trim().to_lowercase().as_str() {
            "1" | "title" => SearchField::Title,
            "2" | "author" => SearchField::Author,
            _ => return Err(RequestError::InvalidField(input.field)),
        };
        Ok(SearchBooksDto {
            field,
            query: input.query,
        })
    }
}

impl TryIntake<AddCopiesRequest> for BookTransformer {
    type To = AddCopiesDto;
    type Error = RequestError;
    fn emit(&self, input: AddCopiesRequest) -> Result<Self::To, Self::Error> {
        Ok(AddCopiesDto {
            book_id: parse_id(&input.id)?,
            count: parse_count(&input.count)?,
        })
    }
}
