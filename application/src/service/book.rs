use kernel::interface::database::DependOnCatalog;
use kernel::prelude::entity::{BookAuthor, BookId, BookTitle, Isbn, SearchQuery};

use crate::service::SaveCatalogService;
use crate::transfer::{
    AddCopiesDto, BookDto, CreateBookDto, GetBookDto, GetBooksByIsbnDto, SearchBooksDto,
    SearchField,
};

pub trait GetBookService: 'static + Sync + Send + DependOnCatalog {
    fn list_books(&self) -> Vec<BookDto> {
        self.catalog().books().map(BookDto::from).collect()
    }

    fn find_book(&self, dto: GetBookDto) -> Option<BookDto> {
        self.catalog().find_book(&dto.book_id()).map(BookDto::from)
    }

    fn search_books(&self, dto: SearchBooksDto) -> Vec<BookDto> {
        let query = SearchQuery::new(dto.query);
        let found = match dto.field {
            SearchField::Title => self.catalog().search_by_title(&query),
            SearchField::Author => self.catalog().search_by_author(&query),
        };
        found.into_iter().map(BookDto::from).collect()
    }

    fn books_with_isbn(&self, dto: GetBooksByIsbnDto) -> Vec<BookDto> {
        self.catalog()
            .books_with_isbn(&Isbn::new(dto.isbn))
            .into_iter()
            .map(BookDto::from)
            .collect()
    }
}

impl<T> GetBookService for T where T: DependOnCatalog {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + SaveCatalogService {
    async fn add_book(&mut self, dto: CreateBookDto) -> BookDto {
        let CreateBookDto {
            title,
            author,
            isbn,
            copies,
        } = dto;
        let book = BookDto::from(self.catalog_mut().add_book(
            BookTitle::new(title),
            BookAuthor::new(author),
            Isbn::new(isbn),
            copies,
        ));
        tracing::info!(id = %book.id, isbn = %book.isbn, "Added book");

        self.persist().await;
        book
    }
}

impl<T> CreateBookService for T where T: SaveCatalogService {}

#[async_trait::async_trait]
pub trait AddCopiesService: 'static + Sync + Send + SaveCatalogService {
    /// Grows both the total and available counts. A non-positive count leaves the book untouched.
    async fn add_copies(&mut self, dto: AddCopiesDto) -> Option<BookDto> {
        let id = BookId::new(dto.book_id);
        let book = self
            .catalog_mut()
            .add_copies(&id, dto.count)
            .map(BookDto::from)?;

        if dto.count > 0 {
            tracing::info!(id = %book.id, count = dto.count, "Added copies");
            self.persist().await;
        }
        Some(book)
    }
}

impl<T> AddCopiesService for T where T: SaveCatalogService {}
