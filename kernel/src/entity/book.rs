mod author;
mod copies;
mod id;
mod isbn;
mod title;

pub use self::{author::*, copies::*, id::*, isbn::*, title::*};
use destructure::Destructure;
use uuid::Uuid;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    isbn: Isbn,
    copies: BookCopies,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        isbn: Isbn,
        copies: BookCopies,
    ) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
            copies,
        }
    }

    /// Registers a new title under a freshly generated id.
    pub fn create(title: BookTitle, author: BookAuthor, isbn: Isbn, copies: impl Into<i32>) -> Self {
        Self::new(
            BookId::new(Uuid::new_v4()),
            title,
            author,
            isbn,
            BookCopies::new(copies),
        )
    }

    /// Books are the same title when their ISBNs match, whatever their ids.
    pub fn same_isbn(&self, other: &Book) -> bool {
        self.isbn == other.isbn
    }

    pub(crate) fn borrow(&mut self) -> bool {
        self.copies.take()
    }

    pub(crate) fn give_back(&mut self) -> bool {
        self.copies.put_back()
    }

    pub(crate) fn add_copies(&mut self, count: i32) {
        self.copies.extend(count)
    }
}
