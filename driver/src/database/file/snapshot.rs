use std::collections::HashMap;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use kernel::prelude::entity::{
    Book, BookAuthor, BookCopies, BookId, BookTitle, Catalog, Isbn, Member, MemberEmail,
    MemberId, MemberName,
};
use kernel::KernelError;

use crate::error::DriverError;

pub(in crate::database) const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct SnapshotHeader {
    format_version: u32,
}

/// On-disk layout of a whole catalog. Rows are kept apart from the entities so the file format
/// only changes together with `FORMAT_VERSION`.
#[derive(Debug, Serialize, Deserialize)]
pub(in crate::database) struct CatalogSnapshot {
    format_version: u32,
    books: Vec<BookRow>,
    members: Vec<MemberRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BookRow {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
    total_copies: u32,
    available_copies: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct MemberRow {
    id: MemberId,
    name: String,
    email: String,
    borrowed_book_ids: Vec<BookId>,
}

impl CatalogSnapshot {
    pub(in crate::database) fn decode(bytes: &[u8]) -> Result<Self, DriverError> {
        let header = serde_json::from_slice::<SnapshotHeader>(bytes)?;
        if header.format_version != FORMAT_VERSION {
            return Err(DriverError::UnsupportedVersion(header.format_version));
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    pub(in crate::database) fn encode(&self) -> Result<Vec<u8>, DriverError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: *book.id(),
            title: book.title().clone().into(),
            author: book.author().clone().into(),
            isbn: book.isbn().clone().into(),
            total_copies: book.copies().total(),
            available_copies: book.copies().available(),
        }
    }
}

impl From<&Member> for MemberRow {
    fn from(member: &Member) -> Self {
        Self {
            id: *member.id(),
            name: member.name().clone().into(),
            email: member.email().clone().into(),
            borrowed_book_ids: member.borrowed_book_ids().clone(),
        }
    }
}

impl From<&Catalog> for CatalogSnapshot {
    fn from(catalog: &Catalog) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            books: catalog.books().map(BookRow::from).collect(),
            members: catalog.members().map(MemberRow::from).collect(),
        }
    }
}

impl TryFrom<BookRow> for Book {
    type Error = Report<KernelError>;
    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let copies = BookCopies::restore(row.total_copies, row.available_copies).ok_or_else(|| {
            Report::new(KernelError::Corrupted).attach_printable(format!(
                "book {} has {} of {} copies available",
                row.id, row.available_copies, row.total_copies
            ))
        })?;
        Ok(Book::new(
            row.id,
            BookTitle::new(row.title),
            BookAuthor::new(row.author),
            Isbn::new(row.isbn),
            copies,
        ))
    }
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member::new(
            row.id,
            MemberName::new(row.name),
            MemberEmail::new(row.email),
            row.borrowed_book_ids,
        )
    }
}

impl TryFrom<CatalogSnapshot> for Catalog {
    type Error = Report<KernelError>;
    fn try_from(snapshot: CatalogSnapshot) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::default();
        for row in snapshot.books {
            let id = row.id;
            if catalog.insert_book(Book::try_from(row)?).is_none() {
                return Err(Report::new(KernelError::Corrupted)
                    .attach_printable(format!("book {id} is stored twice")));
            }
        }
        let mut loans: HashMap<BookId, u32> = HashMap::new();
        for row in snapshot.members {
            let id = row.id;
            for book_id in &row.borrowed_book_ids {
                if !catalog.contains_book(book_id) {
                    return Err(Report::new(KernelError::Corrupted).attach_printable(format!(
                        "member {id} has borrowed unknown book {book_id}"
                    )));
                }
                *loans.entry(*book_id).or_default() += 1;
            }
            if catalog.insert_member(Member::from(row)).is_none() {
                return Err(Report::new(KernelError::Corrupted)
                    .attach_printable(format!("member {id} is stored twice")));
            }
        }
        // Every copy out must be held by exactly one recorded loan.
        for book in catalog.books() {
            let held = loans.get(book.id()).copied().unwrap_or(0);
            if held != book.copies().on_loan() {
                return Err(Report::new(KernelError::Corrupted).attach_printable(format!(
                    "book {} has {} copies out but {} recorded loans",
                    book.id(),
                    book.copies().on_loan(),
                    held
                )));
            }
        }
        Ok(catalog)
    }
}
