use std::path::PathBuf;

use clap::Subcommand;

use crate::error::RequestError;
use crate::handler::Handler;
use crate::request::{
    AddCopiesRequest, CreateBookRequest, CreateMemberRequest, ImportRequest, RentRequest,
    SearchBooksRequest,
};
use crate::route::{BookRoute, CatalogRoute, MemberRoute, RentRoute};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default)
    Shell,
    #[command(flatten)]
    Once(Operation),
}

/// A single catalog operation; the result is printed and the process exits.
#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Add a book; copies below zero are stored as zero
    AddBook {
        title: String,
        author: String,
        isbn: String,
        #[arg(allow_hyphen_values = true)]
        copies: String,
    },
    /// List every book in insertion order
    ListBooks,
    /// Case-insensitive substring search
    SearchBooks {
        query: String,
        /// Field to match: title or author
        #[arg(long, default_value = "title")]
        by: String,
    },
    /// Register a member
    AddMember { name: String, email: String },
    /// List every member in registration order
    ListMembers,
    /// Lend one copy of a book to a member
    Borrow { member_id: String, book_id: String },
    /// Take back a copy a member has borrowed
    Return { member_id: String, book_id: String },
    /// Add copies to an existing book
    AddCopies {
        book_id: String,
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Replace the whole catalog with the contents of another state file
    Import { path: PathBuf },
}

impl Operation {
    pub async fn execute(self, handler: &mut Handler) -> Result<String, RequestError> {
        match self {
            Operation::AddBook {
                title,
                author,
                isbn,
                copies,
            } => {
                handler
                    .route_add_book(CreateBookRequest::new(title, author, isbn, copies))
                    .await
            }
            Operation::ListBooks => Ok(handler.route_list_books().await),
            Operation::SearchBooks { query, by } => {
                handler
                    .route_search_books(SearchBooksRequest::new(by, query))
                    .await
            }
            Operation::AddMember { name, email } => Ok(handler
                .route_add_member(CreateMemberRequest::new(name, email))
                .await),
            Operation::ListMembers => Ok(handler.route_list_members().await),
            Operation::Borrow { member_id, book_id } => {
                handler
                    .route_borrow(RentRequest::new(member_id, book_id))
                    .await
            }
            Operation::Return { member_id, book_id } => {
                handler
                    .route_return(RentRequest::new(member_id, book_id))
                    .await
            }
            Operation::AddCopies { book_id, count } => {
                handler
                    .route_add_copies(AddCopiesRequest::new(book_id, count))
                    .await
            }
            Operation::Import { path } => handler.route_import(ImportRequest::new(path)).await,
        }
    }
}
