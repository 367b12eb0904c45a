use std::io;

use application::service::SaveCatalogService;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::RequestError;
use crate::handler::Handler;
use crate::request::{
    AddCopiesRequest, CreateBookRequest, CreateMemberRequest, RentRequest, SearchBooksRequest,
};
use crate::route::{BookRoute, MemberRoute, RentRoute};

const MENU: &str = "
Select an option:
1) Add book
2) List books
3) Search books
4) Register member
5) List members
6) Borrow book
7) Return book
8) Add copies
0) Exit
> ";

/// Numbered menu over any line-based input. End of input is treated as `0`.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub async fn run(&mut self, handler: &mut Handler) -> io::Result<()> {
        self.print("Welcome to the Library Management System").await?;
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.read_line().await? else {
                break;
            };
            if choice == "0" {
                break;
            }
            match self.dispatch(&choice, handler).await? {
                Some(reply) => self.print(&reply).await?,
                None => break,
            }
        }

        let farewell = match handler.save_catalog().await {
            Ok(()) => "Goodbye! State saved.".to_string(),
            Err(report) => {
                tracing::error!("Failed to save catalog on exit: {report:?}");
                format!("Goodbye! State could not be saved: {}", report.current_context())
            }
        };
        self.print(&farewell).await
    }

    /// Runs one menu entry. `None` means the input ended halfway through a form.
    async fn dispatch(&mut self, choice: &str, handler: &mut Handler) -> io::Result<Option<String>> {
        let reply = match choice {
            "1" => match self.form(["Title: ", "Author: ", "ISBN: ", "Copies: "]).await? {
                Some([title, author, isbn, copies]) => reply(
                    handler
                        .route_add_book(CreateBookRequest::new(title, author, isbn, copies))
                        .await,
                ),
                None => return Ok(None),
            },
            "2" => handler.route_list_books().await,
            "3" => match self
                .form(["Search by (1) title (2) author: ", "Query: "])
                .await?
            {
                Some([field, query]) => reply(
                    handler
                        .route_search_books(SearchBooksRequest::new(field, query))
                        .await,
                ),
                None => return Ok(None),
            },
            "4" => match self.form(["Name: ", "Email: "]).await? {
                Some([name, email]) => {
                    handler
                        .route_add_member(CreateMemberRequest::new(name, email))
                        .await
                }
                None => return Ok(None),
            },
            "5" => handler.route_list_members().await,
            "6" => match self.form(["Member ID: ", "Book ID: "]).await? {
                Some([member, book]) => {
                    reply(handler.route_borrow(RentRequest::new(member, book)).await)
                }
                None => return Ok(None),
            },
            "7" => match self.form(["Member ID: ", "Book ID: "]).await? {
                Some([member, book]) => {
                    reply(handler.route_return(RentRequest::new(member, book)).await)
                }
                None => return Ok(None),
            },
            "8" => match self.form(["Book ID: ", "Copies to add: "]).await? {
                Some([book, count]) => reply(
                    handler
                        .route_add_copies(AddCopiesRequest::new(book, count))
                        .await,
                ),
                None => return Ok(None),
            },
            _ => "Unknown option".to_string(),
        };
        Ok(Some(reply))
    }

    async fn form<const N: usize>(&mut self, labels: [&str; N]) -> io::Result<Option<[String; N]>> {
        let mut answers = Vec::with_capacity(N);
        for label in labels {
            self.write(label).await?;
            match self.read_line().await? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(answers.try_into().ok())
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn print(&mut self, text: &str) -> io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }
}

fn reply(result: Result<String, RequestError>) -> String {
    result.unwrap_or_else(|error| format!("Error: {error}"))
}
