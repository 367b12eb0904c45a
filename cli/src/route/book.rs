use std::future::ready;

use application::service::{AddCopiesService, CreateBookService, GetBookService};
use application::transfer::GetBooksByIsbnDto;

use crate::controller::Controller;
use crate::error::RequestError;
use crate::handler::Handler;
use crate::request::{AddCopiesRequest, BookTransformer, CreateBookRequest, SearchBooksRequest};
use crate::response::{BookPresenter, SearchPresenter};

#[async_trait::async_trait]
pub trait BookRoute: 'static + Sync + Send {
    async fn route_add_book(&mut self, req: CreateBookRequest) -> Result<String, RequestError>;
    async fn route_list_books(&self) -> String;
    async fn route_search_books(&self, req: SearchBooksRequest) -> Result<String, RequestError>;
    async fn route_add_copies(&mut self, req: AddCopiesRequest) -> Result<String, RequestError>;
}

#[async_trait::async_trait]
impl BookRoute for Handler {
    async fn route_add_book(&mut self, req: CreateBookRequest) -> Result<String, RequestError> {
        let reply = Controller::new(BookTransformer, BookPresenter)
            .try_intake(req)?
            .handle(|dto| async move {
                let book = self.add_book(dto).await;
                let same_isbn = self
                    .books_with_isbn(GetBooksByIsbnDto {
                        isbn: book.isbn.clone(),
                    })
                    .into_iter()
                    .filter(|other| other.id != book.id)
                    .collect::<Vec<_>>();
                (book, same_isbn)
            })
            .await;
        Ok(reply)
    }

    async fn route_list_books(&self) -> String {
        Controller::present(BookPresenter)
            .bypass(|| ready(self.list_books()))
            .await
    }

    async fn route_search_books(&self, req: SearchBooksRequest) -> Result<String, RequestError> {
        let reply = Controller::new(BookTransformer, SearchPresenter)
            .try_intake(req)?
            .handle(|dto| ready(self.search_books(dto)))
            .await;
        Ok(reply)
    }

    async fn route_add_copies(&mut self, req: AddCopiesRequest) -> Result<String, RequestError> {
        let reply = Controller::new(BookTransformer, BookPresenter)
            .try_intake(req)?
            .handle(|dto| async move { self.add_copies(dto).await })
            .await;
        Ok(reply)
    }
}
