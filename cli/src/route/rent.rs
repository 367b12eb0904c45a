use application::service::{RentService, ReturnService};

use crate::controller::Controller;
use crate::error::RequestError;
use crate::handler::Handler;
use crate::request::{RentRequest, RentTransformer};
use crate::response::{BorrowPresenter, ReturnPresenter};

#[async_trait::async_trait]
pub trait RentRoute: 'static + Sync + Send {
    async fn route_borrow(&mut self, req: RentRequest) -> Result<String, RequestError>;
    async fn route_return(&mut self, req: RentRequest) -> Result<String, RequestError>;
}

#[async_trait::async_trait]
impl RentRoute for Handler {
    async fn route_borrow(&mut self, req: RentRequest) -> Result<String, RequestError> {
        let reply = Controller::new(RentTransformer, BorrowPresenter)
            .try_intake(req)?
            .handle(|dto| async move { self.borrow_book(dto).await })
            .await;
        Ok(reply)
    }

    async fn route_return(&mut self, req: RentRequest) -> Result<String, RequestError> {
        let reply = Controller::new(RentTransformer, ReturnPresenter)
            .try_intake(req)?
            .handle(|dto| async move { self.return_book(dto).await })
            .await;
        Ok(reply)
    }
}
