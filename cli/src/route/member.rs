use std::future::ready;

use application::service::{CreateMemberService, GetMemberService};

use crate::controller::Controller;
use crate::handler::Handler;
use crate::request::{CreateMemberRequest, MemberTransformer};
use crate::response::MemberPresenter;

#[async_trait::async_trait]
pub trait MemberRoute: 'static + Sync + Send {
    async fn route_add_member(&mut self, req: CreateMemberRequest) -> String;
    async fn route_list_members(&self) -> String;
}

#[async_trait::async_trait]
impl MemberRoute for Handler {
    async fn route_add_member(&mut self, req: CreateMemberRequest) -> String {
        Controller::new(MemberTransformer, MemberPresenter)
            .intake(req)
            .handle(|dto| async move { self.add_member(dto).await })
            .await
    }

    async fn route_list_members(&self) -> String {
        Controller::present(MemberPresenter)
            .bypass(|| ready(self.list_members()))
            .await
    }
}
