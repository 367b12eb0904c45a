use kernel::interface::database::DependOnCatalog;
use kernel::prelude::entity::{MemberEmail, MemberName};

use crate::service::SaveCatalogService;
use crate::transfer::{CreateMemberDto, GetMemberDto, MemberDto};

pub trait GetMemberService: 'static + Sync + Send + DependOnCatalog {
    fn list_members(&self) -> Vec<MemberDto> {
        self.catalog().members().map(MemberDto::from).collect()
    }

    fn find_member(&self, dto: GetMemberDto) -> Option<MemberDto> {
        self.catalog()
            .find_member(&dto.member_id())
            .map(MemberDto::from)
    }
}

impl<T> GetMemberService for T where T: DependOnCatalog {}

#[async_trait::async_trait]
pub trait CreateMemberService: 'static + Sync + Send + SaveCatalogService {
    async fn add_member(&mut self, dto: CreateMemberDto) -> MemberDto {
        let member = MemberDto::from(
            self.catalog_mut()
                .add_member(MemberName::new(dto.name), MemberEmail::new(dto.email)),
        );
        tracing::info!(id = %member.id, "Registered member");

        self.persist().await;
        member
    }
}

impl<T> CreateMemberService for T where T: SaveCatalogService {}
