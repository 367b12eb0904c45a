use kernel::prelude::entity::{DestructMember, Member, MemberId};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub borrowed_book_ids: Vec<Uuid>,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let DestructMember {
            id,
            name,
            email,
            borrowed_book_ids,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            borrowed_book_ids: borrowed_book_ids.into_iter().map(Uuid::from).collect(),
        }
    }
}

impl From<&Member> for MemberDto {
    fn from(value: &Member) -> Self {
        Self::from(value.clone())
    }
}

pub struct GetMemberDto {
    pub id: Uuid,
}

impl GetMemberDto {
    pub(crate) fn member_id(&self) -> MemberId {
        MemberId::new(self.id)
    }
}

pub struct CreateMemberDto {
    pub name: String,
    pub email: String,
}
