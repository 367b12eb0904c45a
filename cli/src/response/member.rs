use std::fmt::{Display, Formatter};

use application::transfer::MemberDto;

use crate::controller::Exhaust;
use crate::response::listing;

#[derive(Debug)]
pub struct MemberResponse(MemberDto);

impl From<MemberDto> for MemberResponse {
    fn from(member: MemberDto) -> Self {
        Self(member)
    }
}

impl Display for MemberResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let member = &self.0;
        write!(
            f,
            "{} | {} | borrowed:{} | id:{}",
            member.name,
            member.email,
            member.borrowed_book_ids.len(),
            member.id
        )
    }
}

pub struct MemberPresenter;

impl Exhaust<Vec<MemberDto>> for MemberPresenter {
    type To = String;
    fn emit(&self, input: Vec<MemberDto>) -> Self::To {
        listing("Members:", input.into_iter().map(MemberResponse::from))
    }
}

impl Exhaust<MemberDto> for MemberPresenter {
    type To = String;
    fn emit(&self, input: MemberDto) -> Self::To {
        format!("Registered: {}", MemberResponse::from(input))
    }
}
