use application::transfer::CreateMemberDto;

use crate::controller::Intake;

#[derive(Debug)]
pub struct CreateMemberRequest {
    name: String,
    email: String,
}

impl CreateMemberRequest {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

pub struct MemberTransformer;

impl Intake<CreateMemberRequest> for MemberTransformer {
    type To = CreateMemberDto;
    fn emit(&self, input: CreateMemberRequest) -> Self::To {
        CreateMemberDto {
            name: input.name,
            email: input.email,
        }
    }
}
