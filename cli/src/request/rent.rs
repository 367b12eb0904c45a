use application::transfer::RentDto;

use crate::controller::TryIntake;
use crate::error::RequestError;
use crate::request::parse_id;

#[derive(Debug)]
pub struct RentRequest {
    member_id: String,
    book_id: String,
}

impl RentRequest {
    pub fn new(member_id: String, book_id: String) -> Self {
        Self { member_id, book_id }
    }
}

pub struct RentTransformer;

impl TryIntake<RentRequest> for RentTransformer {
    type To = RentDto;
    type Error = RequestError;
    fn emit(&self, input: RentRequest) -> Result<Self::To, Self::Error> {
        Ok(RentDto {
            member_id: parse_id(&input.member_id)?,
            book_id: parse_id(&input.book_id)?,
        })
    }
}
