use uuid::Uuid;

use crate::error::RequestError;

mod book;
mod catalog;
mod member;
mod rent;

pub use self::{book::*, catalog::*, member::*, rent::*};

fn parse_id(input: &str) -> Result<Uuid, RequestError> {
    Uuid::parse_str(input.trim()).map_err(|_| RequestError::InvalidId(input.to_string()))
}

fn parse_count(input: &str) -> Result<i32, RequestError> {
    input
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidNumber(input.to_string()))
}
