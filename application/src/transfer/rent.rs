use kernel::prelude::entity::{BookId, MemberId};
use uuid::Uuid;

/// A loan request, used for both borrowing and returning.
#[derive(Debug, Clone, Copy)]
pub struct RentDto {
    pub member_id: Uuid,
    pub book_id: Uuid,
}

impl RentDto {
    pub(crate) fn ids(&self) -> (MemberId, BookId) {
        (MemberId::new(self.member_id), BookId::new(self.book_id))
    }
}
