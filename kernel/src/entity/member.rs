mod email;
mod id;
mod name;

pub use self::{email::*, id::*, name::*};
use crate::entity::BookId;
use destructure::Destructure;
use uuid::Uuid;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Member {
    id: MemberId,
    name: MemberName,
    email: MemberEmail,
    // One entry per outstanding loan, so the same book may appear more than once.
    borrowed_book_ids: Vec<BookId>,
}

impl Member {
    pub fn new(
        id: MemberId,
        name: MemberName,
        email: MemberEmail,
        borrowed_book_ids: Vec<BookId>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            borrowed_book_ids,
        }
    }

    pub fn create(name: MemberName, email: MemberEmail) -> Self {
        Self::new(MemberId::new(Uuid::new_v4()), name, email, Vec::new())
    }

    pub fn loan_count(&self) -> usize {
        self.borrowed_book_ids.len()
    }

    pub fn has_borrowed(&self, book_id: &BookId) -> bool {
        self.borrowed_book_ids.contains(book_id)
    }

    pub(crate) fn record_borrow(&mut self, book_id: BookId) {
        self.borrowed_book_ids.push(book_id);
    }

    /// Removes a single loan of `book_id`, keeping any further copies on the list.
    pub(crate) fn record_return(&mut self, book_id: &BookId) -> bool {
        match self.borrowed_book_ids.iter().position(|id| id == book_id) {
            Some(index) => {
                self.borrowed_book_ids.remove(index);
                true
            }
            None => false,
        }
    }
}
