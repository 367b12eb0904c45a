use std::fmt::{Display, Formatter};

/// Why a borrow or return left the catalog untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoanRejection {
    UnknownMember,
    UnknownBook,
    NoCopiesAvailable,
    NotBorrowed,
    NothingOnLoan,
}

impl Display for LoanRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanRejection::UnknownMember => write!(f, "No member with that id"),
            LoanRejection::UnknownBook => write!(f, "No book with that id"),
            LoanRejection::NoCopiesAvailable => write!(f, "No copies available"),
            LoanRejection::NotBorrowed => write!(f, "Member has not borrowed that book"),
            LoanRejection::NothingOnLoan => write!(f, "No copies of that book are on loan"),
        }
    }
}

impl std::error::Error for LoanRejection {}
