use kernel::prelude::entity::LoanRejection;

use crate::controller::Exhaust;

pub struct BorrowPresenter;

impl Exhaust<Result<(), LoanRejection>> for BorrowPresenter {
    type To = String;
    fn emit(&self, input: Result<(), LoanRejection>) -> Self::To {
        match input {
            Ok(()) => "Borrowed successfully".to_string(),
            Err(rejection) => format!("Could not borrow: {rejection}"),
        }
    }
}

pub struct ReturnPresenter;

impl Exhaust<Result<(), LoanRejection>> for ReturnPresenter {
    type To = String;
    fn emit(&self, input: Result<(), LoanRejection>) -> Self::To {
        match input {
            Ok(()) => "Returned successfully".to_string(),
            Err(rejection) => format!("Could not return: {rejection}"),
        }
    }
}
