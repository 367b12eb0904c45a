use std::path::PathBuf;
use std::process::{ExitCode, Termination};

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Operator input that could not be turned into a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0:?} is not a whole number")]
    InvalidNumber(String),
    #[error("{0:?} is not a valid id")]
    InvalidId(String),
    #[error("Unknown search field {0:?}, expected title or author")]
    InvalidField(String),
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),
    #[error("Could not import: {0:?}")]
    Unreadable(Report<KernelError>),
}
