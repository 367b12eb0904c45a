use kernel::prelude::entity::Catalog;
use kernel::KernelError;

use crate::controller::Exhaust;
use crate::error::RequestError;

pub struct CatalogPresenter;

impl Exhaust<error_stack::Result<Catalog, KernelError>> for CatalogPresenter {
    type To = Result<String, RequestError>;
    fn emit(&self, input: error_stack::Result<Catalog, KernelError>) -> Self::To {
        let catalog = input.map_err(RequestError::Unreadable)?;
        Ok(format!(
            "Imported {} book(s) and {} member(s)",
            catalog.book_count(),
            catalog.member_count()
        ))
    }
}
