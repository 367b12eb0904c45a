use std::path::PathBuf;

use driver::database::FileCatalogStore;

use crate::controller::TryIntake;
use crate::error::RequestError;

#[derive(Debug)]
pub struct ImportRequest {
    path: PathBuf,
}

impl ImportRequest {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

pub struct CatalogTransformer;

impl TryIntake<ImportRequest> for CatalogTransformer {
    type To = FileCatalogStore;
    type Error = RequestError;
    // A missing file would load as an empty catalog and wipe the current one.
    fn emit(&self, input: ImportRequest) -> Result<Self::To, Self::Error> {
        if !input.path.is_file() {
            return Err(RequestError::MissingFile(input.path));
        }
        Ok(FileCatalogStore::new(input.path))
    }
}
