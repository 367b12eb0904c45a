use application::service::ImportCatalogService;
use kernel::interface::query::CatalogQuery;

use crate::controller::Controller;
use crate::error::RequestError;
use crate::handler::Handler;
use crate::request::{CatalogTransformer, ImportRequest};
use crate::response::CatalogPresenter;

#[async_trait::async_trait]
pub trait CatalogRoute: 'static + Sync + Send {
    async fn route_import(&mut self, req: ImportRequest) -> Result<String, RequestError>;
}

#[async_trait::async_trait]
impl CatalogRoute for Handler {
    async fn route_import(&mut self, req: ImportRequest) -> Result<String, RequestError> {
        Controller::new(CatalogTransformer, CatalogPresenter)
            .try_intake(req)?
            .handle(|source| async move {
                let catalog = source.load().await;
                if let Ok(catalog) = &catalog {
                    self.import_catalog(catalog.clone()).await;
                }
                catalog
            })
            .await
    }
}
