use crate::entity::Catalog;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogQuery: 'static + Sync + Send {
    /// Reads the last saved snapshot. A store that has never been saved yields an empty catalog.
    async fn load(&self) -> error_stack::Result<Catalog, KernelError>;
}

pub trait DependOnCatalogQuery: 'static + Sync + Send {
    type CatalogQuery: CatalogQuery;
    fn catalog_query(&self) -> &Self::CatalogQuery;
}
