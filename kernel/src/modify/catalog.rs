use crate::entity::Catalog;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogModifier: 'static + Sync + Send {
    /// Replaces the stored snapshot with the whole of `catalog`.
    async fn save(&self, catalog: &Catalog) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCatalogModifier: 'static + Sync + Send {
    type CatalogModifier: CatalogModifier;
    fn catalog_modifier(&self) -> &Self::CatalogModifier;
}
