use application::service::LoadCatalogService;
use driver::database::FileCatalogStore;
use kernel::interface::database::DependOnCatalog;
use kernel::interface::query::DependOnCatalogQuery;
use kernel::interface::update::DependOnCatalogModifier;
use kernel::prelude::entity::Catalog;

/// The in-memory catalog and the state file it is saved to.
pub struct Handler {
    catalog: Catalog,
    store: FileCatalogStore,
}

impl Handler {
    pub async fn init(store: FileCatalogStore) -> Self {
        tracing::debug!(path = %store.path().display(), "Opening catalog");
        let mut handler = Self {
            catalog: Catalog::default(),
            store,
        };
        handler.load_catalog().await;
        handler
    }
}

impl DependOnCatalog for Handler {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

impl DependOnCatalogQuery for Handler {
    type CatalogQuery = FileCatalogStore;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &self.store
    }
}

impl DependOnCatalogModifier for Handler {
    type CatalogModifier = FileCatalogStore;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &self.store
    }
}
