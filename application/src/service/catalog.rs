use kernel::interface::database::DependOnCatalog;
use kernel::interface::query::{CatalogQuery, DependOnCatalogQuery};
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::Catalog;
use kernel::KernelError;

#[async_trait::async_trait]
pub trait LoadCatalogService: 'static + Sync + Send + DependOnCatalog + DependOnCatalogQuery {
    /// Replaces the in-memory catalog with the stored one. An unreadable store is logged and
    /// leaves an empty catalog behind.
    async fn load_catalog(&mut self) {
        let catalog = match self.catalog_query().load().await {
            Ok(catalog) => catalog,
            Err(report) => {
                tracing::error!("Failed to load catalog, starting empty: {report:?}");
                Catalog::default()
            }
        };
        tracing::info!(
            books = catalog.book_count(),
            members = catalog.member_count(),
            "Catalog ready"
        );
        *self.catalog_mut() = catalog;
    }
}

impl<T> LoadCatalogService for T where T: DependOnCatalog + DependOnCatalogQuery {}

#[async_trait::async_trait]
pub trait SaveCatalogService:
    'static + Sync + Send + DependOnCatalog + DependOnCatalogModifier
{
    async fn save_catalog(&self) -> error_stack::Result<(), KernelError> {
        self.catalog_modifier().save(self.catalog()).await
    }

    /// Saves after a mutation. The in-memory catalog stays authoritative when saving fails.
    async fn persist(&self) {
        if let Err(report) = self.save_catalog().await {
            tracing::error!("Failed to save catalog, changes are kept in memory only: {report:?}");
        }
    }
}

impl<T> SaveCatalogService for T where T: DependOnCatalog + DependOnCatalogModifier {}

#[async_trait::async_trait]
pub trait ImportCatalogService: 'static + Sync + Send + SaveCatalogService {
    async fn import_catalog(&mut self, catalog: Catalog) {
        tracing::info!(
            books = catalog.book_count(),
            members = catalog.member_count(),
            "Importing catalog"
        );
        *self.catalog_mut() = catalog;
        self.persist().await;
    }
}

impl<T> ImportCatalogService for T where T: SaveCatalogService {}
