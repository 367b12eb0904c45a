use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use error_stack::Report;
use kernel::interface::database::DependOnCatalog;
use kernel::interface::query::{CatalogQuery, DependOnCatalogQuery};
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::Catalog;
use kernel::KernelError;

#[derive(Default)]
pub(crate) struct MemoryStore {
    saved: Mutex<Option<Catalog>>,
    saves: AtomicUsize,
    broken: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn saved(&self) -> Option<Catalog> {
        self.saved.lock().unwrap().clone()
    }

    pub(crate) fn break_down(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl CatalogQuery for MemoryStore {
    async fn load(&self) -> error_stack::Result<Catalog, KernelError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(Report::new(KernelError::Corrupted));
        }
        Ok(self.saved().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl CatalogModifier for MemoryStore {
    async fn save(&self, catalog: &Catalog) -> error_stack::Result<(), KernelError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(Report::new(KernelError::Io));
        }
        *self.saved.lock().unwrap() = Some(catalog.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct TestLibrary {
    catalog: Catalog,
    pub(crate) store: MemoryStore,
}

impl DependOnCatalog for TestLibrary {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

impl DependOnCatalogQuery for TestLibrary {
    type CatalogQuery = MemoryStore;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &self.store
    }
}

impl DependOnCatalogModifier for TestLibrary {
    type CatalogModifier = MemoryStore;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &self.store
    }
}
