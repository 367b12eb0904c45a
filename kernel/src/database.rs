use crate::entity::Catalog;

/// Owner of the in-memory catalog that every service reads from and mutates.
pub trait DependOnCatalog: 'static + Sync + Send {
    fn catalog(&self) -> &Catalog;
    fn catalog_mut(&mut self) -> &mut Catalog;
}
