use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use tracing::debug;

use kernel::interface::query::CatalogQuery;
use kernel::interface::update::CatalogModifier;
use kernel::prelude::entity::Catalog;
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

use self::snapshot::CatalogSnapshot;

mod snapshot;

static STATE_PATH: &str = "LIBRARY_STATE_PATH";
pub static DEFAULT_STATE_FILE: &str = "library.json";

/// Keeps the whole catalog in a single JSON snapshot file.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `LIBRARY_STATE_PATH` (also read from `.env`), falling back to `library.json`.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        match env(STATE_PATH) {
            Ok(path) => Ok(Self::new(path)),
            Err(DriverError::Env(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))) => {
                Ok(Self::new(DEFAULT_STATE_FILE))
            }
            Err(error) => Err::<Self, _>(error)
                .convert_error()
                .attach_printable_lazy(|| format!("Failed to read {STATE_PATH}")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, DriverError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(DriverError::from(error)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), DriverError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temporary = self.temporary_path();
        tokio::fs::write(&temporary, bytes).await?;
        tokio::fs::rename(&temporary, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogQuery for FileCatalogStore {
    async fn load(&self) -> error_stack::Result<Catalog, KernelError> {
        let Some(bytes) = self
            .read()
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {}", self.path.display()))?
        else {
            debug!(path = %self.path.display(), "No saved catalog, starting empty");
            return Ok(Catalog::default());
        };

        let snapshot = CatalogSnapshot::decode(&bytes)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to decode {}", self.path.display()))?;
        let catalog = Catalog::try_from(snapshot)?;

        debug!(
            path = %self.path.display(),
            books = catalog.book_count(),
            members = catalog.member_count(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

#[async_trait::async_trait]
impl CatalogModifier for FileCatalogStore {
    async fn save(&self, catalog: &Catalog) -> error_stack::Result<(), KernelError> {
        let bytes = CatalogSnapshot::from(catalog).encode().convert_error()?;
        self.write(&bytes)
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to write {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            books = catalog.book_count(),
            members = catalog.member_count(),
            "Saved catalog"
        );
        Ok(())
    }
}
