use std::path::PathBuf;

use clap::Parser;
use driver::database::FileCatalogStore;
use kernel::KernelError;

use crate::command::Command;

/// Keeps a small library's books and members in a single state file.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// State file to load and save [default: $LIBRARY_STATE_PATH or library.json]
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Also write debug logs to a daily rolling file in this directory
    #[arg(long, env = "LIBRARY_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn store(&self) -> error_stack::Result<FileCatalogStore, KernelError> {
        match &self.state {
            Some(path) => Ok(FileCatalogStore::new(path)),
            None => FileCatalogStore::from_env(),
        }
    }
}
