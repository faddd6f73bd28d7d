//! Command implementations for the `balance` binary.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod build;
mod entity;
mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};
use balance_compiler::{CompileOptions, Compiler, CompilerConfig, FileBlobStore, WorkbookFile};
use balance_content::ContentFactory;
use clap::Args;

pub use build::Dataset;
pub use entity::Entity;
pub use list::List;

/// Flags shared by every command; they override `balance.toml` and `BALANCE_*`.
#[derive(Args)]
pub struct GlobalArgs {
    /// Content directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory for datasets
    #[arg(long, global = true, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Progression workbook (RON)
    #[arg(long, global = true, value_name = "FILE")]
    sheets: Option<PathBuf>,

    /// Reject duplicate names and malformed tables
    #[arg(long, global = true)]
    strict: bool,

    /// Configuration file (defaults to ./balance.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn resolve(self) -> Result<CompilerConfig> {
        let mut config = CompilerConfig::resolve(self.config.as_deref())?;
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = self.out_dir {
            config.out_dir = dir;
        }
        if let Some(path) = self.sheets {
            config.sheets = Some(path);
        }
        if self.strict {
            config.strict = true;
        }
        Ok(config)
    }
}

/// Inputs and the output store for one invocation.
pub struct Project {
    pub config: CompilerConfig,
    pub factory: ContentFactory,
    pub sheets: WorkbookFile,
    pub store: FileBlobStore,
}

impl Project {
    pub fn open(config: CompilerConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);

        let sheets_path = config.sheets_path();
        let sheets = WorkbookFile::open(&sheets_path)
            .with_context(|| format!("Failed to open workbook {}", sheets_path.display()))?;

        let store = FileBlobStore::new(&config.out_dir).with_context(|| {
            format!("Failed to prepare output directory {}", config.out_dir.display())
        })?;

        Ok(Self {
            config,
            factory,
            sheets,
            store,
        })
    }

    pub fn compiler(&self) -> Result<Compiler<'_>> {
        let options = CompileOptions::from(&self.config);
        Compiler::load(&self.factory, &self.sheets, &self.store, options).with_context(|| {
            format!("Failed to load content from {}", self.config.data_dir.display())
        })
    }
}
