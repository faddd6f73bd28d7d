//! Balance data compiler.
//!
//! Turns authored balance content and the progression workbook into the
//! JSON datasets the game client reads at runtime:
//!
//! - [`sheet`]: spreadsheet access behind [`SheetSource`]
//! - [`requirements`]: skill and weapon level requirements read from sheets
//! - [`pipeline`]: the ordered build driven by [`Compiler`]
//! - [`store`]: dataset output behind [`BlobStore`]
pub mod config;
pub mod error;
pub mod pipeline;
pub mod requirements;
pub mod sheet;
pub mod store;

pub use config::CompilerConfig;
pub use error::{CompileError, Result};
pub use pipeline::{CompileOptions, Compiler, Manifest};
pub use requirements::RequirementLayout;
pub use sheet::{CellRange, InMemoryWorkbook, Sheet, SheetSource, WorkbookFile};
pub use store::{BlobStore, DatasetKey, FileBlobStore, InMemoryBlobStore};
