//! Errors raised while compiling datasets.

use balance_core::MechanicsError;
use thiserror::Error;

use crate::sheet::SheetError;
use crate::store::StoreError;

/// Errors surfaced by the dataset pipeline.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Generation of one entity failed; nothing was written for it.
    #[error("failed to generate {entity} ({dataset}): {source}")]
    Entity {
        entity: String,
        dataset: String,
        #[source]
        source: MechanicsError,
    },

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Authored content could not be loaded.
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },

    #[error("unknown {kind} '{slug}'")]
    UnknownEntity { kind: &'static str, slug: String },

    /// A dataset this build step reads has not been published yet.
    #[error("dataset '{dataset}' has not been built yet")]
    MissingDataset { dataset: String },
}

impl CompileError {
    pub(crate) fn entity(
        entity: impl Into<String>,
        dataset: impl ToString,
        source: MechanicsError,
    ) -> Self {
        Self::Entity {
            entity: entity.into(),
            dataset: dataset.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
