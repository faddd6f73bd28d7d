//! Error taxonomy for level-mechanics generation.
//!
//! Every variant aborts generation of the entity being built. The compiler
//! wraps these with the entity name and dataset so the operator can locate
//! the authored data defect.
//!
//! # Design Principles
//!
//! - **No retries**: generation is a pure function of its inputs
//! - **Rich Context**: variants carry the offending level or name
//! - **Stable codes**: `error_code()` is safe to grep for in build logs

/// Errors raised while resolving catalogs, tables and schedules.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MechanicsError {
    /// Named catalog lookup miss.
    #[error("attribute '{name}' not found in catalog")]
    AttributeNotFound { name: String },

    /// No growth range contains the requested level.
    #[error("level {level} is not covered by any growth range")]
    RangeNotCovered { level: u32 },

    /// Cost schedule queried outside its authored tiers.
    #[error("level {level} falls outside every cost tier")]
    InvalidLevel { level: u32 },

    /// A level table must contain at least level 1.
    #[error("max level must be at least 1, got {max_level}")]
    InvalidMaxLevel { max_level: u32 },

    /// Strict catalog build found two records sharing a name.
    #[error("duplicate attribute '{name}' in catalog")]
    DuplicateAttribute { name: String },

    /// Strict table validation failed (gap, overlap, inverted range, ...).
    #[error("malformed table: {reason}")]
    MalformedTable { reason: String },
}

impl MechanicsError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeNotFound { .. } => "ATTRIBUTE_NOT_FOUND",
            Self::RangeNotCovered { .. } => "RANGE_NOT_COVERED",
            Self::InvalidLevel { .. } => "INVALID_LEVEL",
            Self::InvalidMaxLevel { .. } => "INVALID_MAX_LEVEL",
            Self::DuplicateAttribute { .. } => "DUPLICATE_ATTRIBUTE",
            Self::MalformedTable { .. } => "MALFORMED_TABLE",
        }
    }

    /// Returns the level this error refers to, if any.
    pub const fn level(&self) -> Option<u32> {
        match self {
            Self::RangeNotCovered { level } | Self::InvalidLevel { level } => Some(*level),
            _ => None,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }
}

/// Result alias for balance-core operations.
pub type Result<T> = core::result::Result<T, MechanicsError>;
