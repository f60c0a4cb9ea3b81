// crates/relnote-core/src/error.rs - Error taxonomy for a scaffolding run
//
// Every guard failure is terminal. The CLI prints the Display text of these
// variants verbatim, so messages are written for the operator, not for logs.

use std::path::PathBuf;
use thiserror::Error;

use crate::category::Category;
use crate::config::ConfigError;

/// Errors that can end a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(
        "Unrecognized category '{category}'. Recognized categories: {}. \
         Unusual categories must be given explicitly as the second argument.",
        Category::names().join(", ")
    )]
    UnrecognizedCategory { category: String },

    #[error("Invalid identifier '{identifier}': it must name a single folder directly under the root")]
    InvalidIdentifier { identifier: String },

    #[error("Target folder does not exist: {}", .path.display())]
    TargetFolderMissing { path: PathBuf },

    #[error(
        "Legacy artifact {} was last changed by '{author}' ({message}); \
         it contains human changes and will not be deleted",
        .path.display()
    )]
    LegacyArtifactHasHumanChanges {
        path: PathBuf,
        author: String,
        message: String,
    },

    #[error("Version-control query failed for {}:\n{diagnostics}", .path.display())]
    VersionControlQueryFailed { path: PathBuf, diagnostics: String },

    #[error("Final artifact already exists: {}", .path.display())]
    FinalArtifactAlreadyExists { path: PathBuf },

    #[error("Template file missing after copy: {}", .path.display())]
    TemplateFileMissing { path: PathBuf },

    #[error("Failed to {operation} {}: {source}", .path.display())]
    FilesystemOperationFailed {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ScaffoldError {
    /// Wrap an I/O error with the operation and path that produced it
    pub fn fs(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FilesystemOperationFailed {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
