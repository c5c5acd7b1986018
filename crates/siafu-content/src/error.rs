//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Content loading result type.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while loading the content directory.
///
/// These only occur at startup; the request path never constructs one.
/// Each variant keeps the offending path or slug so the operator can fix
/// the content directory without spelunking.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content directory doesn't exist or isn't a directory.
    #[error("content directory not found: {0}")]
    ContentDirMissing(PathBuf),

    /// A content file couldn't be read from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `simulations.json` is not valid JSON for the record schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share a slug; slugs are permanent link targets.
    #[error("duplicate simulation slug: {0}")]
    DuplicateSlug(String),

    /// A slug is empty or contains characters unsafe in a URL.
    #[error("invalid simulation slug: {0:?}")]
    InvalidSlug(String),

    /// A static section has no fragment file in `sections/`.
    #[error("missing section fragment: {0}")]
    MissingFragment(String),
}
