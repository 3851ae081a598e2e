//! Error types for sitegen-core.

use std::path::PathBuf;

use thiserror::Error;

/// The topic data file could not be turned into a list of topics.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file is missing or unreadable.
    #[error("cannot read topic data at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON, not a list, or a required field is missing.
    /// The serde_json source names the field and the line/column.
    #[error("malformed topic data at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
