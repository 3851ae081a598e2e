//! Error types for sitegen-build.

use std::path::PathBuf;

use thiserror::Error;

use sitegen_core::DataError;
use sitegen_renderer::RenderError;

/// All errors that can abort a build. Every variant is fatal and is raised
/// before the output file is touched.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Topic data missing, unparsable, or missing a required field.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Template file missing or unreadable.
    #[error("template missing at {path}")]
    TemplateMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error from the rendering engine.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Output path unwritable (permissions, missing directory).
    #[error("cannot write output at {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BuildError::OutputWrite`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::OutputWrite {
        path: path.into(),
        source,
    }
}
