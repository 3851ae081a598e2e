//! Error types for sitegen-renderer.

use thiserror::Error;

/// All errors that can arise from fragment rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error")]
    Tera(#[from] tera::Error),
}
