//! Atomic output writer.
//!
//! 1. Content is fully assembled by the caller.
//! 2. Compare with the bytes already on disk → skip if identical.
//! 3. Write to `<path>.sitegen.tmp`.
//! 4. Rename to final path (atomic on POSIX).
//!
//! A failed build never leaves a truncated output behind: either the rename
//! lands or the previous file stays as it was.

use std::path::{Path, PathBuf};

use crate::error::{write_err, BuildError};

/// Outcome of writing the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — content on disk already matches.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }
}

/// Atomically replace `path` with `content`, byte for byte.
pub fn atomic_write(path: &Path, content: &str) -> Result<WriteResult, BuildError> {
    let tmp = PathBuf::from(format!("{}.sitegen.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<WriteResult, BuildError> {
    if let Ok(existing) = std::fs::read(path) {
        if existing == content.as_bytes() {
            tracing::info!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(tmp, e));
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
