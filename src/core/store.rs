//! Reading and writing markdown documents on disk

use std::fs;
use std::path::Path;

use super::error::{IoOp, Result, SessionError};

/// Content written into freshly created documents
pub const DEFAULT_CONTENT: &str = "# New Document\n\nStart writing...";

/// Read a document into memory
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SessionError::io(IoOp::Read, path, e))
}

/// Overwrite a document with `content`
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| SessionError::io(IoOp::Write, path, e))?;
    tracing::info!("Saved document: {}", path.display());
    Ok(())
}

/// Create a document holding the default boilerplate.
///
/// An existing file at `path` is overwritten. The parent directory must exist.
pub fn create(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONTENT).map_err(|e| SessionError::io(IoOp::Create, path, e))?;
    tracing::info!("Created document: {}", path.display());
    Ok(())
}
