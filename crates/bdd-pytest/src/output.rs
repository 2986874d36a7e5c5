//! Atomic persistence of generated files.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::TranslateError;

/// Write `text` to `dir/filename` in a single atomic step.
///
/// The text goes to a temporary file in `dir` first, which is then renamed
/// over the destination. If anything fails the temporary file is removed
/// when it is dropped and any existing destination stays as it was.
///
/// # Errors
///
/// Returns [`TranslateError::Write`] when the temporary file cannot be
/// created or written, or the rename fails.
pub fn persist(dir: &Path, filename: &str, text: &str) -> Result<PathBuf, TranslateError> {
    let path = dir.join(filename);
    let write_error = |source| TranslateError::Write {
        path: path.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(&path)
        .map_err(|err| write_error(err.error))?;

    info!(path = %path.display(), bytes = text.len(), "wrote generated tests");
    Ok(path)
}
