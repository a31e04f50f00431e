//! Output file writing.

use crate::error::CodegenError;
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a temporary sibling file and a rename,
/// so a failed write leaves any previous file untouched.
///
/// Parent directories are created as needed.
///
/// # Errors
/// Returns `CodegenError::Write` naming the path that could not be created,
/// written or renamed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| CodegenError::write(parent, e))?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| CodegenError::write(&temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(CodegenError::write(path, e));
    }

    Ok(())
}
