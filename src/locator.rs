use eyre::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// File name Cursor uses for each workspace database.
pub const STATE_DB_NAME: &str = "state.vscdb";

/// Recursively collect every `state.vscdb` below `root`.
///
/// A missing root yields an empty list. Traversal errors (unreadable directories and
/// the like) are returned to the caller. Order is unspecified.
pub fn find_state_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if root.is_dir() {
        walk(root, &mut found)?;
    }
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("Failed to read entry in: {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .wrap_err_with(|| format!("Failed to stat: {}", entry.path().display()))?;
        let path = entry.path();
        if file_type.is_dir() {
            walk(&path, found)?;
        } else if path.file_name() == Some(OsStr::new(STATE_DB_NAME)) {
            found.push(path);
        }
    }
    Ok(())
}
