use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Lists every regular file below `dir`, relative to it and sorted.
///
/// Returns an empty list when `dir` does not exist.
///
/// # Errors
/// Returns error if `dir` is not valid UTF-8 or a directory entry cannot be read.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let root = dir
        .to_str()
        .context(format!("Path is not valid UTF-8 - {}", dir.display()))?;
    let pattern = Path::new(&Pattern::escape(root)).join("**").join("*");

    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            files.push(
                path.strip_prefix(dir)
                    .context(format!("{} is outside {}", path.display(), dir.display()))?
                    .to_path_buf(),
            );
        }
    }
    files.sort();
    Ok(files)
}
