use anyhow::{Result, anyhow};
use std::path::Path;

/// Formats `path` relative to `base` as `./relative`, for display.
///
/// # Errors
/// Returns error if `path` is not inside `base`.
pub fn get_relative_path(base: &Path, path: &Path) -> Result<String> {
    match path.strip_prefix(base) {
        Ok(relative) if relative.as_os_str().is_empty() => Ok(".".to_string()),
        Ok(relative) => Ok(format!(
            "./{}",
            relative.to_string_lossy().replace('\\', "/")
        )),
        Err(_) => Err(anyhow!(
            "Failed to get relative path of {} from {}",
            path.display(),
            base.display()
        )),
    }
}

/// Like [`get_relative_path`] but shows the path unchanged when it lies outside `base`.
#[must_use]
pub fn display_path(base: &Path, path: &Path) -> String {
    get_relative_path(base, path).unwrap_or_else(|_| path.display().to_string())
}
