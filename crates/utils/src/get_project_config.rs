use anyhow::{Context, Result};
use hystamp_core::ProjectConfig;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

/// Directory holding hystamp's own files inside a project.
#[must_use]
pub fn get_hystamp_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(".hystamp")
}

/// Loads `.hystamp/config.json`, falling back to defaults when the file does not exist.
///
/// A missing `name` is filled with the project directory name.
///
/// # Errors
/// Returns error if the config file exists but cannot be read or parsed.
pub async fn get_project_config(project_dir: &Path) -> Result<ProjectConfig> {
    let config_file = get_hystamp_dir(project_dir).join("config.json");
    let mut config = if config_file.is_file() {
        let content = read_to_string(&config_file)
            .await
            .context(format!("Failed to read {}", config_file.display()))?;
        serde_json::from_str::<ProjectConfig>(&content)
            .context(format!("Invalid config file - {}", config_file.display()))?
    } else {
        ProjectConfig::default()
    };

    if config.name.is_none() {
        config.name = project_dir_name(project_dir);
    }
    Ok(config)
}

fn project_dir_name(project_dir: &Path) -> Option<String> {
    let named = if project_dir.file_name().is_some() {
        project_dir.to_path_buf()
    } else {
        // "." has no file name of its own
        std::path::absolute(project_dir).ok()?
    };
    named
        .file_name()
        .and_then(|n| n.to_str())
        .map(std::string::ToString::to_string)
}
