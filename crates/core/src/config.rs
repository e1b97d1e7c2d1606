use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Loaded from `.hystamp/config.json`, describes the plugin project being stamped.
///
/// Every field has a default so a missing or partial config file still yields a usable
/// project. Paths are relative to the project directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Project name, used as the plugin name and the JAR base name.
    /// Falls back to the project directory name when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Maven group of the plugin (e.g., "com.ralkage")
    #[serde(default)]
    pub group: String,

    /// Plugin version
    #[serde(default = "default_version")]
    pub version: String,

    /// Fully qualified main class of the plugin
    #[serde(default)]
    pub main: Option<String>,

    /// Whether the plugin JAR ships an asset pack
    #[serde(default = "default_includes_asset_pack")]
    pub includes_asset_pack: bool,

    /// Directory searched for a locally built `Server/HytaleServer.jar`
    #[serde(default = "default_search_root")]
    pub search_root: PathBuf,

    /// Resource directory processed into the output directory
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    /// Directory receiving processed resources and the generated descriptor
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

const fn default_includes_asset_pack() -> bool {
    true
}

fn default_search_root() -> PathBuf {
    PathBuf::from("build")
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("src/main/resources")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/hystamp")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            group: String::new(),
            version: default_version(),
            main: None,
            includes_asset_pack: default_includes_asset_pack(),
            search_root: default_search_root(),
            resources_dir: default_resources_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl ProjectConfig {
    /// Project name, empty when neither the config nor the loader supplied one.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
