use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{BuildProperties, ProjectConfig};

/// Author entry of a plugin descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PluginAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The Hytale plugin descriptor, written as `manifest.json` at the root of the plugin JAR.
///
/// The host server reads `ServerVersion` to check compatibility; `*` means "unspecified"
/// and makes the server warn about a possibly outdated plugin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PluginManifest {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<PluginAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub server_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default)]
    pub includes_asset_pack: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional_dependencies: BTreeMap<String, String>,
}

/// Property keys read when building the descriptor.
pub mod keys {
    pub const PLUGIN_GROUP: &str = "plugin_group";
    pub const PLUGIN_DESCRIPTION: &str = "plugin_description";
    pub const PLUGIN_AUTHOR: &str = "plugin_author";
    pub const PLUGIN_WEBSITE: &str = "plugin_website";
    pub const PLUGIN_MAIN_ENTRYPOINT: &str = "plugin_main_entrypoint";
}

impl PluginManifest {
    /// Builds the descriptor from the project config and build properties.
    ///
    /// Property fallbacks: group defaults to the project name, description and author to
    /// empty, main entry point to the configured `main`. A blank author is left out.
    #[must_use]
    pub fn from_project(
        config: &ProjectConfig,
        properties: &BuildProperties,
        server_version: &str,
    ) -> Self {
        let author = properties.find_or(keys::PLUGIN_AUTHOR, "");
        let authors = if author.trim().is_empty() {
            Vec::new()
        } else {
            vec![PluginAuthor {
                name: author.to_string(),
                email: None,
                url: None,
            }]
        };

        Self {
            group: properties
                .find_or(keys::PLUGIN_GROUP, config.name())
                .to_string(),
            name: config.name().to_string(),
            version: config.version.clone(),
            description: properties
                .find_or(keys::PLUGIN_DESCRIPTION, "")
                .to_string(),
            authors,
            website: properties
                .find(keys::PLUGIN_WEBSITE)
                .filter(|w| !w.trim().is_empty())
                .map(str::to_string),
            server_version: server_version.to_string(),
            main: properties
                .find(keys::PLUGIN_MAIN_ENTRYPOINT)
                .map(str::to_string)
                .or_else(|| config.main.clone()),
            includes_asset_pack: config.includes_asset_pack,
            dependencies: BTreeMap::new(),
            optional_dependencies: BTreeMap::new(),
        }
    }
}
