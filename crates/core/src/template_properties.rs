use std::collections::BTreeMap;

use crate::{BuildProperties, PluginManifest, ProjectConfig, SERVER_VERSION_PROPERTY};

/// Substitutions available to the `manifest.json` resource template.
///
/// Values mirror the generated descriptor so both consumers agree on the server version
/// and metadata. `None` expands to an empty string.
#[must_use]
pub fn template_properties(
    config: &ProjectConfig,
    properties: &BuildProperties,
    server_version: &str,
) -> BTreeMap<&'static str, Option<String>> {
    let manifest = PluginManifest::from_project(config, properties, server_version);
    BTreeMap::from([
        ("plugin_group", Some(manifest.group)),
        ("plugin_maven_group", Some(config.group.clone())),
        ("plugin_name", Some(manifest.name)),
        ("plugin_version", Some(manifest.version)),
        (SERVER_VERSION_PROPERTY, Some(manifest.server_version)),
        ("plugin_description", Some(manifest.description)),
        ("plugin_website", manifest.website),
        ("plugin_main_entrypoint", manifest.main),
        (
            "plugin_author",
            manifest.authors.into_iter().next().map(|author| author.name),
        ),
    ])
}
