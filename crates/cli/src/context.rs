use anyhow::Result;
use hystamp_core::{
    BuildProperties, JarAttributes, PluginManifest, ProjectConfig, ResolvedVersion,
    SERVER_VERSION_PROPERTY, commit_sha_from_env, template_properties,
};
use hystamp_resolver::Resolver;
use hystamp_utils::{get_build_properties, get_project_config};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Everything a command needs to know about the plugin project it runs against.
pub struct CommandContext {
    pub project_dir: PathBuf,
    pub config: ProjectConfig,
    pub properties: BuildProperties,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the config, `gradle.properties` or a `-P` override cannot be loaded.
    pub async fn new(project_dir: Option<&Path>, overrides: &[String]) -> Result<Self> {
        let project_dir = match project_dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::current_dir()?,
        };
        let config = get_project_config(&project_dir).await?;
        let properties = get_build_properties(&project_dir, std::env::vars(), overrides).await?;

        Ok(Self {
            project_dir,
            config,
            properties,
        })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    #[must_use]
    pub fn search_root(&self) -> PathBuf {
        self.project_dir.join(&self.config.search_root)
    }

    #[must_use]
    pub fn resources_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.resources_dir)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.output_dir)
    }

    /// Default location of the packaged plugin, `build/libs/<name>-<version>.jar`.
    #[must_use]
    pub fn default_jar_path(&self) -> PathBuf {
        self.project_dir.join("build").join("libs").join(format!(
            "{}-{}.jar",
            self.config.name(),
            self.config.version
        ))
    }

    /// Resolves the server version from the `server_version` property and the search root.
    #[must_use]
    pub fn resolve_server_version(&self) -> ResolvedVersion {
        Resolver::new().resolve(
            self.properties.find(SERVER_VERSION_PROPERTY),
            &self.search_root(),
        )
    }

    #[must_use]
    pub fn plugin_manifest(&self, server_version: &str) -> PluginManifest {
        PluginManifest::from_project(&self.config, &self.properties, server_version)
    }

    #[must_use]
    pub fn template_properties(
        &self,
        server_version: &str,
    ) -> BTreeMap<&'static str, Option<String>> {
        template_properties(&self.config, &self.properties, server_version)
    }

    #[must_use]
    pub fn jar_attributes(&self) -> JarAttributes {
        JarAttributes::new(
            self.config.name(),
            self.config.name(),
            &self.config.version,
            commit_sha_from_env().as_deref(),
        )
    }
}
