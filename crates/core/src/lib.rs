//! # hystamp-core
//!
//! Core types shared by the hystamp crates.
//!
//! Holds the project configuration, the Gradle-style build property bag, the server version
//! model (configured source, discovered artifact, resolved value) and the two descriptors the
//! resolved version ends up in: the plugin `manifest.json` and the JAR `MANIFEST.MF` attributes.

pub mod config;
pub mod jar_attributes;
pub mod plugin_manifest;
pub mod properties;
pub mod resolution;
pub mod server_artifact;
pub mod template_properties;
pub mod version_source;

pub use config::ProjectConfig;
pub use jar_attributes::{JarAttributes, commit_sha_from_env};
pub use plugin_manifest::{PluginAuthor, PluginManifest};
pub use properties::BuildProperties;
pub use resolution::{Resolution, ResolvedVersion};
pub use server_artifact::ServerBuildArtifact;
pub use template_properties::template_properties;
pub use version_source::{SERVER_VERSION_PROPERTY, VersionSource, WILDCARD};
