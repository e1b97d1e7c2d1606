use colored::Colorize;
use serde::Serialize;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Which fallback tier produced a resolved server version.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Resolution {
    /// The configured value was used as-is
    Explicit,
    /// Read from the newest local server JAR
    Discovered,
    /// Discovery failed, the (blank or wildcard) configured value was kept
    Configured,
    /// Nothing configured and nothing discovered
    Wildcard,
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Explicit => "explicit".green().bold(),
                Self::Discovered => "discovered".cyan().bold(),
                Self::Configured => "configured".yellow().bold(),
                Self::Wildcard => "wildcard".red().bold(),
            }
        )
    }
}

/// The server version written into the plugin manifest.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersion {
    version: String,
    resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact: Option<PathBuf>,
}

impl ResolvedVersion {
    pub fn explicit(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            resolution: Resolution::Explicit,
            artifact: None,
        }
    }

    pub fn discovered(version: impl Into<String>, artifact: PathBuf) -> Self {
        Self {
            version: version.into(),
            resolution: Resolution::Discovered,
            artifact: Some(artifact),
        }
    }

    /// Last tier: the configured value when it is non-empty, otherwise the wildcard.
    #[must_use]
    pub fn fallback(configured: Option<&str>) -> Self {
        match configured {
            Some(value) if !value.is_empty() => Self {
                version: value.to_string(),
                resolution: Resolution::Configured,
                artifact: None,
            },
            _ => Self {
                version: crate::WILDCARD.to_string(),
                resolution: Resolution::Wildcard,
                artifact: None,
            },
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The server JAR the version was read from, if any.
    #[must_use]
    pub fn artifact(&self) -> Option<&Path> {
        self.artifact.as_deref()
    }

    #[must_use]
    pub fn into_version(self) -> String {
        self.version
    }
}

impl Display for ResolvedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.version.bold(), self.resolution)
    }
}
