use hystamp_core::{ResolvedVersion, VersionSource};
use std::path::Path;

use crate::{ArtifactDiscovery, JarDiscovery};

/// Resolves the server version a plugin manifest declares.
///
/// Tiers, first match wins:
/// 1. a configured value that is not blank and not `*`, with no filesystem access
/// 2. `Implementation-Version` of the newest `**/Server/HytaleServer.jar` under the search root
/// 3. the configured value when it is non-empty
/// 4. `*`
#[derive(Debug, Default, Clone)]
pub struct Resolver<D = JarDiscovery> {
    discovery: D,
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ArtifactDiscovery> Resolver<D> {
    pub const fn with_discovery(discovery: D) -> Self {
        Self { discovery }
    }

    /// Never fails: discovery problems are logged and fall through to the next tier.
    pub fn resolve(&self, configured: Option<&str>, search_root: &Path) -> ResolvedVersion {
        if let VersionSource::Explicit(version) = VersionSource::from_configured(configured) {
            tracing::debug!(%version, "using configured server version");
            return ResolvedVersion::explicit(version);
        }

        match self.discovery.discover(search_root) {
            Ok((version, artifact)) => {
                tracing::debug!(
                    %version,
                    artifact = %artifact.display(),
                    "discovered server version"
                );
                ResolvedVersion::discovered(version, artifact)
            }
            Err(reason) => {
                let resolved = ResolvedVersion::fallback(configured);
                tracing::debug!(
                    %reason,
                    version = resolved.version(),
                    "server version discovery failed, falling back"
                );
                resolved
            }
        }
    }
}

/// Resolves with filesystem discovery and returns the bare version string.
pub fn resolve(configured: Option<&str>, search_root: &Path) -> String {
    Resolver::new().resolve(configured, search_root).into_version()
}
