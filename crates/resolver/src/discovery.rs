use glob::{MatchOptions, Pattern};
use hystamp_core::ServerBuildArtifact;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use zip::{ZipArchive, result::ZipError};

use crate::{DiscoveryError, MANIFEST_PATH, Manifest};

/// Relative location of a server build inside the search root, at any depth.
pub const SERVER_JAR_PATTERN: &str = "**/Server/HytaleServer.jar";

const VERSION_ATTRIBUTE: &str = "Implementation-Version";

/// Finds a local server build and reads the version it was built as.
///
/// The resolver only talks to this trait, so the explicit-version path can be shown to
/// never touch discovery.
pub trait ArtifactDiscovery {
    fn find_candidates(&self, search_root: &Path) -> Vec<ServerBuildArtifact>;

    fn read_version(&self, artifact: &ServerBuildArtifact) -> Result<String, DiscoveryError>;

    /// Runs the whole pipeline: candidates, newest pick, attribute read.
    fn discover(&self, search_root: &Path) -> Result<(String, PathBuf), DiscoveryError> {
        let newest = pick_newest(self.find_candidates(search_root))
            .ok_or_else(|| DiscoveryError::NoCandidate(search_root.to_path_buf()))?;
        let version = self.read_version(&newest)?;
        Ok((version, newest.path().to_path_buf()))
    }
}

/// Filesystem discovery of `Server/HytaleServer.jar` archives.
#[derive(Debug, Default, Clone, Copy)]
pub struct JarDiscovery;

impl ArtifactDiscovery for JarDiscovery {
    fn find_candidates(&self, search_root: &Path) -> Vec<ServerBuildArtifact> {
        find_candidates(search_root)
    }

    fn read_version(&self, artifact: &ServerBuildArtifact) -> Result<String, DiscoveryError> {
        read_implementation_version(artifact.path())
    }
}

/// Lists every `**/Server/HytaleServer.jar` file under `search_root` with its modification time.
///
/// A missing root, unreadable directories and entries without a readable mtime are skipped.
pub fn find_candidates(search_root: &Path) -> Vec<ServerBuildArtifact> {
    let Some(root) = search_root.to_str() else {
        tracing::debug!(root = %search_root.display(), "search root is not valid UTF-8");
        return Vec::new();
    };
    if !search_root.is_dir() {
        tracing::debug!(root = %search_root.display(), "search root does not exist");
        return Vec::new();
    }

    let pattern = Path::new(&Pattern::escape(root)).join(SERVER_JAR_PATTERN);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let Ok(paths) = glob::glob_with(&pattern.to_string_lossy(), options) else {
        tracing::debug!(pattern = %pattern.display(), "invalid search pattern");
        return Vec::new();
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable path");
                None
            }
        })
        .filter(|path| path.is_file())
        .filter_map(|path| match path.metadata().and_then(|m| m.modified()) {
            Ok(modified) => Some(ServerBuildArtifact::new(path, modified)),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "no modification time");
                None
            }
        })
        .collect()
}

/// The most recently modified candidate, ties going to the greatest path.
pub fn pick_newest(candidates: Vec<ServerBuildArtifact>) -> Option<ServerBuildArtifact> {
    candidates.into_iter().max_by(|a, b| a.newer_than(b))
}

/// Opens `jar` and returns the `Implementation-Version` of its main manifest section.
///
/// # Errors
/// Returns the reason the attribute could not be read. A blank value counts as missing.
pub fn read_implementation_version(jar: &Path) -> Result<String, DiscoveryError> {
    let file = File::open(jar).map_err(|source| DiscoveryError::Io {
        path: jar.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| DiscoveryError::Archive {
        path: jar.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    match archive.by_name(MANIFEST_PATH) {
        Ok(mut entry) => {
            entry
                .read_to_string(&mut content)
                .map_err(|source| DiscoveryError::Io {
                    path: jar.to_path_buf(),
                    source,
                })?;
        }
        Err(ZipError::FileNotFound) => {
            return Err(DiscoveryError::MissingManifest(jar.to_path_buf()));
        }
        Err(source) => {
            return Err(DiscoveryError::Archive {
                path: jar.to_path_buf(),
                source,
            });
        }
    }

    let manifest =
        Manifest::parse(&content).map_err(|source| DiscoveryError::MalformedManifest {
            path: jar.to_path_buf(),
            source,
        })?;
    manifest
        .get(VERSION_ATTRIBUTE)
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DiscoveryError::MissingAttribute {
            path: jar.to_path_buf(),
            attribute: VERSION_ATTRIBUTE,
        })
}
