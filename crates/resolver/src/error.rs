use std::path::PathBuf;

use thiserror::Error;

/// Why a local server JAR could not supply a version.
///
/// Never surfaced to the caller of the resolver, only logged before falling back.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no Server/HytaleServer.jar found under {}", .0.display())]
    NoCandidate(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not a readable archive: {source}", .path.display())]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    #[error("{} has no {}", .0.display(), crate::MANIFEST_PATH)]
    MissingManifest(PathBuf),
    #[error("{} has a malformed manifest: {source}", .path.display())]
    MalformedManifest {
        path: PathBuf,
        source: ManifestError,
    },
    #[error("{} manifest has no {attribute} attribute", .path.display())]
    MissingAttribute {
        path: PathBuf,
        attribute: &'static str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("line {0} has no ':' separator")]
    MissingSeparator(usize),
    #[error("line {0} has an empty attribute name")]
    EmptyName(usize),
    #[error("line {0} continues a value that does not exist")]
    OrphanContinuation(usize),
}
