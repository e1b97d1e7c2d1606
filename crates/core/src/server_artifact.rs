use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// A candidate `Server/HytaleServer.jar` found under the search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBuildArtifact {
    path: PathBuf,
    modified: SystemTime,
}

impl ServerBuildArtifact {
    pub const fn new(path: PathBuf, modified: SystemTime) -> Self {
        Self { path, modified }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Orders by modification time, then by path so equal timestamps still pick a stable winner.
    #[must_use]
    pub fn newer_than(&self, other: &Self) -> Ordering {
        self.modified
            .cmp(&other.modified)
            .then_with(|| self.path.cmp(&other.path))
    }
}
