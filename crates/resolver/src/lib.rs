//! # hystamp-resolver
//!
//! Resolves the Hytale server version a plugin declares.
//!
//! A configured version wins outright. When it is blank or the `*` wildcard, the newest
//! `Server/HytaleServer.jar` under the search root is opened and its `Implementation-Version`
//! manifest attribute is used instead. Discovery never fails the build: every problem degrades
//! to the configured value and finally to `*`.

pub mod discovery;
pub mod error;
pub mod manifest_mf;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use discovery::{
    ArtifactDiscovery, JarDiscovery, SERVER_JAR_PATTERN, find_candidates, pick_newest,
    read_implementation_version,
};
pub use error::{DiscoveryError, ManifestError};
pub use manifest_mf::{MANIFEST_PATH, Manifest};
pub use resolver::{Resolver, resolve};
