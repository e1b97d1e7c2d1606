/// Property holding the operator supplied server version.
pub const SERVER_VERSION_PROPERTY: &str = "server_version";

/// Server version meaning "any / unspecified".
pub const WILDCARD: &str = "*";

/// Where the server version comes from before any discovery happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Operator supplied version, kept exactly as configured
    Explicit(String),
    /// Absent, blank or the wildcard sentinel
    Unspecified,
}

impl VersionSource {
    /// Classifies a configured value. Blank and `*` (after trimming) are unspecified,
    /// anything else is returned verbatim.
    #[must_use]
    pub fn from_configured(configured: Option<&str>) -> Self {
        match configured {
            Some(value) if !value.trim().is_empty() && value.trim() != WILDCARD => {
                Self::Explicit(value.to_string())
            }
            _ => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}
