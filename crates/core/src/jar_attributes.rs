/// Environment variable carrying the short commit hash appended to `Implementation-Version`.
pub const COMMIT_SHA_ENV: &str = "COMMIT_SHA_SHORT";

/// Standard descriptive attributes stamped into the plugin JAR's `MANIFEST.MF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarAttributes {
    entries: Vec<(String, String)>,
}

impl JarAttributes {
    /// `Implementation-Version` becomes `{version}-{commit}` when a non-blank commit is given.
    /// The commit is appended as-is.
    #[must_use]
    pub fn new(root_name: &str, project_name: &str, version: &str, commit: Option<&str>) -> Self {
        let implementation_version = match commit.filter(|c| !c.trim().is_empty()) {
            Some(commit) => format!("{version}-{commit}"),
            None => version.to_string(),
        };
        Self {
            entries: vec![
                ("Specification-Title".to_string(), root_name.to_string()),
                ("Specification-Version".to_string(), version.to_string()),
                ("Implementation-Title".to_string(), project_name.to_string()),
                ("Implementation-Version".to_string(), implementation_version),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Reads the short commit hash from the environment, blank counts as unset.
#[must_use]
pub fn commit_sha_from_env() -> Option<String> {
    std::env::var(COMMIT_SHA_ENV)
        .ok()
        .filter(|sha| !sha.trim().is_empty())
}
