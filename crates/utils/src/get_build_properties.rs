use anyhow::{Context, Result};
use hystamp_core::BuildProperties;
use std::path::Path;
use tokio::fs::read_to_string;

/// Prefix of environment variables that Gradle exposes as project properties.
pub const GRADLE_ENV_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// Assembles the project properties, later sources overriding earlier ones:
/// `gradle.properties`, `ORG_GRADLE_PROJECT_*` variables, then `-P key=value` overrides.
///
/// # Errors
/// Returns error if `gradle.properties` exists but cannot be read, or an override is malformed.
pub async fn get_build_properties<I>(
    project_dir: &Path,
    env: I,
    overrides: &[String],
) -> Result<BuildProperties>
where
    I: IntoIterator<Item = (String, String)>,
{
    let properties_file = project_dir.join("gradle.properties");
    let mut properties = if properties_file.is_file() {
        let content = read_to_string(&properties_file)
            .await
            .context(format!("Failed to read {}", properties_file.display()))?;
        BuildProperties::parse(&content)
    } else {
        BuildProperties::new()
    };

    properties.merge(gradle_env_properties(env));

    let overrides = overrides
        .iter()
        .map(|arg| BuildProperties::parse_override(arg))
        .collect::<Result<BuildProperties>>()?;
    properties.merge(overrides);

    Ok(properties)
}

/// Picks the `ORG_GRADLE_PROJECT_<key>` variables out of an environment listing.
pub fn gradle_env_properties<I>(env: I) -> BuildProperties
where
    I: IntoIterator<Item = (String, String)>,
{
    env.into_iter()
        .filter_map(|(name, value)| {
            name.strip_prefix(GRADLE_ENV_PREFIX)
                .filter(|key| !key.is_empty())
                .map(|key| (key.to_string(), value))
        })
        .collect()
}
