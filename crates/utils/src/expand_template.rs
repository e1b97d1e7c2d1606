use anyhow::{Result, anyhow};
use regex::Regex;
use std::{collections::BTreeMap, sync::LazyLock};

static TEMPLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\\$|\$\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("hardcoded regex must compile")
});

/// Expands `${key}` and `$key` references in the style of Gradle's `expand`.
///
/// `\$` produces a literal `$`. A known key without a value expands to an empty string.
///
/// # Errors
/// Returns error if the template references a key that is not in `properties`.
pub fn expand_template(
    template: &str,
    properties: &BTreeMap<&str, Option<String>>,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in TEMPLATE_PATTERN.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let Some(key) = caps.get(1).or_else(|| caps.get(2)) else {
            out.push('$');
            continue;
        };
        let value = properties
            .get(key.as_str())
            .ok_or_else(|| anyhow!("Unknown template property '{}'", key.as_str()))?;
        out.push_str(value.as_deref().unwrap_or_default());
    }
    out.push_str(&template[last..]);
    Ok(out)
}
