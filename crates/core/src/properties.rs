use anyhow::{Result, anyhow};
use serde::Serialize;
use std::collections::BTreeMap;

/// Gradle-style project properties, looked up the way `findProperty` does.
///
/// Sources are layered by the loader (`gradle.properties`, `ORG_GRADLE_PROJECT_*`, `-P`),
/// later layers overwrite earlier ones through [`BuildProperties::merge`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildProperties {
    values: BTreeMap<String, String>,
}

impl BuildProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses Java `.properties` content.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut properties = Self::new();
        let mut lines = content.lines();
        while let Some(line) = lines.next() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }
            let (key, value) = split_entry(&logical);
            properties.set(unescape(key), unescape(value));
        }
        properties
    }

    /// Parses a `-P key=value` command line override.
    ///
    /// # Errors
    /// Returns error if the argument has no `=` or an empty key.
    pub fn parse_override(arg: &str) -> Result<(String, String)> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid property '{arg}', expected key=value"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(anyhow!("Invalid property '{arg}', key is empty"));
        }
        Ok((key.to_string(), value.to_string()))
    }

    #[must_use]
    pub fn find(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`find`](Self::find) but falls back to `default` when the property is absent.
    #[must_use]
    pub fn find_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.find(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Overlays `other` on top of `self`.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BuildProperties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Self::new();
        for (key, value) in iter {
            properties.set(key, value);
        }
        properties
    }
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let key = &line[..key_end];
    let rest = line[key_end..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    (key, rest.trim_start())
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
