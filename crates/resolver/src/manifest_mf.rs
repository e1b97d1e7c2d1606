use crate::error::ManifestError;

/// Location of the manifest inside a JAR.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

const MANIFEST_VERSION: &str = "Manifest-Version";
const MAX_LINE_BYTES: usize = 72;

/// Main section of a JAR manifest.
///
/// Attribute names compare case-insensitively; insertion order is kept for writing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    attributes: Vec<(String, String)>,
}

impl Manifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the main section, stopping at the first blank line.
    ///
    /// # Errors
    /// Returns error if a line has no `:` separator, an empty name, or a continuation
    /// line has nothing to continue.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let mut manifest = Self::new();

        for (index, line) in normalized.split('\n').enumerate() {
            let line_number = index + 1;
            if line.is_empty() {
                break;
            }
            if let Some(continuation) = line.strip_prefix(' ') {
                let (_, value) = manifest
                    .attributes
                    .last_mut()
                    .ok_or(ManifestError::OrphanContinuation(line_number))?;
                value.push_str(continuation);
                continue;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or(ManifestError::MissingSeparator(line_number))?;
            let name = name.trim_end();
            if name.is_empty() {
                return Err(ManifestError::EmptyName(line_number));
            }
            let value = value.strip_prefix(' ').unwrap_or(value);
            manifest
                .attributes
                .push((name.to_string(), value.to_string()));
        }
        Ok(manifest)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing an existing one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Serializes the manifest: `Manifest-Version` first, CRLF line endings, lines wrapped
    /// at 72 bytes and a trailing blank line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let version = self.get(MANIFEST_VERSION).unwrap_or("1.0");
        let mut out = String::new();
        write_attribute(&mut out, MANIFEST_VERSION, version);
        for (name, value) in &self.attributes {
            if name.eq_ignore_ascii_case(MANIFEST_VERSION) {
                continue;
            }
            write_attribute(&mut out, name, value);
        }
        out.push_str("\r\n");
        out
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    let line = format!("{name}: {value}");
    let mut rest = line.as_str();
    let mut limit = MAX_LINE_BYTES;
    loop {
        if rest.len() <= limit {
            out.push_str(rest);
            out.push_str("\r\n");
            return;
        }
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        out.push_str(&rest[..split]);
        out.push_str("\r\n ");
        rest = &rest[split..];
        // the leading space of a continuation line counts toward the limit
        limit = MAX_LINE_BYTES - 1;
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Manifest {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut manifest = Self::new();
        for (name, value) in iter {
            manifest.insert(name, value);
        }
        manifest
    }
}
