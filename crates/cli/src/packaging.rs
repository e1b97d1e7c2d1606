use anyhow::{Context, Result};
use hystamp_core::JarAttributes;
use hystamp_resolver::{MANIFEST_PATH, Manifest};
use hystamp_utils::collect_files;
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Zips every file under `content_dir` into `jar_path`, `META-INF/MANIFEST.MF` first.
///
/// Entries are deflated and added in sorted order so identical inputs give identical JARs.
/// A `META-INF/MANIFEST.MF` inside `content_dir` is skipped in favour of the generated one.
/// Returns the number of entries written.
///
/// # Errors
/// Returns error if a file cannot be read or the archive cannot be written.
pub fn write_plugin_jar(
    jar_path: &Path,
    content_dir: &Path,
    attributes: &JarAttributes,
) -> Result<usize> {
    let files = collect_files(content_dir)?;
    if let Some(parent) = jar_path.parent() {
        fs::create_dir_all(parent).context(format!("Failed to create {}", parent.display()))?;
    }
    let file =
        File::create(jar_path).context(format!("Failed to create {}", jar_path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let manifest = attributes.iter().collect::<Manifest>();
    writer.start_file(MANIFEST_PATH, options)?;
    writer.write_all(manifest.to_text().as_bytes())?;
    let mut entries = 1;

    for relative in files {
        let name = entry_name(&relative);
        if name.eq_ignore_ascii_case(MANIFEST_PATH) {
            tracing::warn!(
                resource = %name,
                "skipping resource manifest, the JAR manifest is generated"
            );
            continue;
        }
        let content = fs::read(content_dir.join(&relative))
            .context(format!("Failed to read {}", relative.display()))?;
        writer.start_file(name.as_str(), options)?;
        writer.write_all(&content)?;
        tracing::trace!(entry = %name, "added jar entry");
        entries += 1;
    }

    writer.finish()?;
    Ok(entries)
}

/// Archive entry name, always `/` separated.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
