use anyhow::{Context, Result};
use clap::Args;
use hystamp_core::PluginManifest;
use hystamp_utils::display_path;
use std::path::{Path, PathBuf};
use tokio::fs::{create_dir_all, write};

use crate::context::CommandContext;

/// File name of the plugin descriptor inside the JAR.
pub const PLUGIN_MANIFEST_FILE: &str = "manifest.json";

#[derive(Args, Debug)]
#[command(about = "Generate the plugin manifest.json descriptor")]
pub struct ManifestArgs {
    /// Print the descriptor instead of writing it.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Generate the plugin descriptor with the resolved server version
///
/// # Errors
/// Returns error if the descriptor cannot be serialized or written.
pub async fn handle_manifest(context: &CommandContext, args: &ManifestArgs) -> Result<()> {
    let resolved = context.resolve_server_version();
    let manifest = context.plugin_manifest(resolved.version());

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    let path = write_plugin_manifest(&context.output_dir(), &manifest).await?;
    println!(
        "Wrote {} for server version {}",
        display_path(&context.project_dir, &path),
        resolved
    );
    Ok(())
}

/// Writes `manifest` as pretty JSON to `<output_dir>/manifest.json`.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub async fn write_plugin_manifest(
    output_dir: &Path,
    manifest: &PluginManifest,
) -> Result<PathBuf> {
    create_dir_all(output_dir)
        .await
        .context(format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join(PLUGIN_MANIFEST_FILE);
    write(&path, format!("{}\n", serde_json::to_string_pretty(manifest)?))
        .await
        .context(format!("Failed to write {}", path.display()))?;
    tracing::trace!(path = %path.display(), "wrote plugin manifest");
    Ok(path)
}
