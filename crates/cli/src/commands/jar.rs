use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use hystamp_utils::display_path;
use std::path::{Path, PathBuf};
use tokio::fs::remove_dir_all;

use crate::{
    commands::{manifest::write_plugin_manifest, resources::process_resources},
    context::CommandContext,
    packaging::write_plugin_jar,
};

#[derive(Args, Debug, Default)]
#[command(about = "Package the plugin JAR stamped with the resolved server version")]
pub struct JarArgs {
    /// Where to write the JAR, defaults to build/libs/<name>-<version>.jar
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Build the plugin JAR
///
/// The output directory is cleared, then filled with the generated `manifest.json` and the
/// processed resources, and finally zipped behind a generated `META-INF/MANIFEST.MF`.
/// The server version is resolved once and shared by both descriptor and resources.
///
/// # Errors
/// Returns error if the output directory overlaps the project, or any step of the build fails.
pub async fn handle_jar(context: &CommandContext, args: &JarArgs) -> Result<()> {
    let output_dir = context.output_dir();
    let jar_path = match &args.output {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => context.project_dir.join(path),
        None => context.default_jar_path(),
    };
    check_output_dir(context, &output_dir, &jar_path)?;

    let resolved = context.resolve_server_version();
    tracing::debug!(server_version = %resolved.version(), "building plugin jar");

    if output_dir.exists() {
        remove_dir_all(&output_dir)
            .await
            .context(format!("Failed to clear {}", output_dir.display()))?;
    }
    // The descriptor goes in first so a templated resources manifest.json replaces it.
    write_plugin_manifest(&output_dir, &context.plugin_manifest(resolved.version())).await?;
    process_resources(context, resolved.version(), false).await?;

    let entries = write_plugin_jar(&jar_path, &output_dir, &context.jar_attributes())?;
    println!(
        "Built {} ({} entries) for server version {}",
        display_path(&context.project_dir, &jar_path).bright_green(),
        entries,
        resolved
    );
    Ok(())
}

/// The output directory is wiped on every build, so it must not hold anything we read or write.
fn check_output_dir(context: &CommandContext, output_dir: &Path, jar_path: &Path) -> Result<()> {
    let resources_dir = context.resources_dir();
    let search_root = context.search_root();
    if output_dir.starts_with(&resources_dir) {
        bail!(
            "Output directory {} is inside the resources directory {}",
            output_dir.display(),
            resources_dir.display()
        );
    }
    let guarded = [
        ("project directory", context.project_dir.as_path()),
        ("resources directory", resources_dir.as_path()),
        ("search root", search_root.as_path()),
        ("JAR", jar_path),
    ];
    for (what, path) in guarded {
        if path.starts_with(output_dir) {
            bail!(
                "Output directory {} contains the {} {}",
                output_dir.display(),
                what,
                path.display()
            );
        }
    }
    Ok(())
}
