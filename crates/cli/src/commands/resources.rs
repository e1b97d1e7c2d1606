use anyhow::{Context, Result};
use clap::Args;
use hystamp_utils::{collect_files, display_path, expand_template};
use std::path::{Path, PathBuf};
use tokio::fs::{copy, create_dir_all, read_to_string, write};

use crate::{commands::manifest::PLUGIN_MANIFEST_FILE, context::CommandContext};

#[derive(Args, Debug)]
#[command(about = "Copy resources into the output directory, expanding manifest.json")]
pub struct ResourcesArgs {
    /// If true, only validate the template, do not write anything.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Process plugin resources
///
/// # Errors
/// Returns error if a resource cannot be read, expanded or written.
pub async fn handle_resources(context: &CommandContext, args: &ResourcesArgs) -> Result<()> {
    let resolved = context.resolve_server_version();
    let resources_dir = context.resources_dir();
    let processed = process_resources(context, resolved.version(), args.dry_run).await?;

    if processed.is_empty() {
        println!(
            "No resources found in {}",
            display_path(&context.project_dir, &resources_dir)
        );
        return Ok(());
    }

    println!(
        "Processed {} resources into {} for server version {}",
        processed.len(),
        display_path(&context.project_dir, &context.output_dir()),
        resolved
    );
    if args.dry_run {
        println!("Dry run, no files were written");
    }
    Ok(())
}

/// Copies every file of the resources directory into the output directory.
///
/// The top-level `manifest.json` is expanded with the template properties, everything else
/// is copied byte for byte. Returns the processed paths, relative to the resources directory.
///
/// # Errors
/// Returns error if a file cannot be read or written, or the template references an unknown key.
pub async fn process_resources(
    context: &CommandContext,
    server_version: &str,
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    let resources_dir = context.resources_dir();
    let output_dir = context.output_dir();
    let files = collect_files(&resources_dir)?;
    let properties = context.template_properties(server_version);

    for relative in &files {
        let source = resources_dir.join(relative);
        let target = output_dir.join(relative);

        if is_templated(relative) {
            let template = read_to_string(&source)
                .await
                .context(format!("Failed to read {}", source.display()))?;
            let expanded = expand_template(&template, &properties)
                .context(format!("Failed to expand {}", source.display()))?;
            if !dry_run {
                ensure_parent(&target).await?;
                write(&target, expanded)
                    .await
                    .context(format!("Failed to write {}", target.display()))?;
            }
        } else if !dry_run {
            ensure_parent(&target).await?;
            copy(&source, &target)
                .await
                .context(format!("Failed to copy {}", source.display()))?;
        }
        tracing::trace!(resource = %relative.display(), "processed resource");
    }
    Ok(files)
}

fn is_templated(relative: &Path) -> bool {
    relative == Path::new(PLUGIN_MANIFEST_FILE)
}

async fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .await
            .context(format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    async fn context_with_resources(project_dir: &Path, manifest: &str) -> CommandContext {
        let resources = project_dir.join("src/main/resources");
        fs::create_dir_all(resources.join("Server/Item")).unwrap();
        fs::write(resources.join("manifest.json"), manifest).unwrap();
        fs::write(resources.join("Server/Item/tower_key.json"), "{\"Id\": \"$keep\"}").unwrap();
        fs::write(resources.join("Server/manifest.json"), "${untouched}").unwrap();
        CommandContext::new(Some(project_dir), &["plugin_author=Ralkage".to_string()])
            .await
            .unwrap()
    }

    #[test]
    fn test_is_templated() {
        assert!(is_templated(Path::new("manifest.json")));
        assert!(!is_templated(Path::new("Server/manifest.json")));
        assert!(!is_templated(Path::new("manifest.json.bak")));
    }

    #[tokio::test]
    async fn test_process_resources() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("BattleTowers");
        let context = context_with_resources(
            &project_dir,
            r#"{"Name": "${plugin_name}", "ServerVersion": "${server_version}", "Author": "$plugin_author"}"#,
        )
        .await;

        let processed = process_resources(&context, "1.4.2", false).await.unwrap();
        assert_eq!(processed.len(), 3);

        let output = project_dir.join("build/hystamp");
        assert_eq!(
            fs::read_to_string(output.join("manifest.json")).unwrap(),
            r#"{"Name": "BattleTowers", "ServerVersion": "1.4.2", "Author": "Ralkage"}"#
        );
        assert_eq!(
            fs::read_to_string(output.join("Server/Item/tower_key.json")).unwrap(),
            "{\"Id\": \"$keep\"}"
        );
        assert_eq!(
            fs::read_to_string(output.join("Server/manifest.json")).unwrap(),
            "${untouched}"
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_process_resources_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("BattleTowers");
        let context = context_with_resources(&project_dir, "${server_version}").await;

        let processed = process_resources(&context, "*", true).await.unwrap();
        assert_eq!(processed.len(), 3);
        assert!(!project_dir.join("build/hystamp").exists());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_process_resources_unknown_property() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("BattleTowers");
        let context = context_with_resources(&project_dir, "${plugin_color}").await;

        let err = process_resources(&context, "*", true).await.unwrap_err();
        assert!(format!("{:#}", err).contains("plugin_color"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_process_resources_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::new(Some(temp_dir.path()), &[]).await.unwrap();
        assert!(
            process_resources(&context, "*", false)
                .await
                .unwrap()
                .is_empty()
        );
        temp_dir.close().unwrap();
    }
}
