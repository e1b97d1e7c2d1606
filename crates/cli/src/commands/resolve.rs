use anyhow::Result;
use clap::Args;
use hystamp_utils::display_path;

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug, Default)]
#[command(about = "Resolve the Hytale server version the plugin targets")]
pub struct ResolveArgs {
    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Print the resolved server version and where it came from
///
/// # Errors
/// Returns error if the result cannot be serialized.
pub fn handle_resolve(context: &CommandContext, args: &ResolveArgs) -> Result<()> {
    let resolved = context.resolve_server_version();
    let stdout_msg = match resolved.artifact() {
        Some(artifact) => format!(
            "Server version: {} from {}",
            resolved,
            display_path(&context.project_dir, artifact)
        ),
        None => format!("Server version: {}", resolved),
    };
    args.format
        .print(&stdout_msg, &serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
