use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective hystamp configuration and build properties")]
pub struct ConfigArgs {}

/// Display the project configuration and the layered build properties
///
/// # Errors
/// Returns error if serializing the configuration fails.
pub fn handle_config(context: &CommandContext, _args: &ConfigArgs) -> Result<()> {
    let effective = serde_json::json!({
        "config": context.config,
        "properties": context.properties,
    });
    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(())
}
