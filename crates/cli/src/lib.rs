use anyhow::Result;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{
        ConfigArgs, JarArgs, ManifestArgs, ResolveArgs, ResourcesArgs, handle_config, handle_jar,
        handle_manifest, handle_resolve, handle_resources,
    },
    logging::init_logging,
};
pub mod commands;
pub mod context;
mod logging;
pub mod options;
mod packaging;

pub use context::CommandContext;

#[derive(Parser, Debug)]
#[command(
    name = "hystamp",
    author,
    version,
    about = "Stamp Hytale plugins with the server version they are built against",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Plugin project directory, defaults to the current directory
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Build property override, same as Gradle's -P
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE", global = true)]
    properties: Vec<String>,

    /// Log resolution details to stderr
    #[arg(short, long, default_value = "false", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Resolve(ResolveArgs),
    Manifest(ManifestArgs),
    Resources(ResourcesArgs),
    Jar(JarArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_logging(cli.verbose);

    let context = CommandContext::new(cli.project_dir.as_deref(), &cli.properties).await?;
    match cli.command {
        Some(Commands::Resolve(args)) => handle_resolve(&context, &args)?,
        Some(Commands::Manifest(args)) => handle_manifest(&context, &args).await?,
        Some(Commands::Resources(args)) => handle_resources(&context, &args).await?,
        Some(Commands::Jar(args)) => handle_jar(&context, &args).await?,
        Some(Commands::Config(args)) => handle_config(&context, &args)?,
        None => handle_resolve(&context, &ResolveArgs::default())?,
    }
    Ok(())
}
