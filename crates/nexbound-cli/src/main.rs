use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod bootstrap;
mod command;
mod commands;
mod helper;
mod logging;
mod views;

use bootstrap::AppBootstrap;
use commands::draft::DraftArgs;

#[derive(Parser)]
#[command(name = "nexbound")]
#[command(about = "Nexbound - outbound sales workspace with an AI email writer", long_about = None)]
struct Cli {
    /// Path to config.toml; secret.json is read from the same directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shell (default)
    Repl,
    /// Generate one email draft and print it
    Draft(DraftArgs),
    /// Sign in with the demo account and list campaigns
    Campaigns,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let bootstrap = AppBootstrap::new(cli.config.as_deref()).await?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::run(&bootstrap.app).await?,
        Commands::Draft(args) => commands::draft::run(bootstrap.drafter.as_ref(), args).await?,
        Commands::Campaigns => commands::campaigns::run(&bootstrap.app).await?,
    }

    Ok(())
}
