// ABOUTME: Entry point for the weblift CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use tracing_subscriber::EnvFilter;
use weblift::client::DryRunClient;
use weblift::commands::{self, PlanFormat};
use weblift::config::{self, DeployConfig};
use weblift::error::{Error, Result};
use weblift::output::{Output, OutputMode};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli, mode) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    match cli.command {
        Commands::Init { app, image, force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, app.as_deref(), image.as_deref(), force)
        }
        Commands::Check => {
            let config = discover_config()?;
            let handler = commands::check(&config)?;
            println!("Configuration OK ({handler} runtime)");
            Ok(())
        }
        Commands::Plan { json } => {
            let config = discover_config()?;
            let format = if json {
                PlanFormat::Json
            } else {
                PlanFormat::Yaml
            };
            let rendered = commands::plan(&config, format)?;
            print!("{rendered}");
            Ok(())
        }
        Commands::Deploy { dry_run } => {
            let config = discover_config()?;
            let mut output = Output::new(mode);

            // Real SDK-backed clients plug in behind PlatformClient; the
            // binary itself only ships the dry-run implementation.
            if !dry_run {
                return Err(Error::NoPlatformClient);
            }

            let client = DryRunClient::new();
            commands::deploy(&config, &client, &mut output)?;
            Ok(())
        }
    }
}

fn discover_config() -> Result<DeployConfig> {
    let cwd = env::current_dir()?;
    DeployConfig::discover(&cwd)
}
