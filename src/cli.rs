// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weblift")]
#[command(about = "Deploy web applications to cloud app-hosting platforms")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new weblift.yml configuration file
    Init {
        /// App name to write into the template
        #[arg(long)]
        app: Option<String>,

        /// Container image to write into the template
        #[arg(long)]
        image: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration without deploying
    Check,

    /// Show the deployment request that would be committed
    Plan {
        /// Render as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Deploy the app to the hosting platform
    Deploy {
        /// Validate and record the request without committing it
        #[arg(long)]
        dry_run: bool,
    },
}
