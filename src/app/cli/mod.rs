//! CLI Adapter.

mod generate;
mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "coverletter")]
#[command(version)]
#[command(
    about = "Interview-driven cover letter generator backed by Gemini",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./coverletter.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive cover letter session (default)
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Write the default letter template
    #[clap(visible_alias = "it")]
    InitTemplate {
        /// Destination (defaults to the configured template path)
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
        /// Overwrite an existing template
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing() {
    let _ = Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<i32, AppError> = match cli.command {
        None => generate::run_generate(cli.config, generate::GenerateArgs::default()),
        Some(Commands::Generate(args)) => generate::run_generate(cli.config, args),
        Some(Commands::InitTemplate { template, force }) => {
            template::run_init_template(cli.config, template, force).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
