//! exercism - submit solutions to Exercism
//!
//! CLI binary for uploading exercise solutions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::GlobalOptions;
use cli::style::Stylize;

#[derive(Parser)]
#[command(name = "exercism")]
#[command(about = "A command-line interface for Exercism")]
#[command(version)]
struct Cli {
    /// Dump HTTP requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show the API token unredacted in verbose output
    #[arg(long, global = true)]
    unmask_token: bool,

    /// HTTP timeout in seconds (0 disables the timeout)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit your solution to an exercise
    #[command(visible_alias = "s")]
    Submit {
        /// Files to submit
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let options = GlobalOptions {
        verbose: cli.verbose,
        unmask_token: cli.unmask_token,
        timeout: cli.timeout,
    };

    match cli.command {
        Commands::Submit { files } => cli::run_submit(&files, &options).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            anstream::eprintln!("{}: {err}", "error".error());
            ExitCode::FAILURE
        }
    }
}
