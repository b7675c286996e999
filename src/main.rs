use std::{io::Write, path::PathBuf};

use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use working_hours_policy::{compress_to_grouped, read_policy, summarize_policy};

/// Inspect and normalize the day overrides of a working hours policy.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one override per day, as the edit form uses them
    Expand { policy: PathBuf },
    /// Print the overrides grouped by identical settings, as they are saved
    Compress { policy: PathBuf },
    /// Print a readable summary of the policy's schedule
    Summary { policy: PathBuf },
}

fn init_logging() -> Result<(), Error> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;
    Ok(())
}

fn main() -> Result<(), Error> {
    init_logging()?;
    let cli = Cli::parse();

    let json = match &cli.command {
        Command::Expand { policy } => {
            let policy = read_policy(policy)?;
            serde_json::to_string_pretty(&policy.editable_overrides())?
        }
        Command::Compress { policy } => {
            let policy = read_policy(policy)?;
            serde_json::to_string_pretty(&compress_to_grouped(&policy.editable_overrides()))?
        }
        Command::Summary { policy } => {
            let policy = read_policy(policy)?;
            serde_json::to_string_pretty(&summarize_policy(&policy)?)?
        }
    };

    match &cli.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.to_string_lossy()))?;
            file.write_all(json.as_bytes())?;
            info!(path = %path.to_string_lossy(), "wrote day overrides");
        }
        None => println!("{}", json),
    }

    Ok(())
}
