//! fitness-tracker: workout statistics from sensor packages
//!
//! Reads `(code, readings)` packages from a file, stdin or the command line
//! and prints one summary per training.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitness_tracker::config::OutputFormat;
use fitness_tracker::domain::{demo_packages, Package};
use fitness_tracker::services::{process_packages, PackageFormat, PackageReader, ReportWriter};
use fitness_tracker::TrackerConfig;

#[derive(Parser, Debug)]
#[command(name = "fitness-tracker", version, about = "Workout statistics from sensor packages")]
struct Cli {
    #[arg(
        long,
        short,
        global = true,
        help = "Packages file (text or .json), or - for stdin"
    )]
    input: Option<PathBuf>,
    #[arg(long, global = true, help = "Treat the input as JSON regardless of extension")]
    json_input: bool,
    #[arg(long, global = true, value_enum, help = "Report format")]
    format: Option<OutputFormat>,
    #[arg(long, global = true, help = "Pretty-print JSON reports")]
    pretty: bool,
    #[arg(long, global = true, help = "Configuration file to use instead of the user config")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a single package, e.g. `decode RUN 15000 1 75`
    Decode {
        code: String,
        #[arg(allow_negative_numbers = true)]
        readings: Vec<f64>,
    },
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = TrackerConfig::load(Some(project_root.as_path()), cli.config.as_deref())
        .context("failed to load configuration")?;

    init_logging(&config.logging.level);
    tracing::debug!("Configuration: {:?}", config);

    let packages = match cli.command {
        Some(Commands::Decode { code, readings }) => vec![Package::new(code, readings)],
        None => match cli
            .input
            .or_else(|| config.input.packages.as_ref().map(|p| project_root.join(p)))
        {
            Some(path) => {
                let format = if cli.json_input {
                    PackageFormat::Json
                } else {
                    PackageFormat::from_path(&path)
                };
                PackageReader::new(format)
                    .read_path(&path)
                    .with_context(|| format!("failed to read packages from {}", path.display()))?
            }
            None => {
                tracing::info!("No input given, using demo packages");
                demo_packages()
            }
        },
    };

    let outcomes = process_packages(&packages);
    let mut summaries = Vec::with_capacity(outcomes.len());
    let mut rejected = 0;
    for outcome in outcomes {
        match outcome.result {
            Ok(info) => summaries.push(info),
            Err(e) => {
                rejected += 1;
                eprintln!("package #{} ({}): {}", outcome.index + 1, outcome.code, e);
            }
        }
    }

    let writer = ReportWriter::new(
        cli.format.unwrap_or(config.output.format),
        cli.pretty || config.output.pretty,
    );
    writer
        .write(&mut io::stdout().lock(), &summaries)
        .context("failed to write report")?;

    if rejected > 0 {
        bail!("{} of {} packages rejected", rejected, packages.len());
    }
    Ok(())
}
