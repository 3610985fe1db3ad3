use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::{handle_summary, handle_threat_city, handle_threat_quake, handle_top};
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Earthquake catalog utilities")]
struct Cli {
    /// Override the catalog file path.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every event and print the per-region summary.
    Summary,
    /// List the strongest events in descending magnitude order.
    Top {
        /// Maximum number of events to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Threat-radius queries for a selected earthquake or city.
    Threat {
        #[command(subcommand)]
        selection: ThreatSelection,
    },
}

#[derive(Subcommand, Debug)]
enum ThreatSelection {
    /// Cities and airports inside an earthquake's threat radius.
    Quake {
        /// Event title as it appears in the catalog.
        title: String,
    },
    /// Earthquakes whose threat radius covers a city.
    City {
        /// City name as it appears in the catalog.
        name: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Summary => handle_summary(cli.catalog.as_deref(), cli.format),
        Command::Top { limit } => handle_top(cli.catalog.as_deref(), cli.format, limit),
        Command::Threat { selection } => match selection {
            ThreatSelection::Quake { title } => {
                handle_threat_quake(cli.catalog.as_deref(), cli.format, &title)
            }
            ThreatSelection::City { name } => {
                handle_threat_city(cli.catalog.as_deref(), cli.format, &name)
            }
        },
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so JSON results on stdout stay parseable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
