use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mast", author, version, about = "Radio coverage power repair", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Repair coverage with the cheaper of the two power-increase strategies
    Optimise {
        /// Path to the scenario file (YAML or JSON)
        scenario: PathBuf,

        #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
        format: ReportFormat,
    },
    /// Load and validate a scenario file without optimising
    Validate {
        /// Path to the scenario file (YAML or JSON)
        scenario: PathBuf,
    },
    /// Apply the flat power boost baseline (comparison only)
    Baseline {
        /// Path to the scenario file (YAML or JSON)
        scenario: PathBuf,

        /// Uniform power increase applied to every transmitter
        #[arg(long, default_value_t = mast_algo::DEFAULT_FLAT_BOOST)]
        boost: u64,

        #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
        format: ReportFormat,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Plain,
    Json,
}
