use clap::Parser;
use mast_algo::{flat_boost, optimise, out_of_range_receivers};
use mast_core::Scenario;
use mast_scenarios::{load_file_from_path, load_scenario_from_path, validate};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod report;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match &cli.command {
        Commands::Optimise { scenario, format } => {
            info!("Optimising scenario from {}", scenario.display());
            let loaded = load_scenario_from_path(scenario)?;
            let solution = optimise(&loaded);
            let uncovered = remaining_uncovered(&loaded, &solution.transmitters);
            if uncovered > 0 {
                warn!("{uncovered} receivers remain uncovered after repair");
            }
            report::emit(&loaded, &solution, uncovered, *format)
        }
        Commands::Validate { scenario } => {
            let file = load_file_from_path(scenario)?;
            validate(&file)?;
            println!(
                "OK: {} transmitters, {} receivers",
                file.transmitters.len(),
                file.receivers.len()
            );
            Ok(())
        }
        Commands::Baseline {
            scenario,
            boost,
            format,
        } => {
            info!(
                "Applying flat boost of {boost} to scenario from {}",
                scenario.display()
            );
            let loaded = load_scenario_from_path(scenario)?;
            let solution = flat_boost(&loaded, *boost);
            let uncovered = remaining_uncovered(&loaded, &solution.transmitters);
            report::emit(&loaded, &solution, uncovered, *format)
        }
    }
}

fn remaining_uncovered(scenario: &Scenario, repaired: &[mast_core::Transmitter]) -> usize {
    let check = Scenario::new(repaired.to_vec(), scenario.receivers.clone());
    out_of_range_receivers(&check).len()
}
