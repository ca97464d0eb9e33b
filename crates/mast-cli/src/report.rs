use anyhow::Result;
use mast_core::{Scenario, Solution, TransmitterId};
use serde::Serialize;
use std::io::{self, Write};
use tabwriter::TabWriter;

use crate::cli::ReportFormat;

#[derive(Serialize)]
struct TransmitterRow {
    id: usize,
    x: i64,
    y: i64,
    power_before: u64,
    power_after: u64,
}

#[derive(Serialize)]
struct RepairReport {
    transmitters: Vec<TransmitterRow>,
    total_power_before: u64,
    total_power_after: u64,
    uncovered_receivers: usize,
}

fn power_before(scenario: &Scenario, id: TransmitterId) -> u64 {
    scenario
        .transmitters
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.power)
        .unwrap_or(0)
}

fn build_report(scenario: &Scenario, solution: &Solution, uncovered: usize) -> RepairReport {
    let transmitters = solution
        .transmitters
        .iter()
        .map(|t| TransmitterRow {
            id: t.id.value(),
            x: t.location.x,
            y: t.location.y,
            power_before: power_before(scenario, t.id),
            power_after: t.power,
        })
        .collect();
    RepairReport {
        transmitters,
        total_power_before: scenario.total_power(),
        total_power_after: solution.total_power(),
        uncovered_receivers: uncovered,
    }
}

/// Write the repair outcome to stdout in the requested format.
pub fn emit(
    scenario: &Scenario,
    solution: &Solution,
    uncovered: usize,
    format: ReportFormat,
) -> Result<()> {
    let report = build_report(scenario, solution, uncovered);
    match format {
        ReportFormat::Plain => print_table(&report),
        ReportFormat::Json => print_json(&report),
    }
}

fn print_table(report: &RepairReport) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "ID\tX\tY\tPOWER\tNEW POWER")?;
    for row in &report.transmitters {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.id, row.x, row.y, row.power_before, row.power_after
        )?;
    }
    writer.flush()?;
    println!(
        "TOTAL POWER {} -> {}",
        report.total_power_before, report.total_power_after
    );
    if report.uncovered_receivers > 0 {
        println!("UNCOVERED RECEIVERS {}", report.uncovered_receivers);
    }
    Ok(())
}

fn print_json(report: &RepairReport) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout(), report)
        .map_err(|err| anyhow::anyhow!("serializing repair report to JSON: {err}"))?;
    println!();
    Ok(())
}
