use anyhow::{anyhow, Context, Result};
use mast_core::{Point, Receiver, ReceiverId, Scenario, Transmitter, TransmitterId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk scenario description, YAML or JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub version: Option<u32>,
    pub description: Option<String>,
    #[serde(default)]
    pub transmitters: Vec<TransmitterSpec>,
    #[serde(default)]
    pub receivers: Vec<ReceiverSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransmitterSpec {
    pub id: usize,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub power: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverSpec {
    pub id: usize,
    pub x: i64,
    pub y: i64,
}

/// Read a scenario file, picking the format from the extension and falling
/// back to trying both.
pub fn load_file_from_path(path: &Path) -> Result<ScenarioFile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file '{}'", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            serde_yaml::from_str(&data).context("parsing scenario yaml")
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            serde_json::from_str(&data).context("parsing scenario json")
        }
        _ => serde_yaml::from_str(&data)
            .or_else(|_| serde_json::from_str(&data))
            .context("parsing scenario file"),
    }
}

/// Build the in-memory scenario from a file description.
///
/// Receiver ids must be unique. Transmitter ids may repeat — the repair
/// strategies collapse same-id entries themselves — so only receivers are
/// checked.
pub fn resolve_scenario(file: &ScenarioFile) -> Result<Scenario> {
    let mut seen = HashSet::new();
    for receiver in &file.receivers {
        if !seen.insert(receiver.id) {
            return Err(anyhow!("duplicate receiver id {} in scenario", receiver.id));
        }
    }
    let transmitters = file
        .transmitters
        .iter()
        .map(|t| Transmitter::new(TransmitterId::new(t.id), Point::new(t.x, t.y), t.power))
        .collect();
    let receivers = file
        .receivers
        .iter()
        .map(|r| Receiver::new(ReceiverId::new(r.id), Point::new(r.x, r.y)))
        .collect();
    Ok(Scenario::new(transmitters, receivers))
}

pub fn validate(file: &ScenarioFile) -> Result<()> {
    resolve_scenario(file).map(|_| ())
}

/// Read and resolve in one step.
pub fn load_scenario_from_path(path: &Path) -> Result<Scenario> {
    let file = load_file_from_path(path)?;
    resolve_scenario(&file)
        .with_context(|| format!("resolving scenario from '{}'", path.display()))
}
