//! Single-increase repair: one delta applied to one transmitter.

use mast_core::{Scenario, Transmitter};

use crate::coverage::out_of_range_receivers;

/// Brute-force sweep over (delta, transmitter) pairs.
///
/// For each candidate delta in ascending order, each transmitter in list
/// order is hypothetically boosted by that delta and the resulting scenario
/// re-checked. The first combination that covers every receiver is returned
/// as-is; the scan order is the tie-break rule, so it must not be reordered.
///
/// Falls back to the unchanged input list when no single boost restores full
/// coverage within the candidate deltas.
pub fn apply_single_increase(
    transmitters: &[Transmitter],
    deltas: &[u64],
    scenario: &Scenario,
) -> Vec<Transmitter> {
    for &delta in deltas {
        for index in 0..transmitters.len() {
            let mut updated = transmitters.to_vec();
            updated[index] = updated[index].with_power(updated[index].power + delta);
            let candidate = Scenario::new(updated, scenario.receivers.clone());
            if out_of_range_receivers(&candidate).is_empty() {
                return candidate.transmitters;
            }
        }
    }
    transmitters.to_vec()
}
