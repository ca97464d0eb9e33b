//! Multiple-increase repair: per-receiver nearest-transmitter boosts.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use mast_core::{Receiver, Scenario, Transmitter, TransmitterId};

use crate::coverage::out_of_range_receivers;

/// The transmitters with the smallest range gap to the receiver, each boosted
/// by its own gap.
///
/// Ties are not broken: every transmitter sharing the minimal gap comes back,
/// each raised by exactly what it needs to reach the receiver. An empty
/// transmitter slice yields an empty result rather than an error.
pub fn nearest_transmitters_for(
    transmitters: &[Transmitter],
    receiver: &Receiver,
) -> Vec<Transmitter> {
    let Some(min_gap) = transmitters
        .iter()
        .map(|t| t.distance_to_range(receiver))
        .min()
    else {
        return Vec::new();
    };
    let mut nearest: Vec<Transmitter> = transmitters
        .iter()
        .filter(|t| t.distance_to_range(receiver) == min_gap)
        .copied()
        .collect();
    dedup_exact(&mut nearest);
    nearest
        .into_iter()
        .map(|t| {
            let gap = t.distance_to_range(receiver);
            t.with_power(t.power + gap)
        })
        .collect()
}

/// Boosted nearest transmitters for every uncovered receiver, merged.
///
/// Per-receiver results are flattened in receiver order, exact duplicates
/// dropped, and entries sharing an id collapsed to the strongest.
pub fn boosted_nearest_transmitters(scenario: &Scenario) -> Vec<Transmitter> {
    let mut boosted = Vec::new();
    for receiver in out_of_range_receivers(scenario) {
        boosted.extend(nearest_transmitters_for(&scenario.transmitters, &receiver));
    }
    dedup_exact(&mut boosted);
    collapse_duplicate_ids(boosted)
}

/// The multiple-increase strategy: original transmitters concatenated with
/// the boosted nearest set, collapsed by id.
///
/// Because the boosted entries always carry at least the original power,
/// the collapse keeps each boosted transmitter and the untouched rest.
pub fn apply_multiple_increase(scenario: &Scenario) -> Vec<Transmitter> {
    let mut combined = scenario.transmitters.clone();
    combined.extend(boosted_nearest_transmitters(scenario));
    collapse_duplicate_ids(combined)
}

/// Collapse entries sharing a transmitter id to the highest-power one.
///
/// Single pass: ids keep their first-seen order, a strictly greater power
/// replaces the held entry, and max-power ties keep the first encountered.
pub fn collapse_duplicate_ids(transmitters: Vec<Transmitter>) -> Vec<Transmitter> {
    let mut order: Vec<TransmitterId> = Vec::new();
    let mut strongest: HashMap<TransmitterId, Transmitter> = HashMap::new();
    for transmitter in transmitters {
        match strongest.entry(transmitter.id) {
            Entry::Vacant(slot) => {
                order.push(transmitter.id);
                slot.insert(transmitter);
            }
            Entry::Occupied(mut slot) => {
                if transmitter.power > slot.get().power {
                    slot.insert(transmitter);
                }
            }
        }
    }
    order
        .into_iter()
        .filter_map(|id| strongest.remove(&id))
        .collect()
}

/// Remove exact-value duplicates, keeping first occurrences in order.
fn dedup_exact(transmitters: &mut Vec<Transmitter>) {
    let mut seen = HashSet::new();
    transmitters.retain(|t| seen.insert(*t));
}
