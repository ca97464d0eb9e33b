//! Candidate power-delta enumeration.

use mast_core::Scenario;

use crate::coverage::out_of_range_receivers;

/// All power deltas that would close the gap between some transmitter and
/// some uncovered receiver, ascending and deduplicated.
///
/// Empty exactly when every receiver is already covered.
pub fn candidate_increases(scenario: &Scenario) -> Vec<u64> {
    let mut gaps = Vec::new();
    for receiver in out_of_range_receivers(scenario) {
        for transmitter in &scenario.transmitters {
            gaps.push(transmitter.distance_to_range(&receiver));
        }
    }
    gaps.sort_unstable();
    gaps.dedup();
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_core::{Point, Receiver, ReceiverId, Transmitter, TransmitterId};

    fn tx(id: usize, x: i64, y: i64, power: u64) -> Transmitter {
        Transmitter::new(TransmitterId::new(id), Point::new(x, y), power)
    }

    fn rx(id: usize, x: i64, y: i64) -> Receiver {
        Receiver::new(ReceiverId::new(id), Point::new(x, y))
    }

    #[test]
    fn gaps_are_sorted_and_unique() {
        // Receiver at (0,3): gaps 1 and 2. Receiver at (4,0): gaps 2 and 5.
        let scenario = Scenario::new(
            vec![tx(1, 0, 0, 2), tx(2, 0, 6, 1)],
            vec![rx(1, 0, 3), rx(2, 4, 0)],
        );
        assert_eq!(candidate_increases(&scenario), vec![1, 2, 5]);
    }

    #[test]
    fn covered_scenario_yields_no_candidates() {
        let scenario = Scenario::new(vec![tx(1, 0, 0, 4)], vec![rx(1, 2, 2)]);
        assert!(candidate_increases(&scenario).is_empty());
    }

    #[test]
    fn no_transmitters_means_no_candidates() {
        let scenario = Scenario::new(vec![], vec![rx(1, 0, 0)]);
        assert!(candidate_increases(&scenario).is_empty());
    }
}
