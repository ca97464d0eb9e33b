//! Scenario-level coverage queries.

use mast_core::{Receiver, Scenario, Transmitter};

/// Whether no transmitter in the slice covers the receiver.
///
/// An empty slice leaves the receiver uncovered by definition.
pub fn uncovered_by_all(transmitters: &[Transmitter], receiver: &Receiver) -> bool {
    transmitters.iter().all(|t| !t.covers(receiver))
}

/// Receivers outside every transmitter's coverage square, in scenario order.
pub fn out_of_range_receivers(scenario: &Scenario) -> Vec<Receiver> {
    scenario
        .receivers
        .iter()
        .filter(|receiver| uncovered_by_all(&scenario.transmitters, receiver))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_core::{Point, ReceiverId, TransmitterId};

    fn tx(id: usize, x: i64, y: i64, power: u64) -> Transmitter {
        Transmitter::new(TransmitterId::new(id), Point::new(x, y), power)
    }

    fn rx(id: usize, x: i64, y: i64) -> Receiver {
        Receiver::new(ReceiverId::new(id), Point::new(x, y))
    }

    #[test]
    fn one_covering_transmitter_is_enough() {
        let transmitters = [tx(1, 0, 0, 0), tx(2, 0, 0, 5)];
        assert!(!uncovered_by_all(&transmitters, &rx(1, 3, 3)));
    }

    #[test]
    fn empty_transmitter_slice_leaves_everything_uncovered() {
        assert!(uncovered_by_all(&[], &rx(1, 0, 0)));
    }

    #[test]
    fn uncovered_receivers_keep_scenario_order() {
        let scenario = Scenario::new(
            vec![tx(1, 0, 0, 1)],
            vec![rx(1, 0, 0), rx(2, 5, 0), rx(3, 0, 1), rx(4, 0, -9)],
        );
        assert_eq!(out_of_range_receivers(&scenario), vec![rx(2, 5, 0), rx(4, 0, -9)]);
    }

    #[test]
    fn fully_covered_scenario_reports_nothing() {
        let scenario = Scenario::new(vec![tx(1, 0, 0, 10)], vec![rx(1, 4, -4), rx(2, 10, 10)]);
        assert!(out_of_range_receivers(&scenario).is_empty());
    }
}
