//! Flat power boost, kept as a comparison floor for the real strategies.

use mast_core::{Scenario, Solution};

/// Boost applied by the default baseline.
pub const DEFAULT_FLAT_BOOST: u64 = 10;

/// Raise every transmitter's power by the same amount, coverage unchecked.
///
/// Not a repair strategy in any serious sense; [`optimise`](crate::optimise)
/// never consults it.
pub fn flat_boost(scenario: &Scenario, boost: u64) -> Solution {
    Solution::new(
        scenario
            .transmitters
            .iter()
            .map(|t| t.with_power(t.power + boost))
            .collect(),
    )
}
