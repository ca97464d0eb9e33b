//! Top-level repair: run both strategies, keep the cheaper outcome.

use mast_core::{Scenario, Solution};
use tracing::debug;

use crate::candidates::candidate_increases;
use crate::coverage::out_of_range_receivers;
use crate::nearest::apply_multiple_increase;
use crate::uniform::apply_single_increase;

/// Repair coverage with the cheaper of the two power-increase strategies.
///
/// Fully covered scenarios come back unchanged. Otherwise both strategies
/// run on the same read-only input and the lower-total-power result wins;
/// equal totals favor the single-increase result.
///
/// Total function: degenerate inputs (no receivers, no transmitters) fall
/// through to the unchanged transmitter list. The single-increase sweep can
/// also come back unchanged when no candidate delta restores coverage; the
/// caller decides whether remaining uncovered receivers matter.
pub fn optimise(scenario: &Scenario) -> Solution {
    if out_of_range_receivers(scenario).is_empty() {
        return Solution::new(scenario.transmitters.clone());
    }
    let single = Solution::new(apply_single_increase(
        &scenario.transmitters,
        &candidate_increases(scenario),
        scenario,
    ));
    let multiple = Solution::new(apply_multiple_increase(scenario));
    debug!(
        "single increase totals {}, multiple increase totals {}",
        single.total_power(),
        multiple.total_power()
    );
    if single.total_power() <= multiple.total_power() {
        single
    } else {
        multiple
    }
}
