//! # mast-algo: Coverage Repair Strategies
//!
//! Given a [`Scenario`](mast_core::Scenario) with receivers outside every
//! transmitter's coverage square, compute a cheap set of transmitter power
//! increases that restores full coverage.
//!
//! Two deliberately simple strategies compete:
//!
//! | Strategy | Approach |
//! |----------|----------|
//! | [`apply_single_increase`] | Try each candidate delta on each transmitter in turn; first full-coverage hit wins |
//! | [`apply_multiple_increase`] | Boost each uncovered receiver's nearest transmitter by exactly its gap, then merge |
//!
//! [`optimise`] runs both and returns the cheaper outcome. Neither strategy
//! is a true optimiser — both are bounded brute-force searches sized for
//! small scenarios, and the combined result is not guaranteed globally
//! minimal.
//!
//! Everything operates on immutable values: what-if evaluation builds fresh
//! scenarios, and the two strategies share nothing but the read-only input.
//!
//! ## Example
//!
//! ```rust
//! use mast_core::{Point, Receiver, ReceiverId, Scenario, Transmitter, TransmitterId};
//! use mast_algo::optimise;
//!
//! let scenario = Scenario::new(
//!     vec![Transmitter::new(TransmitterId::new(1), Point::new(0, 0), 1)],
//!     vec![Receiver::new(ReceiverId::new(1), Point::new(0, 2))],
//! );
//!
//! let solution = optimise(&scenario);
//! assert_eq!(solution.total_power(), 2);
//! ```

pub mod baseline;
pub mod candidates;
pub mod coverage;
pub mod nearest;
pub mod optimiser;
pub mod uniform;

pub use baseline::{flat_boost, DEFAULT_FLAT_BOOST};
pub use candidates::candidate_increases;
pub use coverage::{out_of_range_receivers, uncovered_by_all};
pub use nearest::{
    apply_multiple_increase, boosted_nearest_transmitters, collapse_duplicate_ids,
    nearest_transmitters_for,
};
pub use optimiser::optimise;
pub use uniform::apply_single_increase;
