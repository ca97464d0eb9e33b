//! # mast-core: Radio Coverage Modeling Core
//!
//! Provides the immutable value model for radio coverage repair: transmitters
//! with integer power levels, receivers, and the scenarios that tie them
//! together on an integer grid.
//!
//! ## Design Philosophy
//!
//! Everything here is a plain value:
//! - **Transmitters** carry an id, a grid location, and a power level
//! - **Receivers** carry an id and a grid location
//! - **Scenarios** pair an ordered transmitter list with an ordered receiver list
//!
//! Coverage is square-shaped: a transmitter covers every point whose Chebyshev
//! distance from it is at most its power level. Nothing is ever mutated in
//! place — "raising" a transmitter's power means constructing a new value with
//! [`Transmitter::with_power`]. This lets competing repair strategies read the
//! same base scenario without interference.
//!
//! ## Quick Start
//!
//! ```rust
//! use mast_core::*;
//!
//! let scenario = Scenario::new(
//!     vec![Transmitter::new(TransmitterId::new(1), Point::new(0, 0), 1)],
//!     vec![
//!         Receiver::new(ReceiverId::new(0), Point::new(0, 0)),
//!         Receiver::new(ReceiverId::new(1), Point::new(0, 2)),
//!     ],
//! );
//!
//! let tx = &scenario.transmitters[0];
//! assert!(tx.covers(&scenario.receivers[0]));
//! assert!(!tx.covers(&scenario.receivers[1]));
//!
//! // Raising power builds a new value; the original is untouched.
//! let boosted = tx.with_power(2);
//! assert!(boosted.covers(&scenario.receivers[1]));
//! ```
//!
//! ## ID System
//!
//! Elements carry newtype IDs ([`TransmitterId`], [`ReceiverId`]) so a
//! transmitter id can never be confused with a receiver id. Transmitter ids
//! are *not* required to be unique within a scenario; repair strategies that
//! produce several entries for the same id collapse them afterwards.

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{MastError, MastResult};

// Newtype wrappers for IDs for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransmitterId(usize);
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiverId(usize);

impl TransmitterId {
    #[inline]
    pub fn new(value: usize) -> Self {
        TransmitterId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl ReceiverId {
    #[inline]
    pub fn new(value: usize) -> Self {
        ReceiverId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// A location on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Chebyshev distance to another point: the larger of the absolute
    /// coordinate differences. Models square coverage areas.
    #[inline]
    pub fn chebyshev_distance(self, other: Point) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// A fixed-location transmitter with an integer power level.
///
/// Power doubles as coverage radius: the transmitter reaches every point
/// within Chebyshev distance `power` of its location, boundary included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transmitter {
    pub id: TransmitterId,
    pub location: Point,
    pub power: u64,
}

impl Transmitter {
    pub fn new(id: TransmitterId, location: Point, power: u64) -> Self {
        Transmitter {
            id,
            location,
            power,
        }
    }

    /// Copy of this transmitter with a different power level. Identity and
    /// location are preserved.
    pub fn with_power(self, power: u64) -> Self {
        Transmitter { power, ..self }
    }

    /// Whether the receiver sits inside this transmitter's coverage square.
    pub fn covers(&self, receiver: &Receiver) -> bool {
        self.power >= self.location.chebyshev_distance(receiver.location)
    }

    /// Magnitude of the gap between the current power level and the power
    /// needed to cover the receiver exactly. Sign-insensitive: a transmitter
    /// short by N and one already over by N report the same gap.
    pub fn distance_to_range(&self, receiver: &Receiver) -> u64 {
        self.location
            .chebyshev_distance(receiver.location)
            .abs_diff(self.power)
    }
}

/// A fixed-location receiver. Never modified by repair strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Receiver {
    pub id: ReceiverId,
    pub location: Point,
}

impl Receiver {
    pub fn new(id: ReceiverId, location: Point) -> Self {
        Receiver { id, location }
    }
}

/// An ordered transmitter list paired with an ordered receiver list.
///
/// Read-only input to the repair strategies. What-if evaluation constructs a
/// fresh `Scenario` value rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub transmitters: Vec<Transmitter>,
    pub receivers: Vec<Receiver>,
}

impl Scenario {
    pub fn new(transmitters: Vec<Transmitter>, receivers: Vec<Receiver>) -> Self {
        Scenario {
            transmitters,
            receivers,
        }
    }

    /// Sum of all transmitter power levels.
    pub fn total_power(&self) -> u64 {
        self.transmitters.iter().map(|t| t.power).sum()
    }
}

/// The transmitter list a repair strategy settled on.
///
/// Carries the same multiset of transmitter ids as the input scenario; only
/// power levels differ. Total power is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub transmitters: Vec<Transmitter>,
}

impl Solution {
    pub fn new(transmitters: Vec<Transmitter>) -> Self {
        Solution { transmitters }
    }

    /// Sum of all transmitter power levels.
    pub fn total_power(&self) -> u64 {
        self.transmitters.iter().map(|t| t.power).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_the_larger_axis() {
        let a = Point::new(0, 0);
        assert_eq!(a.chebyshev_distance(Point::new(3, -1)), 3);
        assert_eq!(a.chebyshev_distance(Point::new(2, 7)), 7);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn chebyshev_is_symmetric() {
        let a = Point::new(-4, 9);
        let b = Point::new(12, -3);
        assert_eq!(a.chebyshev_distance(b), b.chebyshev_distance(a));
    }

    #[test]
    fn coverage_boundary_is_inclusive() {
        let tx = Transmitter::new(TransmitterId::new(1), Point::new(0, 0), 2);
        let on_edge = Receiver::new(ReceiverId::new(1), Point::new(2, 2));
        let outside = Receiver::new(ReceiverId::new(2), Point::new(3, 0));
        assert!(tx.covers(&on_edge));
        assert!(!tx.covers(&outside));
    }

    #[test]
    fn range_gap_is_sign_insensitive() {
        let short = Transmitter::new(TransmitterId::new(1), Point::new(0, 0), 1);
        let over = Transmitter::new(TransmitterId::new(2), Point::new(0, 0), 9);
        let rx = Receiver::new(ReceiverId::new(1), Point::new(0, 5));
        assert_eq!(short.distance_to_range(&rx), 4);
        assert_eq!(over.distance_to_range(&rx), 4);
    }

    #[test]
    fn with_power_preserves_identity_and_location() {
        let tx = Transmitter::new(TransmitterId::new(7), Point::new(3, 4), 1);
        let boosted = tx.with_power(6);
        assert_eq!(boosted.id, tx.id);
        assert_eq!(boosted.location, tx.location);
        assert_eq!(boosted.power, 6);
        assert_eq!(tx.power, 1);
    }

    #[test]
    fn solution_total_power_is_derived() {
        let solution = Solution::new(vec![
            Transmitter::new(TransmitterId::new(1), Point::new(0, 0), 3),
            Transmitter::new(TransmitterId::new(2), Point::new(1, 1), 4),
        ]);
        assert_eq!(solution.total_power(), 7);
    }

    #[test]
    fn ids_serialize_transparently() {
        let tx = Transmitter::new(TransmitterId::new(5), Point::new(1, 2), 3);
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"{"id":5,"location":{"x":1,"y":2},"power":3}"#);
    }
}
