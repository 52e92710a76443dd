//! Per-ship hit counters for the local fleet.

use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::ShipType;

/// Cumulative hits taken by each ship of the local fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetHits {
    hits: [usize; NUM_SHIPS],
}

impl FleetHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hits taken by `ship` so far.
    pub fn hits(&self, ship: ShipType) -> usize {
        self.hits[ship.index()]
    }

    /// Count one more hit on `ship` and return the new total. The total never
    /// exceeds the ship's length.
    pub fn record_hit(&mut self, ship: ShipType) -> usize {
        let count = &mut self.hits[ship.index()];
        debug_assert!(*count < ship.length(), "{} hit past its length", ship);
        *count = (*count + 1).min(ship.length());
        *count
    }

    pub fn is_sunk(&self, ship: ShipType) -> bool {
        self.hits(ship) >= ship.length()
    }

    /// Every ship in the fleet is sunk.
    pub fn is_destroyed(&self) -> bool {
        FLEET.iter().all(|&ship| self.is_sunk(ship))
    }

    /// Ships with their hit counts, in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        FLEET.iter().map(move |&ship| (ship, self.hits(ship)))
    }
}
