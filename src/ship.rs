//! Ship kinds and orientation.
//!
//! The fleet is a closed set: every ship kind has a fixed length, a grid tag
//! and a wire name, and the tag map is total over that set.

use core::fmt;

use crate::common::GridError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps along a run anchored at (`row`, `col`).
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// One of the five ship kinds in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    /// Single-character mark used on the own grid.
    pub const fn tag(self) -> char {
        match self {
            ShipType::Carrier => 'C',
            ShipType::Battleship => 'B',
            ShipType::Cruiser => 'R',
            ShipType::Submarine => 'S',
            ShipType::Destroyer => 'D',
        }
    }

    /// Name carried in the ship-type field of a `SUNK` message.
    pub const fn wire_name(self) -> &'static str {
        match self {
            ShipType::Carrier => "CARRIER",
            ShipType::Battleship => "BATTLESHIP",
            ShipType::Cruiser => "CRUISER",
            ShipType::Submarine => "SUBMARINE",
            ShipType::Destroyer => "DESTROYER",
        }
    }

    /// Position of the ship in [`crate::FLEET`].
    pub const fn index(self) -> usize {
        match self {
            ShipType::Carrier => 0,
            ShipType::Battleship => 1,
            ShipType::Cruiser => 2,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 4,
        }
    }

    /// Ship kind for a grid tag. Any tag outside the fleet is an internal
    /// consistency error.
    pub fn from_tag(tag: char) -> Result<Self, GridError> {
        match tag {
            'C' => Ok(ShipType::Carrier),
            'B' => Ok(ShipType::Battleship),
            'R' => Ok(ShipType::Cruiser),
            'S' => Ok(ShipType::Submarine),
            'D' => Ok(ShipType::Destroyer),
            other => Err(GridError::UnknownShipTag(other)),
        }
    }

    /// Ship kind for a wire name, ignoring ASCII case.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        crate::config::FLEET
            .iter()
            .copied()
            .find(|ship| ship.wire_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
