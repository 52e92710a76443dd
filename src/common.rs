//! Errors shared by the grid, fleet and placement modules.

use crate::ship::ShipType;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column outside `0..BOARD_SIZE`.
    OutOfRange { row: usize, col: usize },
    /// The ship already sits on the grid.
    ShipAlreadyPlaced(ShipType),
    /// Ship placement overlaps another ship.
    ShipOverlaps(ShipType),
    /// Ship placement runs off the grid.
    ShipOutOfBounds(ShipType),
    /// Random placement gave up after the attempt cap.
    UnableToPlaceShip(ShipType),
    /// A grid tag that names no ship in the fleet.
    UnknownShipTag(char),
    /// An outgoing shot was already sent to this cell.
    AlreadyAttempted { row: usize, col: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfRange { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            GridError::ShipAlreadyPlaced(ship) => write!(f, "{} is already placed", ship),
            GridError::ShipOverlaps(ship) => write!(f, "{} overlaps another ship", ship),
            GridError::ShipOutOfBounds(ship) => write!(f, "{} does not fit on the grid", ship),
            GridError::UnableToPlaceShip(ship) => write!(f, "Unable to place {}", ship),
            GridError::UnknownShipTag(tag) => write!(f, "Unknown ship tag '{}'", tag),
            GridError::AlreadyAttempted { row, col } => {
                write!(f, "A shot was already sent to ({}, {})", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
