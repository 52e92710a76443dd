//! Random, non-overlapping placement of the whole fleet.

use log::debug;
use rand::Rng;

use crate::board::OwnGrid;
use crate::common::GridError;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipType};

/// Returns a random in-bounds, non-overlapping (row, col, Orientation) for
/// `ship` on `grid`.
pub fn random_placement<R: Rng>(
    grid: &OwnGrid,
    ship: ShipType,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), GridError> {
    let size = BOARD_SIZE as usize;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        // anchor range keeps the whole run on the grid
        let (max_r, max_c) = match orient {
            Orientation::Horizontal => (size - 1, size - ship.length()),
            Orientation::Vertical => (size - ship.length(), size - 1),
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        if grid.can_occupy(ship, r, c, orient) {
            return Ok((r, c, orient));
        }
    }
    Err(GridError::UnableToPlaceShip(ship))
}

/// Place every ship of the fleet on an empty grid, longest first.
pub fn place_fleet<R: Rng>(grid: &mut OwnGrid, rng: &mut R) -> Result<(), GridError> {
    for ship in FLEET {
        let (r, c, orient) = random_placement(grid, ship, rng)?;
        grid.occupy(ship, r, c, orient)?;
        debug!("placed {} at ({}, {}) {:?}", ship, r, c, orient);
    }
    Ok(())
}
