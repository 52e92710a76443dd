//! Own grid (ship occupancy plus incoming hits and misses) and knowledge
//! grid (what outgoing shots revealed about the opponent).

use core::fmt;

use crate::common::GridError;
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, ShipType};

const N: usize = BOARD_SIZE as usize;

/// State of one cell of the own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Occupied(ShipType),
    /// A ship segment that took a shot. Keeps the ship so repeat shots can
    /// re-report the stored truth.
    Hit(ShipType),
    Miss,
}

impl Cell {
    /// Whether an incoming shot already landed here.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Occupied(ship) => ship.tag(),
            Cell::Hit(_) => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// What an incoming shot did to a cell of the own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Occupied cell turned into a hit on `ShipType`.
    Hit(ShipType),
    /// Water turned into a miss.
    Miss,
    /// Cell had already been shot; nothing changed.
    Repeat(Cell),
}

/// The local player's 10×10 board.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnGrid {
    cells: [[Cell; N]; N],
    placed: [bool; NUM_SHIPS],
}

impl OwnGrid {
    /// All-water grid with no ships placed.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Water; N]; N],
            placed: [false; NUM_SHIPS],
        }
    }

    /// Build a grid from ten rows of ten characters: `~` for water or a ship
    /// tag. Used for fixtures; ship runs are taken as given.
    pub fn from_rows(rows: [&str; N]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (r, line) in rows.iter().enumerate() {
            let mut width = 0;
            for (c, ch) in line.chars().enumerate() {
                if c >= N {
                    return Err(GridError::OutOfRange { row: r, col: c });
                }
                width = c + 1;
                if ch != '~' {
                    let ship = ShipType::from_tag(ch)?;
                    grid.cells[r][c] = Cell::Occupied(ship);
                    grid.placed[ship.index()] = true;
                }
            }
            if width != N {
                return Err(GridError::OutOfRange { row: r, col: width });
            }
        }
        Ok(grid)
    }

    /// Cell state at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Whether `ship` has been put on the grid.
    pub fn is_placed(&self, ship: ShipType) -> bool {
        self.placed[ship.index()]
    }

    /// Number of cells holding a ship segment, hit or not.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Occupied(_) | Cell::Hit(_)))
            .count()
    }

    /// Coordinates of every segment of `ship`, row-major.
    pub fn ship_cells(&self, ship: ShipType) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N).flat_map(move |r| (0..N).map(move |c| (r, c))).filter(move |&(r, c)| {
            matches!(self.cells[r][c], Cell::Occupied(s) | Cell::Hit(s) if s == ship)
        })
    }

    /// Whether a run of `ship.length()` cells from (`row`, `col`) stays on the
    /// grid and covers only water.
    pub fn can_occupy(&self, ship: ShipType, row: usize, col: usize, orientation: Orientation) -> bool {
        self.check_run(ship, row, col, orientation).is_ok()
    }

    /// Mark a run of cells as occupied by `ship`. Placement only.
    pub fn occupy(
        &mut self,
        ship: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        if self.placed[ship.index()] {
            return Err(GridError::ShipAlreadyPlaced(ship));
        }
        self.check_run(ship, row, col, orientation)?;
        for i in 0..ship.length() {
            let (r, c) = orientation.step(row, col, i);
            self.cells[r][c] = Cell::Occupied(ship);
        }
        self.placed[ship.index()] = true;
        Ok(())
    }

    /// Apply an incoming shot. Occupied becomes Hit, Water becomes Miss, and
    /// an already-shot cell is left alone.
    pub fn strike(&mut self, row: usize, col: usize) -> Result<Strike, GridError> {
        check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        let strike = match *cell {
            Cell::Occupied(ship) => {
                *cell = Cell::Hit(ship);
                Strike::Hit(ship)
            }
            Cell::Water => {
                *cell = Cell::Miss;
                Strike::Miss
            }
            resolved => Strike::Repeat(resolved),
        };
        Ok(strike)
    }

    fn check_run(
        &self,
        ship: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        check_bounds(row, col)?;
        let (end_r, end_c) = orientation.step(row, col, ship.length() - 1);
        if end_r >= N || end_c >= N {
            return Err(GridError::ShipOutOfBounds(ship));
        }
        for i in 0..ship.length() {
            let (r, c) = orientation.step(row, col, i);
            if self.cells[r][c] != Cell::Water {
                return Err(GridError::ShipOverlaps(ship));
            }
        }
        Ok(())
    }
}

impl Default for OwnGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OwnGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OwnGrid {{")?;
        for row in &self.cells {
            f.write_str("  ")?;
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// What the local player knows about one opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Knowledge {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl Knowledge {
    pub fn symbol(self) -> char {
        match self {
            Knowledge::Unknown => '?',
            Knowledge::Hit => 'X',
            Knowledge::Miss => 'O',
        }
    }
}

/// Outcomes of the local player's own shots, as reported by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeGrid {
    cells: [[Knowledge; N]; N],
}

impl KnowledgeGrid {
    pub fn new() -> Self {
        Self {
            cells: [[Knowledge::Unknown; N]; N],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Knowledge, GridError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Store the reported outcome at (`row`, `col`), replacing whatever was
    /// known before.
    pub fn record(&mut self, row: usize, col: usize, knowledge: Knowledge) -> Result<(), GridError> {
        check_bounds(row, col)?;
        self.cells[row][col] = knowledge;
        Ok(())
    }

    /// Number of cells known to be `knowledge`.
    pub fn count(&self, knowledge: Knowledge) -> usize {
        self.cells.iter().flatten().filter(|&&k| k == knowledge).count()
    }
}

impl Default for KnowledgeGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), GridError> {
    if row >= N || col >= N {
        Err(GridError::OutOfRange { row, col })
    } else {
        Ok(())
    }
}
