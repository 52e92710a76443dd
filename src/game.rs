use alloc::string::{String, ToString};
use log::warn;
use rand::Rng;

use crate::{
    board::{Cell, Knowledge, KnowledgeGrid, OwnGrid, Strike},
    cellset::CellSet,
    common::GridError,
    config::{RepeatShotPolicy, BOARD_SIZE, NUM_SHIPS},
    fleet::FleetHits,
    placement,
    protocol::Message,
    ship::ShipType,
};

/// Coordinates already fired at by the local player.
pub type ShotSet = CellSet<u128, { BOARD_SIZE as usize }>;

/// Result of resolving an incoming shot against the own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit(ShipType),
    /// The hit sank the ship.
    Sunk(ShipType),
    /// The hit sank the last ship afloat.
    FleetDestroyed(ShipType),
    /// The cell had already been shot; no state changed.
    AlreadyResolved(Cell),
}

impl ShotOutcome {
    pub fn is_fleet_destroyed(&self) -> bool {
        matches!(self, ShotOutcome::FleetDestroyed(_))
    }
}

/// Result of an outgoing shot as reported by the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotReport {
    Miss,
    Hit,
    /// Sunk, with the ship name the opponent sent, if any.
    Sunk(Option<String>),
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Per-session game state: the local fleet and its damage, plus what the
/// local player has learned about the opponent.
#[derive(Debug, Clone)]
pub struct GameEngine {
    own: OwnGrid,
    fleet: FleetHits,
    knowledge: KnowledgeGrid,
    attempted: ShotSet,
    enemy_sunk: [bool; NUM_SHIPS],
    repeat_policy: RepeatShotPolicy,
    fleet_destroyed: bool,
    opponent_conceded: bool,
}

impl GameEngine {
    /// Create a new engine with an empty grid and no shots recorded.
    pub fn new() -> Self {
        Self::with_policy(RepeatShotPolicy::default())
    }

    pub fn with_policy(repeat_policy: RepeatShotPolicy) -> Self {
        Self::from_grid(OwnGrid::new(), repeat_policy)
    }

    /// Start a session from an already populated own grid.
    pub fn from_grid(own: OwnGrid, repeat_policy: RepeatShotPolicy) -> Self {
        Self {
            own,
            fleet: FleetHits::new(),
            knowledge: KnowledgeGrid::new(),
            attempted: ShotSet::new(),
            enemy_sunk: [false; NUM_SHIPS],
            repeat_policy,
            fleet_destroyed: false,
            opponent_conceded: false,
        }
    }

    /// Randomly place the whole fleet on the own grid.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), GridError> {
        placement::place_fleet(&mut self.own, rng)
    }

    pub fn own_grid(&self) -> &OwnGrid {
        &self.own
    }

    /// Mutable own grid, for placement.
    pub fn own_grid_mut(&mut self) -> &mut OwnGrid {
        &mut self.own
    }

    pub fn fleet(&self) -> &FleetHits {
        &self.fleet
    }

    pub fn knowledge(&self) -> &KnowledgeGrid {
        &self.knowledge
    }

    /// Cells the local player has already fired at.
    pub fn attempted(&self) -> &ShotSet {
        &self.attempted
    }

    pub fn repeat_policy(&self) -> RepeatShotPolicy {
        self.repeat_policy
    }

    /// Whether a shot was already sent to (`row`, `col`). Out-of-range
    /// coordinates count as not attempted.
    pub fn is_attempted(&self, row: usize, col: usize) -> bool {
        self.attempted.contains(row, col).unwrap_or(false)
    }

    /// Record that a shot is about to be sent to (`row`, `col`).
    pub fn note_attempt(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        if self.attempted.insert(row, col)? {
            Ok(())
        } else {
            Err(GridError::AlreadyAttempted { row, col })
        }
    }

    /// Handle an opponent shot on the own grid.
    pub fn resolve_incoming_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GridError> {
        let outcome = match self.own.strike(row, col)? {
            Strike::Miss => ShotOutcome::Miss,
            Strike::Repeat(cell) => ShotOutcome::AlreadyResolved(cell),
            Strike::Hit(ship) => {
                self.fleet.record_hit(ship);
                if !self.fleet.is_sunk(ship) {
                    ShotOutcome::Hit(ship)
                } else if self.fleet.is_destroyed() {
                    self.fleet_destroyed = true;
                    ShotOutcome::FleetDestroyed(ship)
                } else {
                    ShotOutcome::Sunk(ship)
                }
            }
        };
        Ok(outcome)
    }

    /// Wire reply for an incoming shot at (`row`, `col`) that resolved to
    /// `outcome`.
    pub fn reply_for(&self, row: u8, col: u8, outcome: &ShotOutcome) -> Message {
        let sunk = |ship: ShipType| Message::Sunk {
            row,
            col,
            ship: Some(ship.wire_name().to_string()),
        };
        match *outcome {
            ShotOutcome::Miss => Message::Miss { row, col },
            ShotOutcome::Hit(_) => Message::Hit { row, col },
            ShotOutcome::Sunk(ship) | ShotOutcome::FleetDestroyed(ship) => sunk(ship),
            ShotOutcome::AlreadyResolved(cell) => match (self.repeat_policy, cell) {
                (RepeatShotPolicy::ReportStored, Cell::Hit(ship)) if self.fleet.is_sunk(ship) => {
                    sunk(ship)
                }
                (RepeatShotPolicy::ReportStored, Cell::Hit(_)) => Message::Hit { row, col },
                _ => Message::Miss { row, col },
            },
        }
    }

    /// Record the opponent's answer to our shot at (`row`, `col`). Touches
    /// only the knowledge grid and the enemy sunk list.
    pub fn record_outgoing_result(
        &mut self,
        row: usize,
        col: usize,
        report: &ShotReport,
    ) -> Result<(), GridError> {
        let knowledge = match report {
            ShotReport::Miss => Knowledge::Miss,
            ShotReport::Hit | ShotReport::Sunk(_) => Knowledge::Hit,
        };
        self.knowledge.record(row, col, knowledge)?;
        if let ShotReport::Sunk(name) = report {
            match name.as_deref().and_then(ShipType::from_wire_name) {
                Some(ship) => self.enemy_sunk[ship.index()] = true,
                None => warn!("opponent reported an unrecognised sunk ship: {:?}", name),
            }
        }
        Ok(())
    }

    /// Enemy ships reported sunk so far.
    pub fn enemy_sunk(&self) -> impl Iterator<Item = ShipType> + '_ {
        crate::config::FLEET
            .iter()
            .copied()
            .filter(move |ship| self.enemy_sunk[ship.index()])
    }

    /// All five enemy ships have been reported sunk by name.
    pub fn enemy_fleet_sunk(&self) -> bool {
        self.enemy_sunk.iter().all(|&sunk| sunk)
    }

    /// The opponent announced its fleet is destroyed.
    pub fn record_victory(&mut self) {
        self.opponent_conceded = true;
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.fleet_destroyed {
            GameStatus::Lost
        } else if self.opponent_conceded {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
