use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order, longest first.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Cruiser,
    ShipType::Submarine,
    ShipType::Destroyer,
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Separates the fields of a wire message.
pub const FIELD_DELIMITER: char = '|';
/// Separates row and column inside the coordinate field.
pub const COORD_DELIMITER: char = ',';

pub const DEFAULT_PORT: u16 = 12345;

/// Longest wire line accepted by the TCP transport, newline included.
pub const MAX_LINE_LEN: usize = 1024;

/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// How a shot at an already-resolved cell is answered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatShotPolicy {
    /// Always answer `MISS`, whatever the cell holds.
    #[default]
    ReportMiss,
    /// Re-report what the cell holds: `MISS`, `HIT` or `SUNK`.
    ReportStored,
}
