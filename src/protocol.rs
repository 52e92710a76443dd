//! Line-oriented wire messages exchanged between the two peers.
//!
//! Every message is one line of text: a keyword, then fields separated by
//! [`FIELD_DELIMITER`]; coordinates are `row` and `col` separated by
//! [`COORD_DELIMITER`]. Neither delimiter is ever escaped.
//!
//! ```text
//! SHOOT|4,5
//! HIT|4,5
//! MISS|4,5
//! SUNK|2,3|CRUISER
//! GAME_OVER
//! READY
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use crate::config::{COORD_DELIMITER, FIELD_DELIMITER};

pub const SHOOT: &str = "SHOOT";
pub const HIT: &str = "HIT";
pub const MISS: &str = "MISS";
pub const SUNK: &str = "SUNK";
pub const GAME_OVER: &str = "GAME_OVER";
pub const READY: &str = "READY";

/// Messages exchanged between peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Fire at the given cell of the receiver's grid.
    Shoot { row: u8, col: u8 },
    /// The shot at (`row`, `col`) hit a ship.
    Hit { row: u8, col: u8 },
    /// The shot at (`row`, `col`) hit water.
    Miss { row: u8, col: u8 },
    /// The shot at (`row`, `col`) sank a ship, optionally named.
    Sunk {
        row: u8,
        col: u8,
        ship: Option<String>,
    },
    /// The sender's fleet is destroyed.
    GameOver,
    /// The sender has placed its fleet and is ready to play.
    Ready,
    /// Unrecognised keyword, kept verbatim.
    Other(String),
}

/// Errors raised while decoding a wire line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Line was empty or only whitespace.
    Empty,
    /// A coordinate-carrying message had no coordinate field.
    MissingCoordinates { kind: String },
    /// The coordinate field did not split into exactly two parts.
    BadCoordinateCount { field: String },
    /// A coordinate was not an unsigned 8-bit integer.
    BadInteger { value: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Empty => write!(f, "empty message line"),
            CodecError::MissingCoordinates { kind } => {
                write!(f, "{} message without coordinate field", kind)
            }
            CodecError::BadCoordinateCount { field } => {
                write!(f, "coordinate field {:?} is not row{}col", field, COORD_DELIMITER)
            }
            CodecError::BadInteger { value } => write!(f, "invalid coordinate {:?}", value),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

impl Message {
    /// Keyword that leads the encoded line.
    pub fn kind(&self) -> &str {
        match self {
            Message::Shoot { .. } => SHOOT,
            Message::Hit { .. } => HIT,
            Message::Miss { .. } => MISS,
            Message::Sunk { .. } => SUNK,
            Message::GameOver => GAME_OVER,
            Message::Ready => READY,
            Message::Other(token) => token,
        }
    }

    /// Encode as a single wire line, without the trailing newline.
    pub fn encode(&self) -> String {
        match self {
            Message::Shoot { row, col } | Message::Hit { row, col } | Message::Miss { row, col } => {
                format!("{}{}{}{}{}", self.kind(), FIELD_DELIMITER, row, COORD_DELIMITER, col)
            }
            Message::Sunk { row, col, ship } => {
                let mut line = format!("{}{}{}{}{}", SUNK, FIELD_DELIMITER, row, COORD_DELIMITER, col);
                if let Some(ship) = ship {
                    line.push(FIELD_DELIMITER);
                    line.push_str(ship);
                }
                line
            }
            Message::GameOver | Message::Ready | Message::Other(_) => self.kind().to_string(),
        }
    }

    /// Decode one wire line. Surrounding whitespace, including a trailing
    /// `\r\n`, is ignored.
    pub fn decode(line: &str) -> Result<Self, CodecError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CodecError::Empty);
        }
        let mut fields = line.split(FIELD_DELIMITER);
        // split always yields at least one item
        let keyword = fields.next().unwrap_or_default();

        if keyword.eq_ignore_ascii_case(GAME_OVER) {
            return Ok(Message::GameOver);
        }
        if keyword.eq_ignore_ascii_case(READY) {
            return Ok(Message::Ready);
        }
        let kind = [SHOOT, HIT, MISS, SUNK]
            .into_iter()
            .find(|k| keyword.eq_ignore_ascii_case(k));
        let Some(kind) = kind else {
            return Ok(Message::Other(keyword.to_string()));
        };

        let coords = fields.next().ok_or_else(|| CodecError::MissingCoordinates {
            kind: kind.to_string(),
        })?;
        let (row, col) = parse_coords(coords)?;
        let msg = match kind {
            SHOOT => Message::Shoot { row, col },
            HIT => Message::Hit { row, col },
            MISS => Message::Miss { row, col },
            _ => {
                let ship = fields
                    .next()
                    .filter(|name| !name.is_empty())
                    .map(ToString::to_string);
                Message::Sunk { row, col, ship }
            }
        };
        Ok(msg)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn parse_coords(field: &str) -> Result<(u8, u8), CodecError> {
    let mut parts = field.split(COORD_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => Ok((parse_u8(row)?, parse_u8(col)?)),
        _ => Err(CodecError::BadCoordinateCount {
            field: field.to_string(),
        }),
    }
}

fn parse_u8(value: &str) -> Result<u8, CodecError> {
    value.parse().map_err(|_| CodecError::BadInteger {
        value: value.to_string(),
    })
}
