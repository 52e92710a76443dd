#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, BufReader, Write};

use crate::{
    config::{BOARD_SIZE, COORD_DELIMITER},
    game::{GameEngine, ShotOutcome, ShotReport},
    player::Player,
    player_node::Turn,
    ui,
};

/// Why a typed target was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Not two comma-separated fields.
    Format,
    /// A field was not a number.
    NotANumber,
    OutOfRange,
    AlreadyAttempted,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::Format => write!(f, "Invalid format. Use: row,col"),
            TargetError::NotANumber => write!(f, "Please enter whole numbers"),
            TargetError::OutOfRange => {
                write!(f, "Out of range. Use numbers from 0 to {}", BOARD_SIZE - 1)
            }
            TargetError::AlreadyAttempted => write!(f, "You already fired at that cell"),
        }
    }
}

/// Parse a `row,col` target typed by the user and check it against the
/// cells already fired at.
pub fn parse_target(input: &str, engine: &GameEngine) -> Result<(usize, usize), TargetError> {
    let parts: Vec<&str> = input.trim().split(COORD_DELIMITER).collect();
    let [row, col] = parts.as_slice() else {
        return Err(TargetError::Format);
    };
    let row: i64 = row.trim().parse().map_err(|_| TargetError::NotANumber)?;
    let col: i64 = col.trim().parse().map_err(|_| TargetError::NotANumber)?;
    let range = 0..i64::from(BOARD_SIZE);
    if !range.contains(&row) || !range.contains(&col) {
        return Err(TargetError::OutOfRange);
    }
    let (row, col) = (row as usize, col as usize);
    if engine.is_attempted(row, col) {
        return Err(TargetError::AlreadyAttempted);
    }
    Ok((row, col))
}

/// Interactive console player.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
}

impl CliPlayer {
    /// Player reading targets from stdin.
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }

    /// Player reading targets from `input`.
    pub fn with_input<R: BufRead + Send + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn coord_to_string((r, c): (usize, usize)) -> String {
    format!("({},{})", r, c)
}

impl Player for CliPlayer {
    fn select_target(&mut self, engine: &GameEngine) -> anyhow::Result<(usize, usize)> {
        loop {
            print!("Enter target (row,col 0-{}): ", BOARD_SIZE - 1);
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed"));
            }
            match parse_target(&line, engine) {
                Ok(target) => return Ok(target),
                Err(e) => println!("{}", e),
            }
        }
    }

    fn handle_turn(&mut self, engine: &GameEngine, turn: Turn) {
        match turn {
            Turn::Mine => {
                println!("\n=== YOUR TURN ===");
                ui::print_enemy_view(engine);
                ui::print_own_view(engine);
            }
            Turn::Theirs => {
                println!("\n=== OPPONENT'S TURN ===");
                println!("Waiting for the opponent's shot...");
            }
        }
    }

    fn handle_shot_result(&mut self, coord: (usize, usize), report: &ShotReport) {
        let at = coord_to_string(coord);
        match report {
            ShotReport::Miss => println!("Miss at {}", at),
            ShotReport::Hit => println!("HIT at {}!", at),
            ShotReport::Sunk(Some(ship)) => println!("SUNK! {} at {}", ship, at),
            ShotReport::Sunk(None) => println!("SUNK! at {}", at),
        }
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), outcome: &ShotOutcome) {
        let at = coord_to_string(coord);
        match outcome {
            ShotOutcome::Miss => println!("The opponent missed at {}", at),
            ShotOutcome::Hit(ship) => println!("The opponent hit your {} at {}", ship, at),
            ShotOutcome::Sunk(ship) | ShotOutcome::FleetDestroyed(ship) => {
                println!("The opponent sank your {} at {}", ship, at)
            }
            ShotOutcome::AlreadyResolved(_) => {
                println!("The opponent fired at {} again", at)
            }
        }
    }
}
