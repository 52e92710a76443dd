#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::{KnowledgeGrid, OwnGrid},
    config::BOARD_SIZE,
    fleet::FleetHits,
    game::GameEngine,
};

const N: usize = BOARD_SIZE as usize;

pub const LEGEND: &str = "Legend: ~ water, ? unknown, X hit, O miss, letters = ships";

fn header(out: &mut String) {
    out.push_str("  ");
    for c in 0..N {
        let _ = write!(out, "{} ", c);
    }
    out.push('\n');
}

/// Own grid with ships revealed.
pub fn render_own_grid(grid: &OwnGrid) -> String {
    let mut out = String::new();
    header(&mut out);
    for r in 0..N {
        let _ = write!(out, "{} ", r);
        for c in 0..N {
            let ch = grid.cell(r, c).map(|cell| cell.symbol()).unwrap_or(' ');
            let _ = write!(out, "{} ", ch);
        }
        out.push('\n');
    }
    out
}

/// What is known of the opponent's grid.
pub fn render_knowledge(grid: &KnowledgeGrid) -> String {
    let mut out = String::new();
    header(&mut out);
    for r in 0..N {
        let _ = write!(out, "{} ", r);
        for c in 0..N {
            let ch = grid.get(r, c).map(|k| k.symbol()).unwrap_or(' ');
            let _ = write!(out, "{} ", ch);
        }
        out.push('\n');
    }
    out
}

/// One line per ship: `hits/length`, or `SUNK`.
pub fn render_fleet_status(fleet: &FleetHits) -> String {
    let mut out = String::new();
    for (ship, hits) in fleet.iter() {
        if fleet.is_sunk(ship) {
            let _ = writeln!(out, "  {:<10} SUNK", ship.wire_name());
        } else {
            let _ = writeln!(out, "  {:<10} {}/{}", ship.wire_name(), hits, ship.length());
        }
    }
    out
}

pub fn print_own_view(engine: &GameEngine) {
    println!("\n=== YOUR GRID ===");
    print!("{}", render_own_grid(engine.own_grid()));
    println!("\nYour fleet:");
    print!("{}", render_fleet_status(engine.fleet()));
}

pub fn print_enemy_view(engine: &GameEngine) {
    println!("\n=== ENEMY WATERS ===");
    print!("{}", render_knowledge(engine.knowledge()));
    println!("{}", LEGEND);
}
