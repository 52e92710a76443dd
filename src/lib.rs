#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod board;
mod cellset;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod player_node;
pub mod protocol;
mod ship;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use cellset::{CellSet, Cells};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::{place_fleet, random_placement};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use player_node::*;
pub use protocol::{CodecError, Message};
pub use ship::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
