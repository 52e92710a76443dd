use crate::{
    game::{GameEngine, ShotOutcome, ShotReport},
    player_node::Turn,
};

/// Source of targets and sink for game events, driven by the turn loop.
pub trait Player: Send {
    /// Choose the next target. Must return an in-range coordinate that is not
    /// in `engine.attempted()`; invalid input is handled here, never sent.
    fn select_target(&mut self, engine: &GameEngine) -> anyhow::Result<(usize, usize)>;

    /// Called at the start of every turn.
    fn handle_turn(&mut self, _engine: &GameEngine, _turn: Turn) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _report: &ShotReport) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _outcome: &ShotOutcome) {}
}
