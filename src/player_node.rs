#![cfg(feature = "std")]

//! Turn coordinator: session bootstrap and the alternating shot exchange.

use std::fmt;

use log::{debug, info, warn};

use crate::{
    common::GridError,
    config::BOARD_SIZE,
    game::{GameEngine, GameStatus, ShotReport},
    player::Player,
    protocol::{CodecError, Message},
    ship::ShipType,
    transport::Transport,
};

/// How this peer joined the session. Fixes who shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Accepted the connection; shoots first.
    Host,
    /// Dialed in; answers first.
    Guest,
}

impl Role {
    pub fn first_turn(self) -> Turn {
        match self {
            Role::Host => Turn::Mine,
            Role::Guest => Turn::Theirs,
        }
    }
}

/// Who acts in the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Mine,
    Theirs,
}

impl Turn {
    pub fn flip(self) -> Self {
        match self {
            Turn::Mine => Turn::Theirs,
            Turn::Theirs => Turn::Mine,
        }
    }
}

/// Normal end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
}

/// Abnormal end of a session.
#[derive(Debug)]
pub enum SessionError {
    /// A received line failed to decode.
    Malformed(CodecError),
    /// A well-formed message arrived that the current state does not accept.
    UnexpectedMessage { expected: &'static str, got: String },
    /// A result message named a different cell than the shot just sent.
    CoordinateMismatch {
        sent: (usize, usize),
        got: (usize, usize),
    },
    /// A coordinate was out of range or already used.
    Grid(GridError),
    /// The local input source failed.
    Input(anyhow::Error),
    /// The connection failed or closed.
    Transport(anyhow::Error),
}

impl SessionError {
    /// Short name of the failure kind, for user-facing reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Malformed(_) => "malformed message",
            SessionError::UnexpectedMessage { .. } => "unexpected message",
            SessionError::CoordinateMismatch { .. } => "coordinate mismatch",
            SessionError::Grid(_) => "invalid coordinates",
            SessionError::Input(_) => "input failure",
            SessionError::Transport(_) => "transport failure",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Malformed(e) => write!(f, "malformed message: {}", e),
            SessionError::UnexpectedMessage { expected, got } => {
                write!(f, "expected {}, got {:?}", expected, got)
            }
            SessionError::CoordinateMismatch { sent, got } => write!(
                f,
                "shot sent to ({}, {}) but result names ({}, {})",
                sent.0, sent.1, got.0, got.1
            ),
            SessionError::Grid(e) => write!(f, "{}", e),
            SessionError::Input(e) => write!(f, "input failed: {}", e),
            SessionError::Transport(e) => write!(f, "transport failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Malformed(e) => Some(e),
            SessionError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        SessionError::Grid(e)
    }
}

impl From<CodecError> for SessionError {
    fn from(e: CodecError) -> Self {
        SessionError::Malformed(e)
    }
}

/// One peer of a session: its player, game state and connection.
pub struct PlayerNode {
    player: Box<dyn Player>,
    engine: GameEngine,
    transport: Box<dyn Transport>,
    role: Role,
    turn: Turn,
    // last outgoing shot sank a ship the opponent did not name
    unnamed_sink: bool,
}

impl PlayerNode {
    pub fn new(
        player: Box<dyn Player>,
        engine: GameEngine,
        transport: Box<dyn Transport>,
        role: Role,
    ) -> Self {
        Self {
            player,
            engine,
            transport,
            role,
            turn: role.first_turn(),
            unnamed_sink: false,
        }
    }

    /// Exchange display names and `READY` lines. The host reads the guest's
    /// name first; the guest sends first. Returns the peer's name.
    pub async fn handshake(&mut self, name: &str) -> Result<String, SessionError> {
        let name = name.trim();
        let peer = match self.role {
            Role::Host => {
                let peer = self.recv_line().await?;
                self.send_line(name).await?;
                peer
            }
            Role::Guest => {
                self.send_line(name).await?;
                self.recv_line().await?
            }
        };
        let peer = peer.trim().to_string();
        info!("playing against {:?}", peer);

        self.send(Message::Ready).await?;
        match self.recv().await? {
            Message::Ready => Ok(peer),
            other => Err(unexpected("READY", &other)),
        }
    }

    /// Run turns until one side's fleet is destroyed.
    pub async fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        loop {
            self.player.handle_turn(&self.engine, self.turn);
            let finished = match self.turn {
                Turn::Mine => self.take_shot().await?,
                Turn::Theirs => self.answer_shot().await?,
            };
            if let Some(outcome) = finished {
                info!("session over: {:?}", outcome);
                return Ok(outcome);
            }
            self.turn = self.turn.flip();
        }
    }

    /// Handshake, then play to the end.
    pub async fn play(&mut self, name: &str) -> Result<SessionOutcome, SessionError> {
        self.handshake(name).await?;
        self.run().await
    }

    /// Send one shot and process the single reply.
    async fn take_shot(&mut self) -> Result<Option<SessionOutcome>, SessionError> {
        let (row, col) = self
            .player
            .select_target(&self.engine)
            .map_err(SessionError::Input)?;
        self.engine.note_attempt(row, col)?;
        // note_attempt bounds-checked both coordinates
        self.send(Message::Shoot {
            row: row as u8,
            col: col as u8,
        })
        .await?;

        let reply = self.recv().await?;
        let (coord, report) = match reply {
            Message::Miss { row, col } => ((row, col), ShotReport::Miss),
            Message::Hit { row, col } => ((row, col), ShotReport::Hit),
            Message::Sunk { row, col, ship } => ((row, col), ShotReport::Sunk(ship)),
            Message::GameOver => return Ok(Some(self.win())),
            other => return Err(unexpected("HIT, MISS, SUNK or GAME_OVER", &other)),
        };
        let got = (coord.0 as usize, coord.1 as usize);
        if got != (row, col) {
            return Err(SessionError::CoordinateMismatch {
                sent: (row, col),
                got,
            });
        }
        self.engine.record_outgoing_result(row, col, &report)?;
        self.player.handle_shot_result((row, col), &report);
        self.unnamed_sink = matches!(
            &report,
            ShotReport::Sunk(name) if name.as_deref().and_then(ShipType::from_wire_name).is_none()
        );

        if matches!(report, ShotReport::Sunk(_)) && self.engine.enemy_fleet_sunk() {
            // the loser follows its last SUNK with GAME_OVER
            return match self.recv().await? {
                Message::GameOver => Ok(Some(self.win())),
                other => Err(unexpected("GAME_OVER", &other)),
            };
        }
        Ok(None)
    }

    /// Receive one shot, resolve it and reply.
    async fn answer_shot(&mut self) -> Result<Option<SessionOutcome>, SessionError> {
        let (row, col) = match self.recv().await? {
            Message::Shoot { row, col } => (row, col),
            // a peer that leaves ship names off its SUNK replies can only
            // concede right after one of them
            Message::GameOver if self.unnamed_sink => {
                warn!("GAME_OVER arrived without a final SUNK naming the last ship");
                return Ok(Some(self.win()));
            }
            other => return Err(unexpected("SHOOT", &other)),
        };
        let (r, c) = (row as usize, col as usize);
        if r >= BOARD_SIZE as usize || c >= BOARD_SIZE as usize {
            return Err(GridError::OutOfRange { row: r, col: c }.into());
        }
        let outcome = self.engine.resolve_incoming_shot(r, c)?;
        let reply = self.engine.reply_for(row, col, &outcome);
        self.send(reply).await?;
        self.player.handle_opponent_shot((r, c), &outcome);

        if outcome.is_fleet_destroyed() {
            self.send(Message::GameOver).await?;
            return Ok(Some(SessionOutcome::Lost));
        }
        Ok(None)
    }

    fn win(&mut self) -> SessionOutcome {
        self.engine.record_victory();
        SessionOutcome::Won
    }

    async fn send(&mut self, msg: Message) -> Result<(), SessionError> {
        debug!("-> {}", msg);
        self.transport
            .send(&msg)
            .await
            .map_err(SessionError::Transport)
    }

    async fn recv(&mut self) -> Result<Message, SessionError> {
        let line = self.recv_line().await?;
        debug!("<- {}", line);
        Ok(Message::decode(&line)?)
    }

    async fn send_line(&mut self, line: &str) -> Result<(), SessionError> {
        self.transport
            .send_line(line)
            .await
            .map_err(SessionError::Transport)
    }

    async fn recv_line(&mut self) -> Result<String, SessionError> {
        self.transport
            .recv_line()
            .await
            .map_err(SessionError::Transport)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Whose turn it is.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current status of the underlying game engine.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Total number of shots this player has fired.
    pub fn shot_count(&self) -> usize {
        self.engine.attempted().len()
    }
}

fn unexpected(expected: &'static str, got: &Message) -> SessionError {
    SessionError::UnexpectedMessage {
        expected,
        got: got.encode(),
    }
}
