// Decision engine entry points behind the HTTP handlers
//
// The Bot owns the immutable configuration and the optional decision log.
// Each move request gets its own grid and its own RNG; nothing mutable is
// shared between turns, so concurrent requests cannot corrupt each other.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Instant;

use crate::config::Config;
use crate::decision_log::DecisionLog;
use crate::grid::Grid;
use crate::search::{self, TurnContext};
use crate::types::{Board, Direction, GameState, Snake};

/// Snapshot violations that abort the turn before any scoring happens.
/// These are input-contract failures, not recoverable engine states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Board with a zero dimension; there is nowhere to move.
    DegenerateBoard { height: u32, width: u32 },
    /// Requesting snake has no body segments, so no head position exists.
    EmptyBody,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::DegenerateBoard { height, width } => {
                write!(f, "degenerate board dimensions {}x{}", width, height)
            }
            SnapshotError::EmptyBody => write!(f, "requesting snake has an empty body"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// One turn's outcome: the chosen direction plus every candidate score,
/// in descending score order.
#[derive(Debug, Clone)]
pub struct Decision {
    pub direction: Direction,
    pub score: i32,
    pub candidates: Vec<(Direction, i32)>,
}

/// Battlesnake bot: static configuration plus per-endpoint methods
pub struct Bot {
    config: Config,
    decision_log: DecisionLog,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    pub fn new(config: Config) -> Self {
        let decision_log = DecisionLog::open(&config.debug);
        Bot {
            config,
            decision_log,
        }
    }

    /// Display color for the start response; fixed at configuration time
    pub fn color(&self) -> &str {
        &self.config.server.color
    }

    /// Called when a game starts
    pub fn start(&self) {
        info!("GAME START");
    }

    /// Called when a game ends
    pub fn end(&self) {
        info!("GAME OVER");
    }

    /// Computes the move for one turn. Always yields a direction: any
    /// engine failure is converted here, at the transport boundary, into
    /// the default move so the game host never sees a protocol error.
    pub fn get_move(&self, state: &GameState) -> Direction {
        let started = Instant::now();
        let mut rng = StdRng::from_entropy();

        match self.decide(&state.board, &state.you, &mut rng) {
            Ok(decision) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                info!(
                    "Turn {}: chose {} (score: {}, time: {}ms)",
                    state.turn,
                    decision.direction.as_str(),
                    decision.score,
                    elapsed_ms
                );
                self.decision_log.record(state.turn, &decision, elapsed_ms);
                decision.direction
            }
            Err(e) => {
                warn!(
                    "Turn {}: snapshot rejected ({}), falling back to {}",
                    state.turn,
                    e,
                    Direction::Up.as_str()
                );
                Direction::Up
            }
        }
    }

    /// Core decision for one snapshot: validate, build the grid, project
    /// rival threats, then score all four moves in shuffled order. The
    /// RNG is injected so tests can pin the shuffle seed.
    pub fn decide<R: Rng>(
        &self,
        board: &Board,
        you: &Snake,
        rng: &mut R,
    ) -> Result<Decision, SnapshotError> {
        validate_snapshot(board, you)?;

        let mut grid = Grid::from_snapshot(board);
        grid.project_threats(board, you);
        let ctx = TurnContext::new(board, you, &self.config);

        // validate_snapshot guarantees a head exists.
        let head = you.body[0];
        let candidates = search::rank_moves(&mut grid, head, ctx, &self.config, rng);
        let (direction, score) = candidates[0];

        Ok(Decision {
            direction,
            score,
            candidates,
        })
    }
}

fn validate_snapshot(board: &Board, you: &Snake) -> Result<(), SnapshotError> {
    if board.height == 0 || board.width == 0 {
        return Err(SnapshotError::DegenerateBoard {
            height: board.height,
            width: board.width,
        });
    }
    if you.body.is_empty() {
        return Err(SnapshotError::EmptyBody);
    }
    Ok(())
}
