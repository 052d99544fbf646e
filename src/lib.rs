//! # dots-boxes
//!
//! Rule engine for turn-based Dots and Boxes on a configurable square grid
//! with 2-4 players.
//!
//! The engine owns the whole game state and exposes three operations:
//! `reset` regenerates the grid and zeros the scores, `claim_line` applies
//! one move (drawing a line, crediting completed boxes, rotating the turn,
//! detecting the end of the game), and `winner` resolves the final outcome.
//! Rendering, animation, and notification display belong to the caller; it
//! reads state through read-only accessors and may attach a [`GameObserver`]
//! for toast-style events.
//!
//! ## Rules
//!
//! - Drawing the fourth side of a box claims it for the current player and
//!   grants an extra turn; a single line can claim two boxes at once.
//! - Otherwise the turn passes cyclically (player after the last is 1).
//! - The game ends when every line is drawn; the highest box count wins,
//!   and any number of players can tie for the maximum.
//!
//! ## Modules
//!
//! - `core`: player ids, per-player storage, error types
//! - `grid`: grid generation (dots, lines, boxes) and id-indexed lookups
//! - `engine`: the state aggregate and the claim/reset/winner operations
//! - `outcome`: end-of-game winner/tie resolution
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{GameEngine, LineId, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine.reset(3, 2)?;
//!
//! // Draw every line; the last move ends the game.
//! let ids: Vec<LineId> = engine
//!     .state()
//!     .unwrap()
//!     .lines()
//!     .iter()
//!     .map(|line| line.id)
//!     .collect();
//! for id in ids {
//!     engine.claim_line(id);
//! }
//!
//! assert!(engine.state().unwrap().game_over());
//! match engine.winner()? {
//!     Outcome::Winner(player) => println!("{player} wins"),
//!     Outcome::Tie(players) => println!("{} players tied", players.len()),
//! }
//! # Ok::<(), dots_boxes::GameError>(())
//! ```

pub mod core;
pub mod engine;
pub mod grid;
pub mod outcome;

// Re-export commonly used types
pub use crate::core::{GameError, PlayerId, PlayerMap, Result};

pub use crate::engine::{
    ClaimResult, GameEngine, GameObserver, GameState, IgnoreReason, MoveOutcome, NullObserver,
    MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::grid::{
    BoxCell, BoxId, Dot, Grid, Line, LineId, Orientation, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

pub use crate::outcome::{resolve, Outcome};
