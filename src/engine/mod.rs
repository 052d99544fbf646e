//! Game engine: state ownership and the claim/reset/winner operations.

pub mod game;
pub mod observer;

pub use game::{
    ClaimResult, GameEngine, GameState, IgnoreReason, MoveOutcome, MAX_PLAYERS, MIN_PLAYERS,
};
pub use observer::{GameObserver, NullObserver};
