//! Core engine types: players, per-player storage, errors.
//!
//! These are the building blocks shared by the grid factory, the game
//! engine, and the winner resolver.

pub mod error;
pub mod player;

pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
