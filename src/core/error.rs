//! Error types for the engine.
//!
//! Only two things can fail: configuring a game with out-of-range
//! parameters, and asking for a winner before the game is over. Everything
//! else `claim_line` can receive (unknown id, already-drawn line, clicks
//! after the game ended) is a benign UI race and is reported as an ignored
//! move, not an error.

use thiserror::Error;

/// Errors raised by engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// Grid size or player count outside the supported range.
    ///
    /// Raised synchronously from `reset` with no partial state change.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// `winner()` called while the game is still in progress.
    #[error("game is not over")]
    GameNotOver,
}

impl GameError {
    /// Build an `InvalidConfiguration` from anything displayable.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Convenience alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::invalid_configuration("grid size 2 out of range 3-10");
        assert_eq!(
            format!("{}", err),
            "invalid configuration: grid size 2 out of range 3-10"
        );

        assert_eq!(format!("{}", GameError::GameNotOver), "game is not over");
    }
}
