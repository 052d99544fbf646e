//! End-of-game outcome resolution.
//!
//! Runs once per game completion, over the final scores. A tie is carried
//! as the full set of players at the maximum score, so 3- and 4-way ties
//! are represented faithfully rather than collapsed to a flag.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single player with the strictly highest score.
    Winner(PlayerId),
    /// Two or more players tied for the maximum score.
    Tie(Vec<PlayerId>),
}

impl Outcome {
    /// Check whether a player won or shares the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            Outcome::Winner(p) => *p == player,
            Outcome::Tie(ps) => ps.contains(&player),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{p} wins"),
            Outcome::Tie(ps) => {
                write!(f, "tie between ")?;
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                Ok(())
            }
        }
    }
}

/// Resolve the outcome from final scores: a linear scan for the maximum,
/// then every player attaining it.
#[must_use]
pub fn resolve(scores: &PlayerMap<u32>) -> Outcome {
    let max = scores.iter().map(|(_, &score)| score).max().unwrap_or(0);
    let leaders: Vec<PlayerId> = scores
        .iter()
        .filter(|(_, &score)| score == max)
        .map(|(player, _)| player)
        .collect();

    if leaders.len() == 1 {
        Outcome::Winner(leaders[0])
    } else {
        Outcome::Tie(leaders)
    }
}
