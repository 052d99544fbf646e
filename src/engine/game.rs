//! Game state and the engine operations: `reset`, `claim_line`, `winner`.
//!
//! The engine owns the single mutable `GameState` aggregate. The
//! presentation layer calls `claim_line` on user interaction and re-renders
//! from the read-only accessors; it never gets a mutable handle into the
//! line or box collections.
//!
//! ## State machine
//!
//! NotStarted -> InProgress (`reset`) -> InProgress (`claim_line`, loop)
//! -> Over (`claim_line` that draws the last line) -> InProgress (`reset`).
//!
//! All operations are synchronous, bounded computations over at most
//! O(size²) elements; single-threaded access is assumed.

use smallvec::SmallVec;
use tracing::debug;

use super::observer::{GameObserver, NullObserver};
use crate::core::{GameError, PlayerId, PlayerMap, Result};
use crate::grid::{BoxCell, BoxId, Grid, Line, LineId};
use crate::outcome::{resolve, Outcome};

/// Smallest supported player count.
pub const MIN_PLAYERS: u8 = 2;
/// Largest supported player count.
pub const MAX_PLAYERS: u8 = 4;

/// The aggregate game state, owned exclusively by the engine.
///
/// Created on `reset`, mutated only by `claim_line`, and replaced wholesale
/// by the next `reset`.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    player_count: u8,
    scores: PlayerMap<u32>,
    current_player: PlayerId,
    game_over: bool,
}

impl GameState {
    /// The grid dimension.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid.size()
    }

    /// Number of active players.
    #[must_use]
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    /// All lines, drawn or not.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        self.grid.lines()
    }

    /// All boxes, owned or not.
    #[must_use]
    pub fn boxes(&self) -> &[BoxCell] {
        self.grid.boxes()
    }

    /// The underlying grid, including dots for rendering.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Per-player box counts.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// True once every line is drawn.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

/// Why a `claim_line` call was ignored.
///
/// These are expected UI races (double-clicks, clicks landing after the
/// final move), not faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No game has been started yet.
    NotStarted,
    /// The game already ended.
    GameOver,
    /// The id does not resolve to a line on this grid.
    UnknownLine,
    /// The line was already drawn.
    AlreadyDrawn,
}

/// What a successfully applied move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The player who drew the line.
    pub player: PlayerId,
    /// The line that was drawn.
    pub line: LineId,
    /// Boxes newly completed by this move. A line borders at most two
    /// boxes, so this holds 0, 1, or 2 ids.
    pub completed_boxes: SmallVec<[BoxId; 2]>,
    /// Whether the turn passed to the next player. False exactly when at
    /// least one box was completed (the extra-turn rule).
    pub turn_passed: bool,
    /// Whether this move drew the last line.
    pub game_over: bool,
    /// The resolved outcome, present iff `game_over`.
    pub outcome: Option<Outcome>,
}

/// Result of a `claim_line` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimResult {
    /// The call was a no-op; state is unchanged.
    Ignored(IgnoreReason),
    /// The line was drawn and the state transitioned.
    Applied(MoveOutcome),
}

impl ClaimResult {
    /// True when the move was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ClaimResult::Applied(_))
    }

    /// The move outcome, if the move was applied.
    #[must_use]
    pub fn applied(&self) -> Option<&MoveOutcome> {
        match self {
            ClaimResult::Applied(outcome) => Some(outcome),
            ClaimResult::Ignored(_) => None,
        }
    }
}

/// The rule engine.
///
/// ## Example
///
/// ```
/// use dots_boxes::engine::GameEngine;
/// use dots_boxes::grid::LineId;
///
/// let mut engine = GameEngine::new();
/// engine.reset(3, 2)?;
///
/// let result = engine.claim_line(LineId::horizontal(0, 0));
/// assert!(result.is_applied());
/// # Ok::<(), dots_boxes::core::GameError>(())
/// ```
pub struct GameEngine {
    state: Option<GameState>,
    observer: Box<dyn GameObserver>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with no game started and no observer attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: None,
            observer: Box::new(NullObserver),
        }
    }

    /// Create an engine that reports events to `observer`.
    #[must_use]
    pub fn with_observer(observer: Box<dyn GameObserver>) -> Self {
        Self {
            state: None,
            observer,
        }
    }

    /// The current state, or `None` before the first `reset`.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Start (or restart) a game.
    ///
    /// Regenerates the grid, zeros all scores, and hands the first move to
    /// player 1. Fails with `InvalidConfiguration` when `grid_size` is
    /// outside `[3, 10]` or `player_count` outside `[2, 4]`; on failure the
    /// previous state, if any, is left untouched.
    pub fn reset(&mut self, grid_size: u8, player_count: u8) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::invalid_configuration(format!(
                "player count {player_count} out of range {MIN_PLAYERS}-{MAX_PLAYERS}"
            )));
        }

        let grid = Grid::generate(grid_size)?;

        self.state = Some(GameState {
            grid,
            player_count,
            scores: PlayerMap::with_value(player_count, 0),
            current_player: PlayerId::FIRST,
            game_over: false,
        });

        debug!(grid_size, player_count, "game reset");
        self.observer.on_info("Game reset! Player 1 starts.");

        Ok(())
    }

    /// Draw a line for the current player.
    ///
    /// Ignored (state unchanged) when no game is running, the game is over,
    /// the id is unknown, or the line is already drawn. Otherwise the line
    /// is drawn, any boxes it completes are credited to the current player,
    /// the turn advances unless a box was completed, and the game ends if
    /// this was the last line.
    pub fn claim_line(&mut self, line_id: LineId) -> ClaimResult {
        let Some(state) = self.state.as_mut() else {
            return ClaimResult::Ignored(IgnoreReason::NotStarted);
        };
        if state.game_over {
            return ClaimResult::Ignored(IgnoreReason::GameOver);
        }

        let player = state.current_player;
        match state.grid.line_mut(line_id) {
            None => return ClaimResult::Ignored(IgnoreReason::UnknownLine),
            Some(line) if line.drawn => return ClaimResult::Ignored(IgnoreReason::AlreadyDrawn),
            Some(line) => {
                line.drawn = true;
                line.owner = Some(player);
            }
        }

        // Completion check. Only the boxes bounded by the drawn line can
        // change state, and there are at most two of them.
        let adjacent: SmallVec<[usize; 2]> =
            state.grid.adjacent_boxes(line_id).iter().copied().collect();
        let mut completed_boxes: SmallVec<[BoxId; 2]> = SmallVec::new();

        for index in adjacent {
            if state.grid.boxes()[index].owner.is_none() && state.grid.box_complete(index) {
                let cell = state.grid.box_at_mut(index);
                cell.owner = Some(player);
                completed_boxes.push(cell.id);
                state.scores[player] += 1;
            }
        }

        // Extra-turn rule: completing a box keeps the turn.
        let turn_passed = completed_boxes.is_empty();
        if turn_passed {
            state.current_player = player.next(state.player_count);
        }

        let game_over = state.grid.all_drawn();
        let outcome = if game_over {
            state.game_over = true;
            Some(resolve(&state.scores))
        } else {
            None
        };

        debug!(
            line = %line_id,
            %player,
            completed = completed_boxes.len(),
            turn_passed,
            game_over,
            "line claimed"
        );

        if !completed_boxes.is_empty() {
            self.observer.on_boxes_completed(player, completed_boxes.len());
        }
        if let Some(outcome) = &outcome {
            self.observer.on_game_over(outcome);
        }

        ClaimResult::Applied(MoveOutcome {
            player,
            line: line_id,
            completed_boxes,
            turn_passed,
            game_over,
            outcome,
        })
    }

    /// Resolve the winner of a finished game.
    ///
    /// Fails with `GameNotOver` while the game is in progress (or before
    /// the first `reset`). Callers should guard on `game_over` rather than
    /// use this as control flow.
    pub fn winner(&self) -> Result<Outcome> {
        match &self.state {
            Some(state) if state.game_over => Ok(resolve(&state.scores)),
            _ => Err(GameError::GameNotOver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(grid_size: u8, player_count: u8) -> GameEngine {
        let mut engine = GameEngine::new();
        engine.reset(grid_size, player_count).unwrap();
        engine
    }

    #[test]
    fn test_reset_initial_state() {
        let engine = started(4, 3);
        let state = engine.state().unwrap();

        assert_eq!(state.grid_size(), 4);
        assert_eq!(state.player_count(), 3);
        assert_eq!(state.lines().len(), 24); // 2 * 4 * 3
        assert_eq!(state.boxes().len(), 9);
        assert_eq!(state.current_player(), PlayerId::FIRST);
        assert!(!state.game_over());
        for (_, &score) in state.scores().iter() {
            assert_eq!(score, 0);
        }
    }

    #[test]
    fn test_reset_rejects_bad_grid_size() {
        let mut engine = GameEngine::new();

        assert!(matches!(
            engine.reset(2, 2),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(engine.state().is_none());
    }

    #[test]
    fn test_reset_rejects_bad_player_count() {
        let mut engine = GameEngine::new();

        assert!(matches!(
            engine.reset(5, 5),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            engine.reset(5, 1),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_failed_reset_leaves_state_untouched() {
        let mut engine = started(3, 2);
        engine.claim_line(LineId::horizontal(0, 0));

        assert!(engine.reset(99, 2).is_err());
        assert!(engine.reset(3, 9).is_err());

        // Prior game still running, with the drawn line intact.
        let state = engine.state().unwrap();
        assert_eq!(state.grid_size(), 3);
        assert!(state.grid().line(LineId::horizontal(0, 0)).unwrap().drawn);
    }

    #[test]
    fn test_claim_before_start_is_ignored() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.claim_line(LineId::horizontal(0, 0)),
            ClaimResult::Ignored(IgnoreReason::NotStarted)
        );
    }

    #[test]
    fn test_claim_unknown_line_is_ignored() {
        let mut engine = started(3, 2);
        assert_eq!(
            engine.claim_line(LineId::horizontal(7, 7)),
            ClaimResult::Ignored(IgnoreReason::UnknownLine)
        );
        // State untouched: still player 1's turn.
        assert_eq!(engine.state().unwrap().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_double_claim_is_ignored() {
        let mut engine = started(3, 2);
        let id = LineId::vertical(1, 1);

        assert!(engine.claim_line(id).is_applied());
        assert_eq!(
            engine.claim_line(id),
            ClaimResult::Ignored(IgnoreReason::AlreadyDrawn)
        );

        // The line keeps its original owner.
        let state = engine.state().unwrap();
        assert_eq!(state.grid().line(id).unwrap().owner, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_plain_move_passes_turn() {
        let mut engine = started(3, 2);

        let result = engine.claim_line(LineId::horizontal(0, 0));
        let outcome = result.applied().unwrap();

        assert_eq!(outcome.player, PlayerId::new(1));
        assert!(outcome.completed_boxes.is_empty());
        assert!(outcome.turn_passed);
        assert!(!outcome.game_over);
        assert_eq!(engine.state().unwrap().current_player(), PlayerId::new(2));
    }

    #[test]
    fn test_turn_wraps_around_for_four_players() {
        let mut engine = started(5, 4);

        // Four non-completing moves cycle back to player 1.
        let moves = [
            LineId::horizontal(0, 0),
            LineId::horizontal(2, 0),
            LineId::horizontal(0, 4),
            LineId::horizontal(2, 4),
        ];
        for (i, id) in moves.into_iter().enumerate() {
            let state = engine.state().unwrap();
            assert_eq!(state.current_player(), PlayerId::new(i as u8 + 1));
            assert!(engine.claim_line(id).is_applied());
        }
        assert_eq!(engine.state().unwrap().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_completing_box_grants_extra_turn() {
        let mut engine = started(3, 2);
        let [top, right, bottom, left] = BoxId::new(0, 0).bounding_lines();

        engine.claim_line(top); // P1, turn passes
        engine.claim_line(right); // P2, turn passes
        engine.claim_line(bottom); // P1, turn passes
        let result = engine.claim_line(left); // P2 completes the box

        let outcome = result.applied().unwrap();
        assert_eq!(outcome.player, PlayerId::new(2));
        assert_eq!(outcome.completed_boxes.as_slice(), &[BoxId::new(0, 0)]);
        assert!(!outcome.turn_passed);

        let state = engine.state().unwrap();
        assert_eq!(state.current_player(), PlayerId::new(2)); // extra turn
        assert_eq!(state.scores()[PlayerId::new(2)], 1);
        assert_eq!(
            state.grid().box_cell(BoxId::new(0, 0)).unwrap().owner,
            Some(PlayerId::new(2))
        );
    }

    #[test]
    fn test_one_line_completes_two_boxes() {
        let mut engine = started(3, 2);

        // Draw everything around boxes (0,0) and (0,1) except their shared
        // middle line h-0-1.
        let shared = LineId::horizontal(0, 1);
        let mut perimeter: Vec<LineId> = Vec::new();
        for id in BoxId::new(0, 0)
            .bounding_lines()
            .into_iter()
            .chain(BoxId::new(0, 1).bounding_lines())
        {
            if id != shared && !perimeter.contains(&id) {
                perimeter.push(id);
            }
        }
        assert_eq!(perimeter.len(), 6);
        for id in perimeter {
            assert!(engine.claim_line(id).is_applied());
        }

        let mover = engine.state().unwrap().current_player();
        let result = engine.claim_line(shared);
        let outcome = result.applied().unwrap();

        assert_eq!(outcome.completed_boxes.len(), 2);
        assert!(!outcome.turn_passed);
        assert_eq!(engine.state().unwrap().scores()[mover], 2);
    }

    #[test]
    fn test_game_over_and_winner() {
        let mut engine = started(3, 2);

        // Drawing every line ends the game regardless of order.
        let ids: Vec<LineId> = engine
            .state()
            .unwrap()
            .lines()
            .iter()
            .map(|line| line.id)
            .collect();
        let mut last = None;
        for id in ids {
            let result = engine.claim_line(id);
            assert!(result.is_applied());
            last = Some(result);
        }

        let last = last.unwrap();
        let outcome = last.applied().unwrap();
        assert!(outcome.game_over);
        assert!(outcome.outcome.is_some());

        let state = engine.state().unwrap();
        assert!(state.game_over());
        let total: u32 = state.scores().iter().map(|(_, &s)| s).sum();
        assert_eq!(total, 4); // (3-1)^2 boxes all claimed

        assert_eq!(engine.winner().unwrap(), outcome.outcome.clone().unwrap());

        // Further claims are ignored once over.
        assert_eq!(
            engine.claim_line(LineId::horizontal(0, 0)),
            ClaimResult::Ignored(IgnoreReason::GameOver)
        );
    }

    #[test]
    fn test_winner_before_game_over_fails() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.winner(), Err(GameError::GameNotOver));

        engine.reset(3, 2).unwrap();
        assert_eq!(engine.winner(), Err(GameError::GameNotOver));

        engine.claim_line(LineId::horizontal(0, 0));
        assert_eq!(engine.winner(), Err(GameError::GameNotOver));
    }

    #[test]
    fn test_reset_after_game_over_restarts() {
        let mut engine = started(3, 2);
        let ids: Vec<LineId> = engine
            .state()
            .unwrap()
            .lines()
            .iter()
            .map(|line| line.id)
            .collect();
        for id in ids {
            engine.claim_line(id);
        }
        assert!(engine.state().unwrap().game_over());

        engine.reset(3, 2).unwrap();
        let state = engine.state().unwrap();
        assert!(!state.game_over());
        assert_eq!(state.current_player(), PlayerId::FIRST);
        assert!(state.lines().iter().all(|line| !line.drawn));
        assert!(state.boxes().iter().all(|cell| cell.owner.is_none()));
    }
}
