//! Notification hooks consumed by the presentation layer.
//!
//! All hooks are fire-and-forget with no return value: the engine is
//! correct without any observer attached, but a UI wires these to its
//! toasts and overlays. Every method has a no-op default, so observers
//! implement only what they display.

use crate::core::PlayerId;
use crate::outcome::Outcome;

/// Receiver for informational game events.
pub trait GameObserver {
    /// General informational message, e.g. on reset.
    fn on_info(&mut self, _message: &str) {}

    /// A player completed `count` boxes with a single line (1 or 2).
    fn on_boxes_completed(&mut self, _player: PlayerId, _count: usize) {}

    /// The last line was drawn and the game resolved to `outcome`.
    fn on_game_over(&mut self, _outcome: &Outcome) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
