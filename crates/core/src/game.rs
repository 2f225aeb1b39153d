//! The contract every core offers to the presentation layer.

use crate::schedule::Epoch;

/// A tick/input driven game core.
///
/// Implementations are total: every call leaves the core in a valid state,
/// and invalid input is a no-op reported by a `false` return.
pub trait GameCore {
    /// Discrete input events forwarded by the presentation layer
    type Input: Copy;
    /// Owned, render-ready view of the state
    type Snapshot: Clone;

    /// Begin a fresh round.
    fn start(&mut self);

    /// Abandon the current round and begin a new one.
    ///
    /// Bumps the epoch so continuations scheduled by the old round are
    /// discarded when they fire.
    fn reset(&mut self);

    /// Advance time by `elapsed_ms`. Returns true if the state changed.
    fn tick(&mut self, elapsed_ms: u32) -> bool;

    /// Apply one input event. Returns true if the state changed.
    fn apply_input(&mut self, input: Self::Input) -> bool;

    fn snapshot(&self) -> Self::Snapshot;

    fn epoch(&self) -> Epoch;

    /// True once the round has ended (game over or decided result).
    fn is_terminal(&self) -> bool;
}
