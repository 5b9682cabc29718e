//! Game phase and turn outcome types.

use crate::player::PlayerId;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players are taking turns.
    InProgress,
    /// A player has emptied their hand.
    Finished,
}

/// Result of an accepted move or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The turn passed to the given player.
    Next(PlayerId),
    /// The acting player emptied their hand and won.
    Won(PlayerId),
}
