//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Fewer players than the minimum.
    #[error("need at least {min} players")]
    InsufficientPlayers {
        /// Minimum number of players.
        min: u8,
    },
    /// More players than the maximum.
    #[error("at most {max} players can play")]
    TooManyPlayers {
        /// Maximum number of players.
        max: u8,
    },
    /// A game is already running or has finished.
    #[error("game already started")]
    GameAlreadyStarted,
    /// The deck holds the same card more than once.
    #[error("deck contains {card} more than once")]
    InvalidDeck {
        /// The first repeated card.
        card: Card,
    },
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No game has been started.
    #[error("game not in progress")]
    GameNotStarted,
    /// The game already has a winner.
    #[error("game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The player does not hold the card.
    #[error("you don't have this card")]
    CardNotInHand,
    /// The opening move must be the seven of hearts.
    #[error("the first move must be the 7 of hearts")]
    OpeningCardRequired,
    /// The seven of this suit is already on the board.
    #[error("7 already played for this suit")]
    AnchorAlreadyPlayed,
    /// The seven of this suit must be played first.
    #[error("must play 7 first for this suit")]
    AnchorNotPlayed,
    /// The card does not extend either end of the run.
    #[error("card must extend the sequence")]
    IllegalSequencePlay,
}

/// Errors that can occur when passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// No game has been started.
    #[error("game not in progress")]
    GameNotStarted,
    /// The game already has a winner.
    #[error("game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The player holds a playable card.
    #[error("you have playable cards - cannot pass")]
    CannotPass,
}

/// Errors that can occur when looking at a player's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No game has been started.
    #[error("game not found")]
    GameNotStarted,
    /// No seat has this player id.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when taking a seat in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// No room has this code.
    #[error("room not found")]
    RoomNotFound,
    /// The room is no longer accepting players.
    #[error("game already in progress")]
    GameAlreadyStarted,
    /// Every seat is taken.
    #[error("room is full")]
    RoomFull,
    /// Another seat already uses this name.
    #[error("name already taken in this room")]
    NameTaken,
}

/// Errors that can occur while running AI seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The AI loop hit its turn limit without reaching a human seat or a
    /// winner.
    #[error("AI turn limit of {limit} reached")]
    LimitExceeded {
        /// Configured limit.
        limit: usize,
    },
    /// An AI play was rejected.
    #[error("AI move rejected: {0}")]
    Move(#[from] MoveError),
    /// An AI pass was rejected.
    #[error("AI pass rejected: {0}")]
    Pass(#[from] PassError),
}
