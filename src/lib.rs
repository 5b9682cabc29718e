//! A Sevens (Badam Satti) card game engine with optional `no_std` support.
//!
//! The deck is dealt among two to four players. Each suit is built outward
//! from its seven, one rank at a time, and players who cannot extend any run
//! must pass. The first player to empty their hand wins.
//!
//! [`GameState`] is the turn state machine. [`Room`] seats players and
//! drives AI seats, and [`Lobby`] keeps rooms behind per-room locks.
//!
//! # Example
//!
//! ```no_run
//! use sevens::{GameOptions, Lobby};
//!
//! let lobby = Lobby::new(GameOptions::default(), 42);
//! let (code, _host) = lobby.create_room("Ada");
//! let room = lobby.room(code).unwrap();
//! let mut room = room.lock();
//! room.add_ai("Bot").unwrap();
//! room.start().unwrap();
//! room.run_ai_turns().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod lobby;
pub mod moves;
pub mod options;
pub mod player;
pub mod room;
mod sync;

// Re-export main types
pub use ai::{AiDecision, Difficulty, choose_move};
pub use board::{Board, SuitRun};
pub use card::{
    ANCHOR_RANK, Card, DECK_SIZE, OPENING_CARD, ParseCardError, RANKS, Rank, SUITS, Suit,
};
pub use deck::{build_deck, deal, shuffle};
pub use error::{ChainError, JoinError, MoveError, PassError, QueryError, StartError};
pub use game::{GameState, Outcome, Phase, PlayerView, SeatView};
pub use lobby::{Lobby, RoomHandle};
pub use moves::{has_legal_move, legal_moves};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use room::{ParseRoomCodeError, Room, RoomCode, RoomStatus};
