//! Turn state machine and game state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::board::Board;
use crate::card::{Card, OPENING_CARD};
use crate::deck::{build_deck, deal, shuffle};
use crate::error::{QueryError, StartError};
use crate::moves::legal_moves;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

mod actions;
pub mod state;
pub mod view;

pub use state::{Outcome, Phase};
pub use view::{PlayerView, SeatView};

/// The state of one game of Sevens.
///
/// A `GameState` exists from the deal until the end of the game. Seat order
/// is fixed at the deal. Once a winner is set the state is terminal and
/// every further move or pass is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current_turn: usize,
    turn_number: u32,
    winner: Option<PlayerId>,
    last_action: String,
    strict_opening: bool,
}

impl GameState {
    /// Shuffles a fresh deck, deals it and seats the holder of the seven of
    /// hearts first.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of players is outside the configured
    /// range.
    pub fn start<R: Rng + ?Sized>(
        players: Vec<Player>,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        check_seats(players.len(), options)?;

        let mut deck = build_deck();
        shuffle(&mut deck, rng);

        Self::start_with_deck(players, deck, options)
    }

    /// Deals `deck` as given, without shuffling.
    ///
    /// The deck does not need to be complete, which lets callers replay a
    /// recorded deal or set up a specific position. If nobody holds the seven
    /// of hearts, seat 0 goes first.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of players is outside the configured
    /// range or the deck holds a card twice.
    pub fn start_with_deck(
        mut players: Vec<Player>,
        deck: Vec<Card>,
        options: &GameOptions,
    ) -> Result<Self, StartError> {
        check_seats(players.len(), options)?;
        check_deck(&deck)?;

        let hands = deal(deck, players.len());
        for (player, hand) in players.iter_mut().zip(hands) {
            player.set_hand(hand);
        }

        let holder = players
            .iter()
            .position(|player| player.holds(OPENING_CARD));
        let first = holder.unwrap_or(0);
        let last_action = match holder {
            Some(_) => format!("{} goes first (has {OPENING_CARD})", players[first].name),
            None => format!("{} goes first", players[first].name),
        };

        tracing::info!(
            players = players.len(),
            first = %players[first].id,
            "game started"
        );

        Ok(Self {
            board: Board::new(),
            players,
            current_turn: first,
            turn_number: 1,
            winner: None,
            last_action,
            strict_opening: options.strict_opening,
        })
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    /// Returns the seat index whose turn it is.
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn)
    }

    /// Returns the turn counter, starting at 1.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Returns the winner, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Returns the narration of the last action.
    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    /// Returns the game phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Returns whether the game has a winner.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns whether the next move is the restricted opening move.
    #[must_use]
    pub const fn is_opening_move(&self) -> bool {
        self.strict_opening && self.turn_number == 1
    }

    /// Returns the cards the given player could play right now.
    ///
    /// This does not check whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns an error if no seat has this player id.
    pub fn playable_for(&self, player_id: PlayerId) -> Result<Vec<Card>, QueryError> {
        let player = self.player(player_id).ok_or(QueryError::PlayerNotFound)?;
        Ok(legal_moves(
            &self.board,
            player.hand(),
            self.is_opening_move(),
        ))
    }

    /// Returns the seat index of `player_id` if it is their turn.
    fn seat_on_turn(&self, player_id: PlayerId) -> Option<usize> {
        self.players
            .get(self.current_turn)
            .filter(|player| player.id == player_id)
            .map(|_| self.current_turn)
    }

    /// Moves the turn to the next seat.
    fn advance(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
        self.turn_number += 1;
    }
}

fn check_seats(count: usize, options: &GameOptions) -> Result<(), StartError> {
    if count < usize::from(options.min_players.max(1)) {
        return Err(StartError::InsufficientPlayers {
            min: options.min_players,
        });
    }
    if count > usize::from(options.max_players) {
        return Err(StartError::TooManyPlayers {
            max: options.max_players,
        });
    }
    Ok(())
}

fn check_deck(deck: &[Card]) -> Result<(), StartError> {
    let mut seen = HashSet::with_capacity(deck.len());
    match deck.iter().find(|&&card| !seen.insert(card)) {
        Some(&card) => Err(StartError::InvalidDeck { card }),
        None => Ok(()),
    }
}
