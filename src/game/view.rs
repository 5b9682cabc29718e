//! What one player is allowed to see of a game.

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::Board;
use crate::card::Card;
use crate::error::QueryError;
use crate::player::PlayerId;

use super::GameState;

/// Public information about a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeatView {
    /// Player identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Whether this player created the room.
    pub is_host: bool,
    /// Whether this seat is AI-controlled.
    pub is_ai: bool,
    /// Number of cards left in hand.
    pub cards_left: usize,
}

/// A game as seen from one seat: the viewer's own cards plus public
/// information about everyone else.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerView {
    /// The viewing player.
    pub player_id: PlayerId,
    /// The viewer's hand.
    pub hand: Vec<Card>,
    /// Cards in the viewer's hand that are playable right now.
    pub playable: Vec<Card>,
    /// The board.
    pub board: Board,
    /// Every seat in turn order, the viewer included.
    pub seats: Vec<SeatView>,
    /// The player whose turn it is.
    pub current_player: Option<PlayerId>,
    /// Turn counter.
    pub turn_number: u32,
    /// The winner, if the game is over.
    pub winner: Option<PlayerId>,
    /// Narration of the last action.
    pub last_action: String,
}

impl PlayerView {
    /// Returns whether it is the viewer's turn.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.winner.is_none() && self.current_player == Some(self.player_id)
    }

    /// Returns whether the viewer must pass.
    #[must_use]
    pub fn must_pass(&self) -> bool {
        self.is_my_turn() && self.playable.is_empty()
    }
}

impl GameState {
    /// Builds the view of the game for `player_id`.
    ///
    /// Other players' hands are reduced to card counts.
    ///
    /// # Errors
    ///
    /// Returns an error if no seat has this player id.
    pub fn view_for(&self, player_id: PlayerId) -> Result<PlayerView, QueryError> {
        let player = self.player(player_id).ok_or(QueryError::PlayerNotFound)?;
        let playable = self.playable_for(player_id)?;

        let seats = self
            .players
            .iter()
            .map(|seat| SeatView {
                id: seat.id,
                name: seat.name.clone(),
                is_host: seat.is_host,
                is_ai: seat.is_ai,
                cards_left: seat.cards_left(),
            })
            .collect();

        Ok(PlayerView {
            player_id,
            hand: player.hand().to_vec(),
            playable,
            board: self.board.clone(),
            seats,
            current_player: self.current_player().map(|current| current.id),
            turn_number: self.turn_number,
            winner: self.winner,
            last_action: self.last_action.clone(),
        })
    }
}
