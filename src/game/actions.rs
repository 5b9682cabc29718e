use alloc::format;

use crate::card::{Card, OPENING_CARD};
use crate::error::{MoveError, PassError};
use crate::moves::has_legal_move;
use crate::player::PlayerId;

use super::{GameState, Outcome};

impl GameState {
    /// Plays `card` from the hand of `player_id`.
    ///
    /// Checks run in this order: the game is not over, it is the player's
    /// turn, the player holds the card, the opening rule, and finally the
    /// board sequencing rules. The card leaves the hand only once it is on
    /// the board, so a rejected move changes nothing.
    ///
    /// When the hand becomes empty the player wins and the turn pointer stays
    /// where it is. Otherwise the turn moves to the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, the
    /// player does not hold the card, or the card cannot be placed.
    pub fn apply_move(&mut self, player_id: PlayerId, card: Card) -> Result<Outcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        let seat = self.seat_on_turn(player_id).ok_or(MoveError::NotYourTurn)?;

        if !self.players[seat].holds(card) {
            return Err(MoveError::CardNotInHand);
        }

        if self.is_opening_move() && card != OPENING_CARD {
            return Err(MoveError::OpeningCardRequired);
        }

        // The card is held; `place` leaves the board untouched on error.
        self.board.place(card)?;
        self.players[seat].take(card);

        let player = &self.players[seat];
        if player.hand().is_empty() {
            self.winner = Some(player.id);
            self.last_action = format!("{} wins!", player.name);
            tracing::info!(winner = %player.id, turn = self.turn_number, "game won");
            return Ok(Outcome::Won(player.id));
        }

        self.last_action = format!("{} played {card}", player.name);
        tracing::debug!(player = %player_id, %card, turn = self.turn_number, "card played");

        self.advance();
        Ok(Outcome::Next(self.players[self.current_turn].id))
    }

    /// Passes the turn of `player_id`.
    ///
    /// Passing is only allowed when the player has no legal move.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, or
    /// the player holds a playable card.
    pub fn apply_pass(&mut self, player_id: PlayerId) -> Result<Outcome, PassError> {
        if self.winner.is_some() {
            return Err(PassError::GameOver);
        }

        let seat = self.seat_on_turn(player_id).ok_or(PassError::NotYourTurn)?;

        let player = &self.players[seat];
        if has_legal_move(&self.board, player.hand(), self.is_opening_move()) {
            return Err(PassError::CannotPass);
        }

        self.last_action = format!("{} passed", player.name);
        tracing::debug!(player = %player_id, turn = self.turn_number, "turn passed");

        self.advance();
        Ok(Outcome::Next(self.players[self.current_turn].id))
    }
}
