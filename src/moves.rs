//! Legal-move calculation.

use alloc::vec::Vec;

use crate::board::Board;
use crate::card::{Card, OPENING_CARD};

/// Returns the cards in `hand` that may be played on `board`.
///
/// On the opening move only [`OPENING_CARD`] is playable. Otherwise a seven
/// is playable when its suit has not been opened, and any other card is
/// playable when it sits directly below or above its suit's run.
///
/// The result keeps the order of `hand`.
#[must_use]
pub fn legal_moves(board: &Board, hand: &[Card], is_opening_move: bool) -> Vec<Card> {
    if is_opening_move {
        return hand
            .iter()
            .copied()
            .filter(|&card| card == OPENING_CARD)
            .collect();
    }

    hand.iter()
        .copied()
        .filter(|&card| board.accepts(card))
        .collect()
}

/// Returns whether the hand has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, hand: &[Card], is_opening_move: bool) -> bool {
    if is_opening_move {
        return hand.contains(&OPENING_CARD);
    }
    hand.iter().any(|&card| board.accepts(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn opening_move_only_allows_seven_of_hearts() {
        let board = Board::new();
        let hand = [
            card(Rank::Seven, Suit::Spades),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ];
        assert_eq!(legal_moves(&board, &hand, true), [OPENING_CARD]);

        let without = [card(Rank::Seven, Suit::Spades)];
        assert!(legal_moves(&board, &without, true).is_empty());
        assert!(!has_legal_move(&board, &without, true));
    }

    #[test]
    fn sevens_and_neighbours_are_legal() {
        let mut board = Board::new();
        board.place(card(Rank::Seven, Suit::Hearts)).unwrap();
        board.place(card(Rank::Six, Suit::Hearts)).unwrap();

        let hand = [
            card(Rank::Five, Suit::Hearts),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Four, Suit::Hearts),
        ];

        assert_eq!(
            legal_moves(&board, &hand, false),
            [
                card(Rank::Five, Suit::Hearts),
                card(Rank::Eight, Suit::Hearts),
                card(Rank::Seven, Suit::Clubs),
            ]
        );
        assert!(has_legal_move(&board, &hand, false));
    }

    #[test]
    fn empty_hand_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, &[], false).is_empty());
        assert!(!has_legal_move(&board, &[], false));
    }
}
