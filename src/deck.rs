//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};

/// Builds the 52-card deck, suits in catalogue order and ranks Ace to King
/// within each suit.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Shuffles the deck in place with a uniform permutation.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Deals the deck round-robin: card `i` goes to hand `i % players`.
///
/// Returns one hand per player. Hand sizes differ by at most one. With zero
/// players nothing is dealt and an empty list is returned.
#[must_use]
pub fn deal(deck: Vec<Card>, players: usize) -> Vec<Vec<Card>> {
    if players == 0 {
        return Vec::new();
    }

    let mut hands: Vec<Vec<Card>> = (0..players)
        .map(|_| Vec::with_capacity(deck.len() / players + 1))
        .collect();

    for (i, card) in deck.into_iter().enumerate() {
        hands[i % players].push(card);
    }

    hands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_order_is_fixed() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(crate::Rank::Ace, crate::Suit::Hearts));
        assert_eq!(deck[12], Card::new(crate::Rank::King, crate::Suit::Hearts));
        assert_eq!(deck[13], Card::new(crate::Rank::Ace, crate::Suit::Spades));
        assert_eq!(deck[51], Card::new(crate::Rank::King, crate::Suit::Clubs));
    }

    #[test]
    fn three_way_deal_sizes() {
        let hands = deal(build_deck(), 3);
        let sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
        assert_eq!(sizes, [18, 17, 17]);
    }
}
