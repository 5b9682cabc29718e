//! AI move selection.
//!
//! Every tier starts from the legal moves of the seat and only picks among
//! them, so an AI decision is always accepted by the state machine.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{Card, Rank};
use crate::game::GameState;
use crate::moves::legal_moves;
use crate::player::Player;

/// AI strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum Difficulty {
    /// Plays a random legal card.
    Easy,
    /// Opens new suits first, otherwise random.
    #[default]
    Medium,
    /// Plays to keep its own options open.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty name. Unknown names map to [`Difficulty::Medium`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            n if n.eq_ignore_ascii_case("easy") => Self::Easy,
            n if n.eq_ignore_ascii_case("hard") => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Lowercase name of the difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// What an AI seat decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDecision {
    /// Play this card.
    Play(Card),
    /// No legal move; pass.
    Pass,
}

/// Picks a move for `player` at the given difficulty.
///
/// Returns [`AiDecision::Pass`] exactly when the player has no legal move.
pub fn choose_move<R: Rng + ?Sized>(
    state: &GameState,
    player: &Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> AiDecision {
    let legal = legal_moves(state.board(), player.hand(), state.is_opening_move());
    if legal.is_empty() {
        return AiDecision::Pass;
    }

    let pick = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => legal.iter().copied().find(|card| card.is_anchor()),
        Difficulty::Hard => hard_pick(state, player.hand(), &legal),
    };

    pick.or_else(|| legal.choose(rng).copied())
        .map_or(AiDecision::Pass, AiDecision::Play)
}

fn hard_pick(state: &GameState, hand: &[Card], legal: &[Card]) -> Option<Card> {
    let anchors: Vec<Card> = legal.iter().copied().filter(|card| card.is_anchor()).collect();
    if anchors.len() > 1 {
        return best_by(&anchors, |card| suit_count(hand, card));
    }

    let extenders: Vec<Card> = legal.iter().copied().filter(|card| !card.is_anchor()).collect();
    let best = best_by(&extenders, |card| unlock_score(state, hand, card))?;
    (unlock_score(state, hand, best) > 0).then_some(best)
}

/// Highest-scoring card, the earliest one on ties.
fn best_by(cards: &[Card], score: impl Fn(Card) -> usize) -> Option<Card> {
    let mut best: Option<(Card, usize)> = None;
    for &card in cards {
        let value = score(card);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((card, value));
        }
    }
    best.map(|(card, _)| card)
}

fn suit_count(hand: &[Card], card: Card) -> usize {
    hand.iter().filter(|held| held.suit == card.suit).count()
}

/// Two points for each held card that playing `card` would make playable.
fn unlock_score(state: &GameState, hand: &[Card], card: Card) -> usize {
    let run = state.board().run(card.suit);
    let outward = if run.next_low() == Some(card.rank) {
        card.rank.value().checked_sub(1)
    } else {
        Some(card.rank.value() + 1)
    };

    outward
        .and_then(Rank::from_value)
        .map(|rank| Card::new(rank, card.suit))
        .map_or(0, |next| {
            2 * hand.iter().filter(|&&held| held == next).count()
        })
}

