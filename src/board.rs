//! Per-suit run tracking on the shared board.

use alloc::vec::Vec;

use crate::card::{Card, Rank, SUITS, Suit};
use crate::error::MoveError;

/// The contiguous run of one suit.
///
/// Before the anchor is played both extremes are unset and no cards are on
/// the board. Afterwards the extremes start at the anchor and only move
/// outward one rank at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitRun {
    anchor_played: bool,
    low: Option<Rank>,
    high: Option<Rank>,
    cards: Vec<Card>,
}

impl SuitRun {
    /// Creates an empty run.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchor_played: false,
            low: None,
            high: None,
            cards: Vec::new(),
        }
    }

    /// Returns whether the anchor has been played.
    #[must_use]
    pub const fn anchor_played(&self) -> bool {
        self.anchor_played
    }

    /// Lowest rank on the board, if the run is open.
    #[must_use]
    pub const fn low(&self) -> Option<Rank> {
        self.low
    }

    /// Highest rank on the board, if the run is open.
    #[must_use]
    pub const fn high(&self) -> Option<Rank> {
        self.high
    }

    /// Cards of this suit in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The rank that would extend the run downward.
    #[must_use]
    pub fn next_low(&self) -> Option<Rank> {
        self.low
            .and_then(|rank| rank.value().checked_sub(1))
            .and_then(Rank::from_value)
    }

    /// The rank that would extend the run upward.
    #[must_use]
    pub fn next_high(&self) -> Option<Rank> {
        self.high.and_then(|rank| Rank::from_value(rank.value() + 1))
    }

    /// Returns whether `rank` could be played on this run right now.
    #[must_use]
    pub fn accepts(&self, rank: Rank) -> bool {
        if rank == crate::card::ANCHOR_RANK {
            return !self.anchor_played;
        }
        self.anchor_played && (self.next_low() == Some(rank) || self.next_high() == Some(rank))
    }

    /// Checks that `card` may extend this run without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the sequencing violation that rejects the card.
    pub fn check(&self, card: Card) -> Result<(), MoveError> {
        if card.is_anchor() {
            if self.anchor_played {
                return Err(MoveError::AnchorAlreadyPlayed);
            }
            return Ok(());
        }

        if !self.anchor_played {
            return Err(MoveError::AnchorNotPlayed);
        }

        if self.next_low() == Some(card.rank) || self.next_high() == Some(card.rank) {
            Ok(())
        } else {
            Err(MoveError::IllegalSequencePlay)
        }
    }

    /// Places `card` on the run, updating the matching extreme.
    ///
    /// # Errors
    ///
    /// Returns the sequencing violation that rejects the card. The run is
    /// unchanged on error.
    pub fn place(&mut self, card: Card) -> Result<(), MoveError> {
        self.check(card)?;

        if card.is_anchor() {
            self.anchor_played = true;
            self.low = Some(card.rank);
            self.high = Some(card.rank);
        } else if self.next_low() == Some(card.rank) {
            self.low = Some(card.rank);
        } else {
            self.high = Some(card.rank);
        }

        self.cards.push(card);
        Ok(())
    }
}

/// The shared board: one run per suit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    runs: [SuitRun; 4],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runs: [
                SuitRun::new(),
                SuitRun::new(),
                SuitRun::new(),
                SuitRun::new(),
            ],
        }
    }

    /// Returns the run for `suit`.
    #[must_use]
    pub const fn run(&self, suit: Suit) -> &SuitRun {
        &self.runs[suit.index()]
    }

    /// Iterates over every suit with its run, in catalogue order.
    pub fn runs(&self) -> impl Iterator<Item = (Suit, &SuitRun)> {
        SUITS.into_iter().zip(self.runs.iter())
    }

    /// Returns whether `card` could be played right now.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        self.run(card.suit).accepts(card.rank)
    }

    /// Places `card` on its suit's run.
    ///
    /// # Errors
    ///
    /// Returns the sequencing violation that rejects the card.
    pub fn place(&mut self, card: Card) -> Result<(), MoveError> {
        self.runs[card.suit.index()].place(card)
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.cards.len()).sum()
    }

    /// Returns whether no card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
