//! Seated players and their hands.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Opaque player identifier, unique within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Player identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Whether this player created the room.
    pub is_host: bool,
    /// Whether this seat is controlled by the AI.
    pub is_ai: bool,
    /// Cards in hand, in deal order.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a human player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_host: false,
            is_ai: false,
            hand: Vec::new(),
        }
    }

    /// Creates an AI-controlled player with an empty hand.
    #[must_use]
    pub fn ai(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            is_ai: true,
            ..Self::new(id, name)
        }
    }

    /// Marks this player as the room host.
    #[must_use]
    pub const fn into_host(mut self) -> Self {
        self.is_host = true;
        self
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns whether the player holds `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Replaces the hand with a freshly dealt one.
    pub(crate) fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    /// Removes `card` from the hand, keeping the order of the rest.
    pub(crate) fn take(&mut self, card: Card) -> Option<Card> {
        let index = self.hand.iter().position(|&held| held == card)?;
        Some(self.hand.remove(index))
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.hand.len()
    }
}
