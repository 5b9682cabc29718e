//! Card types and the static rank/suit catalogue.

use core::fmt;
use core::str::FromStr;

/// Card suit.
///
/// Declaration order is the catalogue order used when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

/// All suits in catalogue order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

impl Suit {
    /// Position of the suit in [`SUITS`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Spades => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Hearts => "#E0115F",
            Self::Spades => "#00FFFF",
            Self::Diamonds => "#FFD700",
            Self::Clubs => "#228B22",
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'h' | 'H' | '♥' => Some(Self::Hearts),
            's' | 'S' | '♠' => Some(Self::Spades),
            'd' | 'D' | '♦' => Some(Self::Diamonds),
            'c' | 'C' | '♣' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven, the anchor rank.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

/// All ranks from Ace to King.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// The rank that opens a suit's run.
pub const ANCHOR_RANK: Rank = Rank::Seven;

/// The only card that may be played on the opening move.
pub const OPENING_CARD: Card = Card::new(Rank::Seven, Suit::Hearts);

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

impl Rank {
    /// Numeric value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by its numeric value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=13) {
            Some(RANKS[value as usize - 1])
        } else {
            None
        }
    }

    /// Short symbol such as `"A"`, `"10"` or `"K"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a rank symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        RANKS
            .iter()
            .copied()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
    }

    /// English name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Altitude label shown on the card face.
    ///
    /// Ranks above the anchor climb into the sky, ranks below it dig
    /// towards the Earth's core.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Center of Earth",
            Self::Two => "Outer Core",
            Self::Three => "Mantle",
            Self::Four => "-5km",
            Self::Five => "-1km",
            Self::Six => "-10m",
            Self::Seven => "Surface",
            Self::Eight => "100m",
            Self::Nine => "1km",
            Self::Ten => "10km",
            Self::Jack => "20km",
            Self::Queen => "Orbit",
            Self::King => "Deep Space",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether this card opens its suit.
    #[must_use]
    pub fn is_anchor(self) -> bool {
        self.rank == ANCHOR_RANK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Error returned when a card cannot be parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid card")]
pub struct ParseCardError;

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses text such as `"7h"`, `"10♠"` or `"qd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError)?;
        let suit = Suit::from_letter(suit_char).ok_or(ParseCardError)?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_text).ok_or(ParseCardError)?;
        Ok(Self::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_cover_one_through_thirteen() {
        for (i, rank) in RANKS.iter().enumerate() {
            assert_eq!(usize::from(rank.value()), i + 1);
            assert_eq!(Rank::from_value(rank.value()), Some(*rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn rank_names_and_labels() {
        let expected = [
            (Rank::Ace, "A", "Ace", "Center of Earth"),
            (Rank::Two, "2", "Two", "Outer Core"),
            (Rank::Three, "3", "Three", "Mantle"),
            (Rank::Four, "4", "Four", "-5km"),
            (Rank::Five, "5", "Five", "-1km"),
            (Rank::Six, "6", "Six", "-10m"),
            (Rank::Seven, "7", "Seven", "Surface"),
            (Rank::Eight, "8", "Eight", "100m"),
            (Rank::Nine, "9", "Nine", "1km"),
            (Rank::Ten, "10", "Ten", "10km"),
            (Rank::Jack, "J", "Jack", "20km"),
            (Rank::Queen, "Q", "Queen", "Orbit"),
            (Rank::King, "K", "King", "Deep Space"),
        ];
        assert_eq!(expected.len(), RANKS.len());
        for ((rank, symbol, name, label), listed) in expected.into_iter().zip(RANKS) {
            assert_eq!(rank, listed);
            assert_eq!(rank.symbol(), symbol);
            assert_eq!(rank.name(), name);
            assert_eq!(rank.label(), label);
            assert_eq!(Rank::from_symbol(symbol), Some(rank));
        }
    }

    #[test]
    fn suit_names_symbols_and_colors() {
        let expected = [
            (Suit::Hearts, "Hearts", '♥', "#E0115F"),
            (Suit::Spades, "Spades", '♠', "#00FFFF"),
            (Suit::Diamonds, "Diamonds", '♦', "#FFD700"),
            (Suit::Clubs, "Clubs", '♣', "#228B22"),
        ];
        let catalogue = expected.into_iter().zip(SUITS).enumerate();
        for (i, ((suit, name, symbol, color), listed)) in catalogue {
            assert_eq!(suit, listed);
            assert_eq!(suit.index(), i);
            assert_eq!(suit.name(), name);
            assert_eq!(suit.symbol(), symbol);
            assert_eq!(suit.color(), color);
        }
    }

    #[test]
    fn parses_and_displays_cards() {
        let card: Card = "7h".parse().unwrap();
        assert_eq!(card, OPENING_CARD);
        assert_eq!(card.to_string(), "7♥");

        let ten: Card = "10♠".parse().unwrap();
        assert_eq!(ten, Card::new(Rank::Ten, Suit::Spades));

        assert_eq!("qd".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));
        assert_eq!("11c".parse::<Card>(), Err(ParseCardError));
        assert_eq!("".parse::<Card>(), Err(ParseCardError));
    }
}
