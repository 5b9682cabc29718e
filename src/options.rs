//! Game configuration options.

use crate::ai::Difficulty;

/// Configuration options for a Sevens game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use sevens::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_max_players(3)
///     .with_ai_difficulty(Difficulty::Hard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Minimum number of seats needed to start.
    pub min_players: u8,
    /// Maximum number of seats in a room.
    pub max_players: u8,
    /// Whether the opening move is restricted to the seven of hearts.
    pub strict_opening: bool,
    /// Maximum number of consecutive AI turns taken in one
    /// [`Room::run_ai_turns`](crate::Room::run_ai_turns) call.
    pub ai_chain_limit: usize,
    /// Difficulty used by AI seats when the room has none set.
    pub ai_difficulty: Difficulty,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            strict_opening: true,
            ai_chain_limit: 256,
            ai_difficulty: Difficulty::Medium,
        }
    }
}

impl GameOptions {
    /// Sets the minimum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min: u8) -> Self {
        self.min_players = min;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: u8) -> Self {
        self.max_players = max;
        self
    }

    /// Sets whether the opening move must be the seven of hearts.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_strict_opening(false);
    /// assert!(!options.strict_opening);
    /// ```
    #[must_use]
    pub const fn with_strict_opening(mut self, strict: bool) -> Self {
        self.strict_opening = strict;
        self
    }

    /// Sets the AI turn limit.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_chain_limit(16);
    /// assert_eq!(options.ai_chain_limit, 16);
    /// ```
    #[must_use]
    pub const fn with_ai_chain_limit(mut self, limit: usize) -> Self {
        self.ai_chain_limit = limit;
        self
    }

    /// Sets the default AI difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use sevens::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_ai_difficulty(Difficulty::Easy);
    /// assert_eq!(options.ai_difficulty, Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn with_ai_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.ai_difficulty = difficulty;
        self
    }
}
