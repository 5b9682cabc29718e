//! Rooms: seating players, running a game and driving AI seats.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ai::{AiDecision, Difficulty, choose_move};
use crate::card::Card;
use crate::error::{ChainError, JoinError, MoveError, PassError, QueryError, StartError};
use crate::game::{GameState, Outcome, PlayerView};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

/// Four uppercase ASCII letters identifying a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RoomCode([u8; 4]);

/// Error returned when text is not a valid room code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("room codes are four letters")]
pub struct ParseRoomCodeError;

impl RoomCode {
    /// Draws a uniformly random code.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = [0; 4];
        for letter in &mut letters {
            *letter = b'A' + rng.random_range(0..26u8);
        }
        Self(letters)
    }

    /// Returns the code as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for RoomCode {
    type Err = ParseRoomCodeError;

    /// Parses a code case-insensitively; the result is always uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let letters: [u8; 4] = bytes.try_into().map_err(|_| ParseRoomCodeError)?;
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(ParseRoomCodeError);
        }
        Ok(Self(letters.map(|b| b.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ParseRoomCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        Self::from(code.as_str())
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoomStatus {
    /// Players may join.
    Waiting,
    /// A game is running.
    Playing,
    /// The game has a winner.
    Finished,
}

/// A room holding a roster of players and, once started, their game.
///
/// A room is not meant to be shared between threads without a lock; the
/// [`Lobby`](crate::Lobby) keeps every room behind its own mutex.
pub struct Room {
    code: RoomCode,
    host_name: String,
    roster: Vec<Player>,
    status: RoomStatus,
    game: Option<GameState>,
    difficulty: Option<Difficulty>,
    options: GameOptions,
    next_id: u32,
    rng: ChaCha8Rng,
}

impl Room {
    /// Creates a room with the host in seat 0.
    ///
    /// The seed drives the shuffle and the AI seats.
    #[must_use]
    pub fn new(
        code: RoomCode,
        host_name: impl Into<String>,
        options: GameOptions,
        seed: u64,
    ) -> Self {
        let host_name = host_name.into();
        let host = Player::new(PlayerId(0), host_name.clone()).into_host();

        Self {
            code,
            host_name,
            roster: alloc::vec![host],
            status: RoomStatus::Waiting,
            game: None,
            difficulty: None,
            options,
            next_id: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the room code.
    #[must_use]
    pub const fn code(&self) -> RoomCode {
        self.code
    }

    /// Returns the host's name.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Returns the host's player id.
    #[must_use]
    pub const fn host_id(&self) -> PlayerId {
        PlayerId(0)
    }

    /// Returns the room status.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns the options the room was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the seated players, with their hands once the game started.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.game
            .as_ref()
            .map_or(self.roster.as_slice(), GameState::players)
    }

    /// Returns the running or finished game.
    #[must_use]
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Returns the difficulty used by AI seats.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(self.options.ai_difficulty)
    }

    /// Sets the difficulty used by AI seats.
    pub const fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
    }

    /// Seats a human player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game already started, the room is full, or the
    /// name is already used (ignoring case).
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        let name = name.into();
        self.check_seat(&name)?;
        let id = self.allocate_id();
        self.roster.push(Player::new(id, name));
        tracing::info!(room = %self.code, player = %id, "player joined");
        Ok(id)
    }

    /// Seats an AI-controlled player.
    ///
    /// # Errors
    ///
    /// Same as [`Room::join`].
    pub fn add_ai(&mut self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        let name = name.into();
        self.check_seat(&name)?;
        let id = self.allocate_id();
        self.roster.push(Player::ai(id, name));
        tracing::info!(room = %self.code, player = %id, "AI seat added");
        Ok(id)
    }

    fn check_seat(&self, name: &str) -> Result<(), JoinError> {
        if self.status != RoomStatus::Waiting {
            return Err(JoinError::GameAlreadyStarted);
        }
        if self.roster.len() >= usize::from(self.options.max_players) {
            return Err(JoinError::RoomFull);
        }
        let name = name.trim();
        if self
            .roster
            .iter()
            .any(|player| player.name.trim().eq_ignore_ascii_case(name))
        {
            return Err(JoinError::NameTaken);
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Deals the cards and starts the game.
    ///
    /// # Errors
    ///
    /// Returns an error if a game was already started or the number of seats
    /// is outside the configured range.
    pub fn start(&mut self) -> Result<&GameState, StartError> {
        if self.status != RoomStatus::Waiting || self.game.is_some() {
            return Err(StartError::GameAlreadyStarted);
        }

        let game = GameState::start(self.roster.clone(), &self.options, &mut self.rng)?;
        Ok(self.attach(game))
    }

    /// Starts the game with a prepared deck instead of a shuffled one.
    ///
    /// # Errors
    ///
    /// Same as [`Room::start`].
    pub fn start_with_deck(&mut self, deck: Vec<Card>) -> Result<&GameState, StartError> {
        if self.status != RoomStatus::Waiting || self.game.is_some() {
            return Err(StartError::GameAlreadyStarted);
        }

        let game = GameState::start_with_deck(self.roster.clone(), deck, &self.options)?;
        Ok(self.attach(game))
    }

    fn attach(&mut self, game: GameState) -> &GameState {
        self.status = RoomStatus::Playing;
        tracing::info!(room = %self.code, "room playing");
        self.game.insert(game)
    }

    /// Plays a card for `player_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or the move is rejected.
    pub fn play(&mut self, player_id: PlayerId, card: Card) -> Result<Outcome, MoveError> {
        let game = self.game.as_mut().ok_or(MoveError::GameNotStarted)?;
        let outcome = game.apply_move(player_id, card)?;
        self.sync_status();
        Ok(outcome)
    }

    /// Passes for `player_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or the pass is rejected.
    pub fn pass(&mut self, player_id: PlayerId) -> Result<Outcome, PassError> {
        let game = self.game.as_mut().ok_or(PassError::GameNotStarted)?;
        let outcome = game.apply_pass(player_id)?;
        self.sync_status();
        Ok(outcome)
    }

    /// Returns whether the seat on turn is AI-controlled and the game is
    /// still running.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.game.as_ref().is_some_and(|game| {
            !game.is_finished() && game.current_player().is_some_and(|player| player.is_ai)
        })
    }

    /// Plays AI seats until a human is on turn or the game ends.
    ///
    /// Returns the number of AI turns taken. Without a running game nothing
    /// happens.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::LimitExceeded`] once the configured number of
    /// AI turns has been taken without reaching a stop condition. Turns
    /// already taken are kept.
    pub fn run_ai_turns(&mut self) -> Result<usize, ChainError> {
        let difficulty = self.difficulty();
        let limit = self.options.ai_chain_limit;
        let mut taken = 0;

        if let Some(game) = self.game.as_mut() {
            while !game.is_finished() {
                let Some(player) = game.current_player().filter(|player| player.is_ai) else {
                    break;
                };

                if taken >= limit {
                    tracing::warn!(room = %self.code, limit, "AI turn limit reached");
                    return Err(ChainError::LimitExceeded { limit });
                }

                let id = player.id;
                let code = self.code;
                match choose_move(game, player, difficulty, &mut self.rng) {
                    AiDecision::Play(card) => {
                        game.apply_move(id, card).inspect_err(|err| {
                            tracing::warn!(
                                room = %code,
                                player = %id,
                                %card,
                                %err,
                                "AI move rejected"
                            );
                        })?;
                    }
                    AiDecision::Pass => {
                        game.apply_pass(id).inspect_err(|err| {
                            tracing::warn!(room = %code, player = %id, %err, "AI pass rejected");
                        })?;
                    }
                }
                taken += 1;
            }
        }

        self.sync_status();
        Ok(taken)
    }

    /// Returns the game as seen by `player_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or the player is not seated.
    pub fn view_for(&self, player_id: PlayerId) -> Result<PlayerView, QueryError> {
        self.game
            .as_ref()
            .ok_or(QueryError::GameNotStarted)?
            .view_for(player_id)
    }

    /// Returns the cards `player_id` could play right now.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or the player is not seated.
    pub fn playable_for(&self, player_id: PlayerId) -> Result<Vec<Card>, QueryError> {
        self.game
            .as_ref()
            .ok_or(QueryError::GameNotStarted)?
            .playable_for(player_id)
    }

    fn sync_status(&mut self) {
        if self.game.as_ref().is_some_and(GameState::is_finished) {
            self.status = RoomStatus::Finished;
        }
    }
}
