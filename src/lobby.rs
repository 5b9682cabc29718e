//! In-memory registry of active rooms.

use alloc::string::String;
use alloc::sync::Arc;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::JoinError;
use crate::options::GameOptions;
use crate::player::PlayerId;
use crate::room::{Room, RoomCode};
use crate::sync::Mutex;

/// A shared handle to one room.
///
/// Lock it for the whole of a start, move, pass or AI run so that each room
/// sees at most one mutation at a time.
pub type RoomHandle = Arc<Mutex<Room>>;

/// Registry of active rooms keyed by room code.
///
/// Every room sits behind its own mutex, so requests for different rooms
/// never wait on each other.
pub struct Lobby {
    /// Options applied to every new room.
    pub options: GameOptions,
    /// Active rooms.
    rooms: Mutex<HashMap<RoomCode, RoomHandle>>,
    /// Source of room codes and per-room seeds.
    rng: Mutex<ChaCha8Rng>,
}

impl Lobby {
    /// Creates an empty lobby with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rooms: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a room hosted by `host_name` under a fresh code.
    ///
    /// Returns the code and the host's player id.
    pub fn create_room(&self, host_name: impl Into<String>) -> (RoomCode, PlayerId) {
        let mut rooms = self.rooms.lock();
        let mut rng = self.rng.lock();

        let mut code = RoomCode::random(&mut *rng);
        while rooms.contains_key(&code) {
            code = RoomCode::random(&mut *rng);
        }
        let seed = rng.random::<u64>();
        drop(rng);

        let room = Room::new(code, host_name, self.options, seed);
        let host = room.host_id();
        rooms.insert(code, Arc::new(Mutex::new(room)));
        drop(rooms);

        tracing::info!(room = %code, "room created");
        (code, host)
    }

    /// Seats a human player in the room with the given code.
    ///
    /// The code is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::RoomNotFound`] for an unknown or malformed code,
    /// or any error from [`Room::join`].
    pub fn join(
        &self,
        code: &str,
        name: impl Into<String>,
    ) -> Result<(RoomCode, PlayerId), JoinError> {
        let code: RoomCode = code.parse().map_err(|_| JoinError::RoomNotFound)?;
        let room = self.room(code).ok_or(JoinError::RoomNotFound)?;
        let id = room.lock().join(name)?;
        Ok((code, id))
    }

    /// Returns the room with the given code.
    #[must_use]
    pub fn room(&self, code: RoomCode) -> Option<RoomHandle> {
        self.rooms.lock().get(&code).cloned()
    }

    /// Removes a room, returning it if it existed.
    pub fn remove(&self, code: RoomCode) -> Option<RoomHandle> {
        let removed = self.rooms.lock().remove(&code);
        if removed.is_some() {
            tracing::info!(room = %code, "room removed");
        }
        removed
    }

    /// Returns the number of active rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.lock().len()
    }

    /// Returns whether there are no active rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.lock().is_empty()
    }
}
