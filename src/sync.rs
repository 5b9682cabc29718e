//! A mutex that works with and without `std`.
//!
//! With `std` a poisoned lock is recovered: rooms hold plain game data and a
//! panic in one request must not lock the room forever.

#[cfg(feature = "std")]
/// Mutual exclusion around a room or the lobby's room table.
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks the mutex, blocking until it is free.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
