//! Storage Module
//!
//! The persistence layer the cache sits on: a synchronous string to string
//! store with key enumeration and no transactions.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

// == Storage Trait ==
/// Key/value backing shared by cache entries, flags and counters.
///
/// Implementations must be safe to share between tasks; each call is
/// atomic on its own but sequences of calls are not.
pub trait Storage: Send + Sync {
    /// Returns the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Missing keys are ignored.
    fn remove_item(&self, key: &str);

    /// Returns every key currently present.
    fn keys(&self) -> Vec<String>;
}
