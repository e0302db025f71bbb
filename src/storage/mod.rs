//! Key/value persistence for the app's JSON collections
//!
//! The statistics engine never touches storage; the roster and auth layers
//! read and write whole collections through the [`Store`] capability:
//! - `sqlite`: on-disk store backed by a single SQLite table
//! - `memory`: in-process store for tests and dry runs

pub mod memory;
pub mod sqlite;


use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage keys for persisted collections.
pub mod keys {
    pub const PLAYERS: &str = "@players";
    pub const TEAMS: &str = "@teams";
    pub const STATS: &str = "@stats";
    pub const USER_PREFERENCES: &str = "@user_preferences";
    pub const ADMIN_SESSION: &str = "@admin_session";
}

/// A string-keyed store of JSON documents.
pub trait Store {
    /// Raw JSON stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, json: &str) -> Result<()>;

    /// Write several keys at once. Either every entry is stored or none is.
    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, json: &str) -> Result<()> {
        (**self).set(key, json)
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        (**self).set_all(entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Load and deserialize the value stored under `key`.
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    debug!(key, "loading data");
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Serialize `data` and store it under `key`.
pub fn save<T, S>(store: &mut S, key: &str, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let json = serde_json::to_string(data)?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "data saved");
    Ok(())
}
