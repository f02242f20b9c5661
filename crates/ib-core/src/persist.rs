//! Snapshot encoding for the three persisted keys.
//!
//! Reads report *why* a value was unusable through [`BoardError`]; the store
//! decides what to fall back to.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BoardError, Result};
use crate::models::{Idea, IdeaId, Theme};
use crate::traits::KeyValueStore;

pub const IDEAS_KEY: &str = "ideas_v1";
pub const THEME_KEY: &str = "theme";
pub const SAVED_KEY: &str = "saved_v1";

pub fn read_ideas<K: KeyValueStore + ?Sized>(kv: &K) -> Result<Option<Vec<Idea>>> {
    read_json(kv, IDEAS_KEY)
}

pub fn read_saved<K: KeyValueStore + ?Sized>(kv: &K) -> Result<Option<Vec<IdeaId>>> {
    read_json(kv, SAVED_KEY)
}

/// Accepts the JSON string form (`"light"`) and the bare word (`light`).
pub fn read_theme<K: KeyValueStore + ?Sized>(kv: &K) -> Result<Option<Theme>> {
    let Some(raw) = read_raw(kv, THEME_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Theme>(&raw) {
        Ok(theme) => Ok(Some(theme)),
        Err(source) => Theme::from_word(&raw)
            .map(Some)
            .ok_or(BoardError::MalformedSnapshot {
                key: THEME_KEY,
                source,
            }),
    }
}

pub fn write_ideas<K: KeyValueStore + ?Sized>(kv: &K, ideas: &[Idea]) -> Result<()> {
    write_json(kv, IDEAS_KEY, &ideas)
}

pub fn write_saved<K: KeyValueStore + ?Sized>(kv: &K, saved: &[IdeaId]) -> Result<()> {
    write_json(kv, SAVED_KEY, &saved)
}

pub fn write_theme<K: KeyValueStore + ?Sized>(kv: &K, theme: Theme) -> Result<()> {
    write_json(kv, THEME_KEY, &theme)
}

fn read_raw<K: KeyValueStore + ?Sized>(kv: &K, key: &'static str) -> Result<Option<String>> {
    kv.get(key).map_err(|cause| BoardError::Storage { key, cause })
}

fn read_json<K, T>(kv: &K, key: &'static str) -> Result<Option<T>>
where
    K: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match read_raw(kv, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| BoardError::MalformedSnapshot { key, source }),
        None => Ok(None),
    }
}

fn write_json<K, T>(kv: &K, key: &'static str, value: &T) -> Result<()>
where
    K: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value)
        .map_err(|err| BoardError::Storage { key, cause: err.into() })?;
    kv.set(key, &encoded)
        .map_err(|cause| BoardError::Storage { key, cause })
}
