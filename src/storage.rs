//! Persisted key-value records.
//!
//! Four flat records survive across visits in the same browser profile: the
//! wish list, the mute flag, the secret-puzzle progress and the visited flag.
//! Access goes through the `KeyValue` trait so the rest of the crate never
//! touches the browser directly and all record logic tests natively against
//! `MemoryKeys`. Reads follow a parse-or-default policy: a missing key,
//! denied storage or malformed JSON all behave as "absent".

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const WISHES_KEY: &str = "sneha-wishes";
pub const MUTED_KEY: &str = "audio-muted";
pub const PUZZLE_PROGRESS_KEY: &str = "puzzle-progress";
pub const VISITED_KEY: &str = "has-visited";

/// Flat string store. Writes are fire-and-forget; there is no transactionality
/// across records and none is needed.
pub trait KeyValue {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

impl<S: KeyValue + ?Sized> KeyValue for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }
    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// Browser local-storage backend. Every operation is best-effort: no window,
/// storage denied by the profile, or a failed write all degrade to "absent".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalKeys;

impl LocalKeys {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValue for LocalKeys {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory backend for tests and for hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryKeys {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryKeys {
    fn read(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

// -----------------------------------------------------------------------------
// Typed records
// -----------------------------------------------------------------------------

/// Persisted shape of the secret-puzzle marker, `{ "completedStep": n }`.
#[derive(Serialize, Deserialize)]
struct PuzzleProgress {
    #[serde(rename = "completedStep")]
    completed_step: u8,
}

/// Completed steps range over 0..=3; 3 means the whole hunt is done.
pub const PUZZLE_STEP_MAX: u8 = 3;

/// Wish list, oldest first. Absent or corrupt -> empty.
pub fn wishes(store: &impl KeyValue) -> Vec<String> {
    store
        .read(WISHES_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_wishes(store: &impl KeyValue, wishes: &[String]) {
    if let Ok(raw) = serde_json::to_string(wishes) {
        store.write(WISHES_KEY, &raw);
    }
}

/// Mute flag. The card starts muted until the visitor opts in.
pub fn muted(store: &impl KeyValue) -> bool {
    store
        .read(MUTED_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(true)
}

pub fn save_muted(store: &impl KeyValue, muted: bool) {
    if let Ok(raw) = serde_json::to_string(&muted) {
        store.write(MUTED_KEY, &raw);
    }
}

/// Secret-puzzle step marker. Absent or corrupt -> 0.
pub fn puzzle_progress(store: &impl KeyValue) -> u8 {
    store
        .read(PUZZLE_PROGRESS_KEY)
        .and_then(|raw| serde_json::from_str::<PuzzleProgress>(&raw).ok())
        .map(|progress| progress.completed_step.min(PUZZLE_STEP_MAX))
        .unwrap_or(0)
}

pub fn save_puzzle_progress(store: &impl KeyValue, step: u8) {
    let record = PuzzleProgress {
        completed_step: step.min(PUZZLE_STEP_MAX),
    };
    if let Ok(raw) = serde_json::to_string(&record) {
        store.write(PUZZLE_PROGRESS_KEY, &raw);
    }
}

/// Visited flag is stored as the literal string "true", matching the layout
/// the card has always used; anything else counts as a first visit.
pub fn visited(store: &impl KeyValue) -> bool {
    store.read(VISITED_KEY).is_some_and(|raw| raw == "true")
}

pub fn mark_visited(store: &impl KeyValue) {
    store.write(VISITED_KEY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let store = MemoryKeys::new();
        assert!(wishes(&store).is_empty());
        assert!(muted(&store));
        assert_eq!(puzzle_progress(&store), 0);
        assert!(!visited(&store));
    }

    #[test]
    fn malformed_json_behaves_as_absent() {
        let store = MemoryKeys::new();
        store.write(WISHES_KEY, "{not json");
        store.write(MUTED_KEY, "maybe");
        store.write(PUZZLE_PROGRESS_KEY, "[3]");
        assert!(wishes(&store).is_empty());
        assert!(muted(&store));
        assert_eq!(puzzle_progress(&store), 0);
    }

    #[test]
    fn wish_list_round_trip() {
        let store = MemoryKeys::new();
        save_wishes(&store, &["a".to_owned(), "b".to_owned()]);
        assert_eq!(wishes(&store), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn puzzle_progress_uses_completed_step_field() {
        let store = MemoryKeys::new();
        save_puzzle_progress(&store, 2);
        assert_eq!(store.read(PUZZLE_PROGRESS_KEY).unwrap(), r#"{"completedStep":2}"#);
        assert_eq!(puzzle_progress(&store), 2);
    }

    #[test]
    fn puzzle_progress_is_clamped() {
        let store = MemoryKeys::new();
        save_puzzle_progress(&store, 9);
        assert_eq!(puzzle_progress(&store), PUZZLE_STEP_MAX);
    }

    #[test]
    fn visited_flag_is_literal_true() {
        let store = MemoryKeys::new();
        store.write(VISITED_KEY, "false");
        assert!(!visited(&store));
        mark_visited(&store);
        assert_eq!(store.read(VISITED_KEY).unwrap(), "true");
        assert!(visited(&store));
    }
}
