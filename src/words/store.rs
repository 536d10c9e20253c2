//! Durable round state.
//!
//! The round is stored as two independent JSON values under
//! [`USED_WORDS_KEY`] and [`CURRENT_WORD_KEY`]. Either may be missing on the
//! first run.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;

pub const USED_WORDS_KEY: &str = "usedWords";
pub const CURRENT_WORD_KEY: &str = "currentWord";

/// Small key/value byte store.
pub trait PersistenceStore {
    /// `Ok(None)` when the key has never been written.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<S: PersistenceStore + ?Sized> PersistenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// One file per key inside a directory: `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Load { key: key.to_string(), source }),
        }
    }

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let save_err = |source| StoreError::Save { key: key.to_string(), source };

        fs::create_dir_all(&self.dir).map_err(save_err)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(save_err)?;
        fs::rename(&tmp, &path).map_err(save_err)?;
        Ok(())
    }
}

/// Durable projection of the round state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBlob {
    pub current_word: String,
    pub used_words: Vec<String>,
}

/// What could be recovered from the store at startup.
///
/// Each key is decoded on its own; a bad value is logged and treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    pub current_word: Option<String>,
    pub used_words: Vec<String>,
}

impl Restored {
    /// A round is resumable only with a seed word and at least one used word.
    pub fn into_blob(self) -> Option<PersistedBlob> {
        match self.current_word {
            Some(current_word) if !current_word.is_empty() && !self.used_words.is_empty() => {
                Some(PersistedBlob { current_word, used_words: self.used_words })
            }
            _ => None,
        }
    }
}

fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: for<'de> Deserialize<'de>,
    S: PersistenceStore + ?Sized,
{
    let Some(bytes) = store.load(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Decode { key: key.to_string(), source })
}

fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: PersistenceStore + ?Sized,
{
    let bytes = serde_json::to_vec(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.save(key, &bytes)
}

/// Read both keys, logging and skipping any that fail.
pub fn load_round<S: PersistenceStore + ?Sized>(store: &S) -> Restored {
    let used_words = match load_json::<Vec<String>, _>(store, USED_WORDS_KEY) {
        Ok(words) => words.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "failed to load used words");
            Vec::new()
        }
    };
    let current_word = match load_json::<String, _>(store, CURRENT_WORD_KEY) {
        Ok(word) => word,
        Err(e) => {
            warn!(error = %e, "failed to load current word");
            None
        }
    };
    Restored { current_word, used_words }
}

/// Write both keys. Both writes are attempted; the first error is returned.
pub fn save_round<S: PersistenceStore + ?Sized>(
    store: &mut S,
    blob: &PersistedBlob,
) -> Result<(), StoreError> {
    let used = save_json(store, USED_WORDS_KEY, &blob.used_words);
    let current = save_json(store, CURRENT_WORD_KEY, &blob.current_word);
    used.and(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob() -> PersistedBlob {
        PersistedBlob {
            current_word: "silkworm".into(),
            used_words: vec!["worm".into(), "silk".into()],
        }
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut store = MemoryStore::new();
        save_round(&mut store, &blob()).unwrap();
        let restored = load_round(&store);
        assert_eq!(restored.into_blob(), Some(blob()));
    }

    #[test]
    fn test_wire_encoding_is_plain_json() {
        let mut store = MemoryStore::new();
        save_round(&mut store, &blob()).unwrap();
        assert_eq!(store.load(USED_WORDS_KEY).unwrap().unwrap(), br#"["worm","silk"]"#);
        assert_eq!(store.load(CURRENT_WORD_KEY).unwrap().unwrap(), br#""silkworm""#);
    }

    #[test]
    fn test_blob_serializes_camel_case() {
        let json = serde_json::to_value(blob()).unwrap();
        assert_eq!(json["currentWord"], "silkworm");
        assert_eq!(json["usedWords"][0], "worm");
    }

    #[test]
    fn test_empty_store_restores_nothing() {
        let restored = load_round(&MemoryStore::new());
        assert_eq!(restored, Restored::default());
        assert_eq!(restored.into_blob(), None);
    }

    #[test]
    fn test_corrupt_key_is_skipped() {
        let mut store = MemoryStore::new();
        store.save(USED_WORDS_KEY, b"not json").unwrap();
        store.save(CURRENT_WORD_KEY, br#""listen""#).unwrap();
        let restored = load_round(&store);
        assert_eq!(restored.current_word.as_deref(), Some("listen"));
        assert!(restored.used_words.is_empty());
    }

    #[test]
    fn test_empty_used_list_is_not_resumable() {
        let restored = Restored { current_word: Some("listen".into()), used_words: vec![] };
        assert_eq!(restored.into_blob(), None);
    }

    #[test]
    fn test_missing_seed_is_not_resumable() {
        let restored = Restored { current_word: None, used_words: vec!["silk".into()] };
        assert_eq!(restored.into_blob(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("wordhunt-store-{}", std::process::id()));
        let mut store = FileStore::new(&dir);
        assert_eq!(store.load(CURRENT_WORD_KEY).unwrap(), None);

        save_round(&mut store, &blob()).unwrap();
        let reopened = FileStore::new(&dir);
        assert_eq!(load_round(&reopened).into_blob(), Some(blob()));

        let _ = fs::remove_dir_all(&dir);
    }
}
