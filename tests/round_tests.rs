//! Round engine integration tests.
//!
//! These drive the public API the way the terminal front end does: one
//! engine, a fake dictionary, and an in-memory or file-backed store.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordhunt::words::dictionary::DictionaryOracle;
use wordhunt::words::store::{load_round, save_round, CURRENT_WORD_KEY, USED_WORDS_KEY};
use wordhunt::words::{FileStore, MemoryStore, PersistedBlob, PersistenceStore, WordCorpus};
use wordhunt::{Rejection, RoundEngine, RoundEvent};

/// Dictionary that knows exactly the words it was given.
struct FakeDictionary {
    words: HashSet<&'static str>,
}

impl FakeDictionary {
    fn new(words: &[&'static str]) -> Self {
        Self { words: words.iter().copied().collect() }
    }
}

impl DictionaryOracle for FakeDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language == "en" && self.words.contains(word)
    }
}

fn engine_with(seed_word: &str, store: MemoryStore) -> RoundEngine<FakeDictionary, MemoryStore> {
    RoundEngine::with_rng(
        WordCorpus::from_text(seed_word),
        FakeDictionary::new(&["silk", "worm", "milk", "ski", "listen", "silent", "list", "tin"]),
        store,
        StdRng::seed_from_u64(11),
    )
}

fn engine(seed_word: &str) -> RoundEngine<FakeDictionary, MemoryStore> {
    engine_with(seed_word, MemoryStore::new())
}

// =============================================================================
// Validation scenarios
// =============================================================================

/// A word built from the seed's letters is accepted and listed.
#[test]
fn test_silk_from_silkworm_is_accepted() {
    let mut engine = engine("silkworm");
    let accepted = engine.submit("silk").unwrap();
    assert_eq!(accepted.word, "silk");
    assert_eq!(engine.used_words(), ["silk"]);
}

/// The seed word itself never counts.
#[test]
fn test_seed_word_is_rejected() {
    let mut engine = engine("silkworm");
    assert_eq!(engine.submit("silkworm"), Err(Rejection::SameAsSeed));
    assert_eq!(engine.submit("SILKWORM"), Err(Rejection::SameAsSeed));
}

/// Two letters are too short.
#[test]
fn test_short_word_is_rejected() {
    let mut engine = engine("silkworm");
    assert_eq!(engine.submit("ow"), Err(Rejection::TooShort));
}

/// A repeated letter needs a repeated letter in the seed.
#[test]
fn test_repeated_letter_needs_two_in_seed() {
    let mut engine = engine("listen");
    // "ll" is also too short; length is checked first
    assert_eq!(engine.submit("ll"), Err(Rejection::TooShort));
    assert_eq!(
        engine.submit("lll"),
        Err(Rejection::NotDerivable { seed: "listen".into() })
    );
    assert_eq!(
        engine.submit("sills"),
        Err(Rejection::NotDerivable { seed: "listen".into() })
    );
}

/// The same word cannot be scored twice.
#[test]
fn test_used_word_is_rejected() {
    let mut engine = engine("silkworm");
    engine.submit("silk").unwrap();
    assert_eq!(engine.submit("silk"), Err(Rejection::AlreadyUsed));
    assert_eq!(engine.used_words(), ["silk"]);
}

/// Derivable but unknown to the dictionary.
#[test]
fn test_unknown_word_is_rejected() {
    let mut engine = engine("silkworm");
    assert_eq!(engine.submit("wolk"), Err(Rejection::NotARealWord));
}

/// Rejections never change the round, no matter how often repeated.
#[test]
fn test_rejection_is_idempotent() {
    let mut engine = engine("silkworm");
    engine.submit("worm").unwrap();
    for _ in 0..3 {
        assert!(engine.submit("wolk").is_err());
        assert_eq!(engine.used_words(), ["worm"]);
    }
}

/// Newest words come first.
#[test]
fn test_most_recent_first() {
    let mut engine = engine("silkworm");
    engine.submit("silk").unwrap();
    engine.submit("worm").unwrap();
    engine.submit("milk").unwrap();
    assert_eq!(engine.used_words(), ["milk", "worm", "silk"]);
}

// =============================================================================
// Rounds and persistence
// =============================================================================

/// Every accepted word is written through to the store.
#[test]
fn test_every_acceptance_is_saved() {
    let mut engine = engine("silkworm");
    engine.submit("silk").unwrap();
    engine.submit("ski").unwrap();

    let restored = load_round(engine.store()).into_blob().unwrap();
    assert_eq!(
        restored,
        PersistedBlob {
            current_word: "silkworm".into(),
            used_words: vec!["ski".into(), "silk".into()],
        }
    );
}

/// A saved round is resumed instead of starting over.
#[test]
fn test_resume_after_restart() {
    let mut first = engine("silkworm");
    first.submit("silk").unwrap();
    let store = first.into_store();

    let resumed = engine_with("listen", store);
    assert_eq!(resumed.seed(), "silkworm");
    assert_eq!(resumed.used_words(), ["silk"]);
}

/// Unreadable saved state falls back to a fresh round.
#[test]
fn test_corrupt_state_starts_fresh() {
    let mut store = MemoryStore::new();
    store.save(USED_WORDS_KEY, b"{broken").unwrap();
    store.save(CURRENT_WORD_KEY, b"42").unwrap();

    let engine = engine_with("listen", store);
    assert_eq!(engine.seed(), "listen");
    assert!(engine.used_words().is_empty());
}

/// State written by one store handle is read back by a fresh one.
#[test]
fn test_file_store_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("wordhunt-it-{}", std::process::id()));
    let blob = PersistedBlob {
        current_word: "listen".into(),
        used_words: vec!["tin".into(), "list".into()],
    };

    let mut store = FileStore::new(&dir);
    save_round(&mut store, &blob).unwrap();

    let engine = RoundEngine::with_rng(
        WordCorpus::from_text("silkworm"),
        FakeDictionary::new(&[]),
        FileStore::new(&dir),
        StdRng::seed_from_u64(1),
    );
    assert_eq!(engine.snapshot(), blob);

    let _ = std::fs::remove_dir_all(&dir);
}

/// Starting a new round empties the list and tells observers.
#[test]
fn test_new_round_resets_and_notifies() {
    let mut engine = engine("silkworm");
    engine.submit("silk").unwrap();
    let events = engine.subscribe();

    engine.start_round();

    assert!(engine.used_words().is_empty());
    assert_eq!(
        events.try_iter().collect::<Vec<_>>(),
        vec![RoundEvent::RoundStarted { seed: "silkworm".into() }]
    );
    assert!(load_round(engine.store()).used_words.is_empty());
}

/// Observers see a rejection, then an insert at row zero.
#[test]
fn test_event_stream() {
    let mut engine = engine("silkworm");
    let events = engine.subscribe();

    let _ = engine.submit("ow");
    let _ = engine.submit("silk");

    assert_eq!(
        events.try_iter().collect::<Vec<_>>(),
        vec![
            RoundEvent::Rejected(Rejection::TooShort),
            RoundEvent::WordInserted { word: "silk".into(), row: 0 },
        ]
    );
}
