//! Round state machine.
//!
//! A [`RoundEngine`] is always in a round: construction either resumes the
//! persisted round or starts a fresh one. After that the only transitions are
//! [`RoundEngine::start_round`] (reset) and a successful
//! [`RoundEngine::submit`] (prepend one word). Every transition is written
//! through to the store.
//!
//! The engine knows nothing about rendering. Observers get [`RoundEvent`]s over
//! a channel obtained from [`RoundEngine::subscribe`].

use std::sync::mpsc::{self, Receiver, Sender};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::Rejection;
use crate::words::corpus::WordCorpus;
use crate::words::dictionary::{DictionaryOracle, ENGLISH};
use crate::words::rules;
use crate::words::store::{self, PersistedBlob, PersistenceStore};

/// Notifications for whoever draws the round.
///
/// A state change is announced before the save is attempted, so a
/// [`RoundEvent::SaveFailed`] always follows the change it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// New seed word; the used list is now empty.
    RoundStarted { seed: String },
    /// Exactly one word was inserted at `row`.
    WordInserted { word: String, row: usize },
    Rejected(Rejection),
    /// The state changed in memory but could not be written out.
    SaveFailed { message: String },
}

/// A word that made it through every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
}

pub struct RoundEngine<D, S> {
    corpus: WordCorpus,
    dictionary: D,
    store: S,
    language: String,
    rng: StdRng,
    seed: String,
    used: Vec<String>,
    subscribers: Vec<Sender<RoundEvent>>,
}

impl<D, S> RoundEngine<D, S>
where
    D: DictionaryOracle,
    S: PersistenceStore,
{
    pub fn new(corpus: WordCorpus, dictionary: D, store: S) -> Self {
        Self::with_rng(corpus, dictionary, store, StdRng::from_os_rng())
    }

    /// Same as [`RoundEngine::new`] with a caller-supplied RNG for seed picks.
    pub fn with_rng(corpus: WordCorpus, dictionary: D, store: S, rng: StdRng) -> Self {
        let restored = store::load_round(&store).into_blob();

        let mut engine = Self {
            corpus,
            dictionary,
            store,
            language: ENGLISH.to_string(),
            rng,
            seed: String::new(),
            used: Vec::new(),
            subscribers: Vec::new(),
        };

        match restored {
            Some(blob) => {
                info!(seed = %blob.current_word, used = blob.used_words.len(), "resumed round");
                engine.seed = blob.current_word;
                engine.used = blob.used_words;
            }
            None => engine.start_round(),
        }
        engine
    }

    /// Register an observer. Dropped receivers are pruned on the next event.
    pub fn subscribe(&mut self) -> Receiver<RoundEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Pick a new seed word and clear the used list.
    pub fn start_round(&mut self) {
        self.seed = self.corpus.pick_random(&mut self.rng).to_string();
        self.used.clear();
        info!(seed = %self.seed, "round started");

        self.emit(RoundEvent::RoundStarted { seed: self.seed.clone() });
        self.persist();
    }

    /// Validate `raw` and, if it passes, record it as the newest used word.
    ///
    /// A rejection leaves the round untouched.
    pub fn submit(&mut self, raw: &str) -> Result<Accepted, Rejection> {
        let word = rules::normalize(raw);

        if let Err(rejection) =
            rules::validate(&word, &self.seed, &self.used, &self.dictionary, &self.language)
        {
            debug!(word = %word, reason = rejection.code(), "word rejected");
            self.emit(RoundEvent::Rejected(rejection.clone()));
            return Err(rejection);
        }

        self.used.insert(0, word.clone());
        info!(word = %word, total = self.used.len(), "word accepted");

        self.emit(RoundEvent::WordInserted { word: word.clone(), row: 0 });
        self.persist();
        Ok(Accepted { word })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn snapshot(&self) -> PersistedBlob {
        PersistedBlob {
            current_word: self.seed.clone(),
            used_words: self.used.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let blob = self.snapshot();
        if let Err(e) = store::save_round(&mut self.store, &blob) {
            warn!(error = %e, "failed to save round; continuing with in-memory state");
            self.emit(RoundEvent::SaveFailed { message: e.to_string() });
        }
    }

    fn emit(&mut self, event: RoundEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
