//! Seed word corpus.

use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Word used when no usable corpus could be loaded.
pub const FALLBACK_WORD: &str = "silkworm";

/// Corpus bundled into the binary.
pub const EMBEDDED_CORPUS: &str = include_str!("../../assets/start.txt");

/// Candidate seed words. Never empty.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Build a corpus from newline-delimited text.
    ///
    /// Blank lines are dropped; an empty result falls back to [`FALLBACK_WORD`].
    pub fn from_text(text: &str) -> Self {
        let words: Vec<String> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        if words.is_empty() {
            warn!("seed corpus is empty; using fallback word");
            return Self::fallback();
        }

        debug!(count = words.len(), "loaded seed corpus");
        Self { words }
    }

    /// Read a corpus file. Unreadable files fall back like empty ones.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read seed corpus; using fallback word");
                Self::fallback()
            }
        }
    }

    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_CORPUS)
    }

    pub fn fallback() -> Self {
        Self { words: vec![FALLBACK_WORD.to_string()] }
    }

    /// Uniformly random candidate.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `words` is never empty, see the constructors
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_WORD)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
