//! Dictionary lookups used by the final validation rule.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

/// Language code the game validates against.
pub const ENGLISH: &str = "en";

/// Platform word lists tried when no dictionary is configured.
pub const SYSTEM_WORD_LISTS: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/share/dict/american-english",
    "/usr/share/dict/british-english",
];

/// Word list bundled into the binary.
pub const EMBEDDED_WORDS: &str = include_str!("../../assets/words.txt");

/// Answers "is this a real word in language L?".
///
/// Unknown or misspelled tokens must be reported as `false`.
pub trait DictionaryOracle {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Set-backed dictionary for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from newline-delimited text. Entries are lowercased.
    pub fn from_text(language: &str, text: &str) -> Self {
        let words: HashSet<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        debug!(language, count = words.len(), "loaded dictionary");
        Self { language: language.to_string(), words }
    }

    /// Read a word list file such as `/usr/share/dict/words`.
    pub fn load(language: &str, path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(language, &text))
    }

    pub fn embedded() -> Self {
        Self::from_text(ENGLISH, EMBEDDED_WORDS)
    }

    /// Load `path` if given, else the first readable system word list, else
    /// the embedded list.
    pub fn load_or_embedded(path: Option<&Path>) -> Self {
        let system: Vec<&Path> = SYSTEM_WORD_LISTS.iter().map(Path::new).collect();
        Self::resolve(path, &system)
    }

    fn resolve(configured: Option<&Path>, system: &[&Path]) -> Self {
        if let Some(path) = configured {
            match Self::load(ENGLISH, path) {
                Ok(dict) if !dict.is_empty() => return dict,
                Ok(_) => warn!(path = %path.display(), "dictionary file is empty"),
                Err(e) => warn!(path = %path.display(), error = %e, "cannot read dictionary"),
            }
        }

        for path in system {
            match Self::load(ENGLISH, path) {
                Ok(dict) if !dict.is_empty() => {
                    info!(path = %path.display(), words = dict.len(), "using system word list");
                    return dict;
                }
                Ok(_) => debug!(path = %path.display(), "system word list is empty"),
                Err(e) => debug!(path = %path.display(), error = %e, "no system word list"),
            }
        }

        debug!("using embedded word list");
        Self::embedded()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(&word.to_lowercase())
    }
}

impl<D: DictionaryOracle + ?Sized> DictionaryOracle for &D {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<D: DictionaryOracle + ?Sized> DictionaryOracle for Box<D> {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}
