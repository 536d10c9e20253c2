//! The validation pipeline.
//!
//! Rules run in a fixed order and stop at the first failure, so a word that
//! breaks several rules always reports the same reason:
//!
//! 1. not the seed word itself
//! 2. at least [`MIN_WORD_LEN`] letters
//! 3. derivable from the seed word's letters
//! 4. not already used this round
//! 5. known to the dictionary
//!
//! Input is lowercased once up front by [`normalize`].

use crate::error::Rejection;
use crate::words::dictionary::DictionaryOracle;

pub const MIN_WORD_LEN: usize = 3;

pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

pub fn is_not_same(word: &str, seed: &str) -> bool {
    word != seed.to_lowercase()
}

pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN
}

/// Greedy multiset subtraction: each letter of `word` must consume a distinct
/// letter of `seed`. Stops at the first letter with nothing left to match.
pub fn is_derivable(word: &str, seed: &str) -> bool {
    let mut remaining: Vec<char> = seed.to_lowercase().chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_original(word: &str, used: &[String]) -> bool {
    !used.iter().any(|w| w == word)
}

/// Run every rule against an already normalized word.
pub fn validate<D>(
    word: &str,
    seed: &str,
    used: &[String],
    dictionary: &D,
    language: &str,
) -> Result<(), Rejection>
where
    D: DictionaryOracle + ?Sized,
{
    if !is_not_same(word, seed) {
        return Err(Rejection::SameAsSeed);
    }
    if !is_long_enough(word) {
        return Err(Rejection::TooShort);
    }
    if !is_derivable(word, seed) {
        return Err(Rejection::NotDerivable { seed: seed.to_lowercase() });
    }
    if !is_original(word, used) {
        return Err(Rejection::AlreadyUsed);
    }
    if !dictionary.is_real_word(word, language) {
        return Err(Rejection::NotARealWord);
    }
    Ok(())
}
