//! Word engine - pure game logic with no UI dependencies
//!
//! Everything about the round lives here: the seed corpus, the dictionary
//! seam, the validation rules, persistence of the round and the round state
//! machine itself.

pub mod corpus;
pub mod dictionary;
pub mod round;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use corpus::WordCorpus;
pub use dictionary::{DictionaryOracle, WordListDictionary};
pub use round::{Accepted, RoundEngine, RoundEvent};
pub use store::{FileStore, MemoryStore, PersistedBlob, PersistenceStore};
