pub mod core {
	pub mod engine;
	pub mod game;
}

pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod words;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
pub use crate::error::{Rejection, StoreError};
pub use crate::words::{RoundEngine, RoundEvent};
