/// Scramble game module - the terminal face of the word engine
pub mod game;
pub mod renderer;

pub use game::{Mode, ScrambleGame, ScrambleView};
pub use renderer::ScrambleRenderer;
