/// Core game interface for the wordhunt terminal front end
use crossterm::event::KeyEvent;
use std::time::Duration;

/// What the engine loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait driven by [`Engine`](crate::core::engine::Engine)
/// The game owns its model; the engine only moves keys in and frames out.
pub trait Game {
    /// How long to wait for input before redrawing anyway
    fn tick_rate(&self) -> Duration {
        Duration::from_millis(250)
    }

    /// Handle one key press
    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    /// Render the current view into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
