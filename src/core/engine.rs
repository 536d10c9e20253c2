use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw/poll loop. Returns the game once it asks to quit.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // Blocks for at most one tick so the screen keeps refreshing
            if !event::poll(self.game.tick_rate())? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.game.handle_input(key) == Flow::Quit {
                    break;
                }
            }
        }

        Ok(self.game)
    }
}
