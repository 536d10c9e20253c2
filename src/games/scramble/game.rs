use std::sync::mpsc::Receiver;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::game::{Flow, Game};
use crate::games::scramble::renderer::ScrambleRenderer;
use crate::words::{DictionaryOracle, PersistenceStore, RoundEngine, RoundEvent};

/// What the screen currently shows on top of the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Answer prompt is open.
    Answering { input: String },
    /// A rejected word; dismissed with Enter or Esc.
    Alert { title: String, message: String },
}

/// Everything the renderer needs, rebuilt from [`RoundEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrambleView {
    pub title: String,
    pub rows: Vec<String>,
    /// Highlighted row; the list scrolls to keep it on screen.
    pub selected: Option<usize>,
    pub status: Option<String>,
}

impl ScrambleView {
    fn select_next(&mut self) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = Some(0);
        }
    }

    fn select_last(&mut self) {
        self.selected = self.rows.len().checked_sub(1);
    }
}

/// Presentation adapter around a [`RoundEngine`].
///
/// Keys become engine calls; engine events become view updates. The engine
/// never sees the view.
pub struct ScrambleGame<D, S> {
    engine: RoundEngine<D, S>,
    events: Receiver<RoundEvent>,
    view: ScrambleView,
    mode: Mode,
}

impl<D, S> ScrambleGame<D, S>
where
    D: DictionaryOracle,
    S: PersistenceStore,
{
    pub fn new(mut engine: RoundEngine<D, S>) -> Self {
        let events = engine.subscribe();
        let view = ScrambleView {
            title: engine.seed().to_string(),
            rows: engine.used_words().to_vec(),
            selected: None,
            status: None,
        };
        Self { engine, events, view, mode: Mode::Browsing }
    }

    pub fn view(&self) -> &ScrambleView {
        &self.view
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn engine(&self) -> &RoundEngine<D, S> {
        &self.engine
    }

    pub fn into_engine(self) -> RoundEngine<D, S> {
        self.engine
    }

    /// Drain pending engine events into the view.
    fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::RoundStarted { seed } => {
                self.view.title = seed;
                self.view.rows.clear();
                self.view.selected = None;
                self.view.status = None;
            }
            RoundEvent::WordInserted { word, row } => {
                let row = row.min(self.view.rows.len());
                self.view.rows.insert(row, word);
                // Jump back to the newest word
                self.view.selected = Some(row);
            }
            RoundEvent::Rejected(rejection) => {
                self.mode = Mode::Alert {
                    title: rejection.title().to_string(),
                    message: rejection.to_string(),
                };
            }
            RoundEvent::SaveFailed { message } => {
                self.view.status = Some(format!("Progress not saved: {message}"));
            }
        }
    }

    fn handle_browsing(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('a') | KeyCode::Enter => {
                self.mode = Mode::Answering { input: String::new() };
            }
            KeyCode::Char('r') => self.engine.start_round(),
            KeyCode::Down | KeyCode::Char('j') => self.view.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.view.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.view.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.view.select_last(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_answering(&mut self, key: KeyEvent) {
        let Mode::Answering { input } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let answer = std::mem::take(input);
                self.mode = Mode::Browsing;
                // The outcome reaches the view as an event
                let _ = self.engine.submit(&answer);
            }
            KeyCode::Esc => self.mode = Mode::Browsing,
            _ => {}
        }
    }
}

impl<D, S> Game for ScrambleGame<D, S>
where
    D: DictionaryOracle,
    S: PersistenceStore,
{
    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        let flow = match self.mode {
            Mode::Browsing => self.handle_browsing(key),
            Mode::Answering { .. } => {
                self.handle_answering(key);
                Flow::Continue
            }
            Mode::Alert { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.mode = Mode::Browsing;
                }
                Flow::Continue
            }
        };

        self.sync();
        flow
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        ScrambleRenderer::render(frame, &self.view, &self.mode);
    }
}
