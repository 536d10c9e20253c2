use super::game::{Mode, ScrambleView};
use crate::games::GAME_INFO;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const HINTS_BROWSING: &str = "a/Enter: answer   j/k: scroll   r: new round   q/Esc: quit";
const HINTS_ANSWERING: &str = "Enter: submit   Esc: cancel";
const HINTS_ALERT: &str = "Enter/Esc: OK";

#[derive(Debug)]
pub struct ScrambleRenderer;

impl ScrambleRenderer {
    pub fn render(frame: &mut Frame, view: &ScrambleView, mode: &Mode) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Seed word
                Constraint::Min(0),    // Used words
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new(view.title.as_str())
            .block(Block::default().borders(Borders::ALL).title(GAME_INFO.name))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = view.rows.iter().map(|w| ListItem::new(w.as_str())).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Words ({})", view.rows.len())),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(view.selected);
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let hints = match mode {
            Mode::Browsing => HINTS_BROWSING,
            Mode::Answering { .. } => HINTS_ANSWERING,
            Mode::Alert { .. } => HINTS_ALERT,
        };
        let footer_text = match &view.status {
            Some(status) => format!("{hints}   |   {status}"),
            None => hints.to_string(),
        };
        let footer = Paragraph::new(footer_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(footer, chunks[2]);

        match mode {
            Mode::Browsing => {}
            Mode::Answering { input } => {
                let area = popup_area(frame.area(), 50, 3);
                let prompt = Paragraph::new(format!("{input}_"))
                    .block(Block::default().borders(Borders::ALL).title("Enter answer"));
                frame.render_widget(Clear, area);
                frame.render_widget(prompt, area);
            }
            Mode::Alert { title, message } => {
                let area = popup_area(frame.area(), 50, 5);
                let alert = Paragraph::new(message.as_str())
                    .block(Block::default().borders(Borders::ALL).title(title.as_str()))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true });
                frame.render_widget(Clear, area);
                frame.render_widget(alert, area);
            }
        }
    }
}

/// Centered box `percent_x` wide and `height` rows tall.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
