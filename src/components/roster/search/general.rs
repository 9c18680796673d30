//! General Search screen.
//!
//! The general multi-criteria search has no defined semantics in the
//! registry; this screen exists so the gap is visible to the user instead of
//! masquerading as an empty result set.

use crate::components::roster::search::SearchAction;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

pub struct GeneralSearch;

impl GeneralSearch {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Result<Option<SearchAction>> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
                Ok(Some(SearchAction::BackToHome))
            }
            _ => Ok(None),
        }
    }

    pub fn render(&self, registry: &HospitalRegistry, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 16, 28))),
            area,
        );

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Status
                Constraint::Length(2), // Help
            ])
            .margin(1)
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(16, 16, 28)));
        frame.render_widget(header_block, layout[0]);

        let title = Paragraph::new("GENERAL SEARCH")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let status = match registry.find_general() {
            Ok(results) => format!("{} result(s)", results.len()),
            Err(e) => format!("Unavailable: {e}"),
        };

        let status_widget = Paragraph::new(status)
            .style(
                Style::default()
                    .fg(Color::Rgb(255, 100, 100))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
                    .style(Style::default().bg(Color::Rgb(22, 22, 35)))
                    .padding(Padding::new(0, 0, 2, 0)),
            );
        frame.render_widget(status_widget, layout[1]);

        let help_text = Paragraph::new("Esc/Enter: Back")
            .style(Style::default().fg(Color::Rgb(140, 140, 170)))
            .alignment(Alignment::Center);
        frame.render_widget(help_text, layout[2]);
    }
}

impl Default for GeneralSearch {
    fn default() -> Self {
        Self::new()
    }
}
