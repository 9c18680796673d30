//! Search by Specialization screen.

use crate::components::roster::search::SearchAction;
use crate::models::Doctor;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

/// Exact-match specialization search over the doctor roster.
pub struct SpecializationSearch {
    query: String,
    results: Vec<Doctor>,
    searched: bool,
    table_state: TableState,
}

impl SpecializationSearch {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            searched: false,
            table_state: TableState::default(),
        }
    }

    fn run_search(&mut self, registry: &HospitalRegistry) {
        self.results = registry
            .find_by_specialization(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.searched = true;
        self.table_state
            .select(if self.results.is_empty() { None } else { Some(0) });
    }

    pub fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        key: KeyEvent,
    ) -> Result<Option<SearchAction>> {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.searched = false;
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.searched = false;
            }
            KeyCode::Enter => {
                self.run_search(registry);
            }
            KeyCode::Down => {
                if !self.results.is_empty() {
                    let next = match self.table_state.selected() {
                        Some(i) if i >= self.results.len() - 1 => 0,
                        Some(i) => i + 1,
                        None => 0,
                    };
                    self.table_state.select(Some(next));
                }
            }
            KeyCode::Up => {
                if !self.results.is_empty() {
                    let next = match self.table_state.selected() {
                        Some(0) | None => self.results.len() - 1,
                        Some(i) => i - 1,
                    };
                    self.table_state.select(Some(next));
                }
            }
            KeyCode::Esc => {
                return Ok(Some(SearchAction::BackToHome));
            }
            _ => {}
        }
        Ok(None)
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 16, 28))),
            area,
        );

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Query input
                Constraint::Min(8),    // Results
                Constraint::Length(2), // Help
            ])
            .margin(1)
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(16, 16, 28)));
        frame.render_widget(header_block, layout[0]);

        let title = Paragraph::new("SEARCH BY SPECIALIZATION")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let query_input = Paragraph::new(self.query.clone())
            .style(
                Style::default()
                    .fg(Color::Rgb(220, 220, 240))
                    .bg(Color::Rgb(26, 26, 36)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(
                        " Specialization (exact match) ",
                        Style::default().fg(Color::Rgb(230, 230, 250)),
                    ))
                    .border_style(Style::default().fg(Color::Rgb(250, 250, 110)))
                    .style(Style::default().bg(Color::Rgb(26, 26, 36))),
            );
        frame.render_widget(query_input, layout[1]);

        let results_title = if self.searched {
            format!(" Doctors ({}) ", self.results.len())
        } else {
            " Doctors ".to_string()
        };

        let header_cells = ["ID", "Name", "Specialization"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Rgb(230, 230, 250))));
        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::Rgb(26, 26, 36)))
            .height(1)
            .bottom_margin(1);

        let mut rows: Vec<Row> = self
            .results
            .iter()
            .map(|doctor| {
                Row::new(vec![
                    Cell::from(doctor.id.to_string()),
                    Cell::from(doctor.name.clone()),
                    Cell::from(doctor.specialization.clone()),
                ])
            })
            .collect();

        if self.searched && self.results.is_empty() {
            rows.push(Row::new(vec![
                Cell::from(""),
                Cell::from("No matches").style(Style::default().fg(Color::Rgb(180, 180, 200))),
                Cell::from(""),
            ]));
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(45),
                Constraint::Percentage(45),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(results_title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
                .style(Style::default().bg(Color::Rgb(22, 22, 35))),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 65))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        frame.render_stateful_widget(table, layout[2], &mut self.table_state.clone());

        let help_text = Paragraph::new("Type to edit | Enter: Search | Up/Down: Scroll | Esc: Back")
            .style(Style::default().fg(Color::Rgb(140, 140, 170)))
            .alignment(Alignment::Center);
        frame.render_widget(help_text, layout[3]);
    }
}

impl Default for SpecializationSearch {
    fn default() -> Self {
        Self::new()
    }
}
