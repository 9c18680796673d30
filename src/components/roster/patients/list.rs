//! List Patients screen.

use crate::components::roster::patients::PatientAction;
use crate::models::Patient;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

// Focus indices.
const PATIENT_TABLE: usize = 0;
const BACK_BUTTON: usize = 1;

/// Screen showing the patient roster in insertion order.
///
/// Enter on a row parks that patient in the registry's current-patient slot.
pub struct ListPatients {
    patients: Vec<Patient>,
    state: TableState,
    show_details: bool,
    focus_index: usize,
}

impl ListPatients {
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            state: TableState::default(),
            show_details: false,
            focus_index: PATIENT_TABLE,
        }
    }

    /// Re-snapshots the roster from the registry, clamping the selection.
    pub fn refresh(&mut self, registry: &HospitalRegistry) {
        self.patients = registry.patients().to_vec();
        if self.patients.is_empty() {
            self.state.select(None);
        } else {
            let selection = self
                .state
                .selected()
                .unwrap_or(0)
                .min(self.patients.len() - 1);
            self.state.select(Some(selection));
        }
    }

    fn select_next(&mut self) {
        if self.patients.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.patients.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.patients.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.patients.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn selected_patient(&self) -> Option<&Patient> {
        self.state.selected().and_then(|i| self.patients.get(i))
    }

    pub fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        key: KeyEvent,
    ) -> Result<Option<PatientAction>> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_index = (self.focus_index + 1) % 2;
            }
            KeyCode::Down => {
                if self.focus_index == PATIENT_TABLE {
                    self.select_next();
                }
            }
            KeyCode::Up => {
                if self.focus_index == PATIENT_TABLE {
                    self.select_previous();
                }
            }
            KeyCode::Enter => {
                if self.focus_index == BACK_BUTTON {
                    return Ok(Some(PatientAction::BackToHome));
                }
                if let Some(patient) = self.selected_patient() {
                    registry.set_current_patient(Some(patient.id));
                    self.show_details = !self.show_details;
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh(registry);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                return Ok(Some(PatientAction::BackToHome));
            }
            KeyCode::Esc => {
                if self.show_details {
                    self.show_details = false;
                } else {
                    return Ok(Some(PatientAction::BackToHome));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    pub fn render(&self, _registry: &HospitalRegistry, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 16, 28))),
            area,
        );

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Table
                Constraint::Length(3), // Details or help text
                Constraint::Length(2), // Back button
            ])
            .margin(1)
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(16, 16, 28)));
        frame.render_widget(header_block, layout[0]);

        let title = Paragraph::new("PATIENT ROSTER")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let header_cells = ["ID", "Name", "Date of Birth"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Rgb(230, 230, 250))));
        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::Rgb(26, 26, 36)))
            .height(1)
            .bottom_margin(1);

        let rows = self.patients.iter().map(|patient| {
            Row::new(vec![
                Cell::from(patient.id.to_string()),
                Cell::from(patient.name.clone()),
                Cell::from(patient.date_of_birth.clone()),
            ])
            .height(1)
        });

        let highlight_style = if self.focus_index == PATIENT_TABLE {
            Style::default()
                .bg(Color::Rgb(40, 40, 65))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(Color::Rgb(30, 30, 45))
                .add_modifier(Modifier::BOLD)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(10),
                Constraint::Percentage(50),
                Constraint::Percentage(40),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Patients ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
                .style(Style::default().bg(Color::Rgb(22, 22, 35))),
        )
        .row_highlight_style(highlight_style)
        .highlight_symbol(if self.focus_index == PATIENT_TABLE {
            "> "
        } else {
            "  "
        });

        frame.render_stateful_widget(table, layout[1], &mut self.state.clone());

        if self.show_details && self.selected_patient().is_some() {
            if let Some(patient) = self.selected_patient() {
                let details_widget = Paragraph::new(patient.to_string())
                    .style(Style::default().fg(Color::Rgb(200, 200, 220)))
                    .block(
                        Block::default()
                            .title(" Patient Details ")
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Rgb(75, 75, 120))),
                    )
                    .wrap(Wrap { trim: true });
                frame.render_widget(details_widget, layout[2]);
            }
        } else {
            let help_text =
                Paragraph::new("Up/Down: Navigate | Enter: Select & Details | R: Refresh | Esc: Back")
                    .style(Style::default().fg(Color::Rgb(140, 140, 170)))
                    .alignment(Alignment::Center);
            frame.render_widget(help_text, layout[2]);
        }

        let back_text = if self.focus_index == BACK_BUTTON {
            "> Back <"
        } else {
            "  Back  "
        };
        let back_style = if self.focus_index == BACK_BUTTON {
            Style::default()
                .fg(Color::Rgb(129, 199, 245))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(180, 180, 200))
        };
        let back_button = Paragraph::new(back_text)
            .style(back_style)
            .alignment(Alignment::Center);
        frame.render_widget(back_button, layout[3]);
    }
}

impl Default for ListPatients {
    fn default() -> Self {
        Self::new()
    }
}
