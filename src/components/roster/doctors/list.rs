//! List Doctors screen.

use crate::components::roster::doctors::DoctorAction;
use crate::models::Doctor;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

// Focus indices.
const DOCTOR_TABLE: usize = 0;
const BACK_BUTTON: usize = 1;

/// Screen showing the doctor roster in insertion order.
///
/// Works on a snapshot taken from the registry; `R` re-snapshots. Pressing
/// Enter on a row parks that doctor in the registry's current-doctor slot so
/// later screens can pick it up.
pub struct ListDoctors {
    doctors: Vec<Doctor>,
    state: TableState,
    show_details: bool,
    focus_index: usize,
}

impl ListDoctors {
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            state: TableState::default(),
            show_details: false,
            focus_index: DOCTOR_TABLE,
        }
    }

    /// Re-snapshots the roster from the registry, clamping the selection.
    pub fn refresh(&mut self, registry: &HospitalRegistry) {
        self.doctors = registry.doctors().to_vec();
        if self.doctors.is_empty() {
            self.state.select(None);
        } else {
            let selection = self.state.selected().unwrap_or(0).min(self.doctors.len() - 1);
            self.state.select(Some(selection));
        }
    }

    fn select_next(&mut self) {
        if self.doctors.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.doctors.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.doctors.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.doctors.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn selected_doctor(&self) -> Option<&Doctor> {
        self.state.selected().and_then(|i| self.doctors.get(i))
    }

    pub fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        key: KeyEvent,
    ) -> Result<Option<DoctorAction>> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_index = (self.focus_index + 1) % 2;
            }
            KeyCode::Down => {
                if self.focus_index == DOCTOR_TABLE {
                    self.select_next();
                }
            }
            KeyCode::Up => {
                if self.focus_index == DOCTOR_TABLE {
                    self.select_previous();
                }
            }
            KeyCode::Enter => {
                if self.focus_index == BACK_BUTTON {
                    return Ok(Some(DoctorAction::BackToHome));
                }
                if let Some(doctor) = self.selected_doctor() {
                    registry.set_current_doctor(Some(doctor.id));
                    self.show_details = !self.show_details;
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh(registry);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                return Ok(Some(DoctorAction::BackToHome));
            }
            KeyCode::Esc => {
                if self.show_details {
                    self.show_details = false;
                } else {
                    return Ok(Some(DoctorAction::BackToHome));
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

        let title = Paragraph::new("DOCTOR ROSTER")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let header_cells = ["ID", "Name", "Specialization"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Rgb(230, 230, 250))));
        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::Rgb(26, 26, 36)))
            .height(1)
            .bottom_margin(1);

        let rows = self.doctors.iter().map(|doctor| {
            Row::new(vec![
                Cell::from(doctor.id.to_string()),
                Cell::from(doctor.name.clone()),
                Cell::from(doctor.specialization.clone()),
            ])
            .height(1)
        });

        let highlight_style = if self.focus_index == DOCTOR_TABLE {
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
                Constraint::Percentage(45),
                Constraint::Percentage(45),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Doctors ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
                .style(Style::default().bg(Color::Rgb(22, 22, 35))),
        )
        .row_highlight_style(highlight_style)
        .highlight_symbol(if self.focus_index == DOCTOR_TABLE {
            "> "
        } else {
            "  "
        });

        frame.render_stateful_widget(table, layout[1], &mut self.state.clone());

        if self.show_details && self.selected_doctor().is_some() {
            if let Some(doctor) = self.selected_doctor() {
                let details_widget = Paragraph::new(doctor.to_string())
                    .style(Style::default().fg(Color::Rgb(200, 200, 220)))
                    .block(
                        Block::default()
                            .title(" Doctor Details ")
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

impl Default for ListDoctors {
    fn default() -> Self {
        Self::new()
    }
}
