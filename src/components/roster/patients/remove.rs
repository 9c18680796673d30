//! Remove Patient screen.

use crate::components::roster::patients::PatientAction;
use crate::models::Patient;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use std::time::{Duration, Instant};

/// Screen for removing a patient, with a confirmation dialog.
pub struct RemovePatient {
    patients: Vec<Patient>,
    table_state: TableState,
    show_confirmation: bool,
    confirmation_selected: usize, // 0 for Yes, 1 for No
    error_message: Option<String>,
    success_message: Option<String>,
    error_timer: Option<Instant>,
    success_timer: Option<Instant>,
}

impl RemovePatient {
    pub fn new(registry: &HospitalRegistry) -> Self {
        let patients = registry.patients().to_vec();
        let mut table_state = TableState::default();
        if !patients.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            patients,
            table_state,
            show_confirmation: false,
            confirmation_selected: 1, // Default to "No"
            error_message: None,
            success_message: None,
            error_timer: None,
            success_timer: None,
        }
    }

    fn refresh(&mut self, registry: &HospitalRegistry) {
        self.patients = registry.patients().to_vec();
        if self.patients.is_empty() {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.patients.len() {
                self.table_state.select(Some(self.patients.len() - 1));
            }
        }
    }

    fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.error_timer = Some(Instant::now());
    }

    fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.success_timer = Some(Instant::now());
    }

    pub fn check_timeouts(&mut self) {
        if let Some(timer) = self.error_timer {
            if timer.elapsed() > Duration::from_secs(5) {
                self.error_message = None;
                self.error_timer = None;
            }
        }
        if let Some(timer) = self.success_timer {
            if timer.elapsed() > Duration::from_secs(5) {
                self.success_message = None;
                self.success_timer = None;
            }
        }
    }

    pub fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        key: KeyEvent,
    ) -> Result<Option<PatientAction>> {
        self.check_timeouts();

        if self.show_confirmation {
            match key.code {
                KeyCode::Left | KeyCode::Right => {
                    self.confirmation_selected = 1 - self.confirmation_selected;
                }
                KeyCode::Enter => {
                    if self.confirmation_selected == 0 {
                        if let Some(selected) = self.table_state.selected() {
                            if let Some(patient) = self.patients.get(selected) {
                                let id = patient.id;
                                if registry.remove_patient(id) {
                                    self.set_success(format!("Patient {id} removed"));
                                } else {
                                    self.set_error(format!("Patient {id} was not on the roster"));
                                }
                                self.refresh(registry);
                            }
                        }
                    }
                    self.show_confirmation = false;
                }
                KeyCode::Esc => {
                    self.show_confirmation = false;
                }
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Down => {
                    if !self.patients.is_empty() {
                        let next = match self.table_state.selected() {
                            Some(i) if i >= self.patients.len() - 1 => 0,
                            Some(i) => i + 1,
                            None => 0,
                        };
                        self.table_state.select(Some(next));
                    }
                }
                KeyCode::Up => {
                    if !self.patients.is_empty() {
                        let next = match self.table_state.selected() {
                            Some(0) | None => self.patients.len() - 1,
                            Some(i) => i - 1,
                        };
                        self.table_state.select(Some(next));
                    }
                }
                KeyCode::Enter => {
                    if self.table_state.selected().is_some() && !self.patients.is_empty() {
                        self.show_confirmation = true;
                        self.confirmation_selected = 1; // Default to "No" for safety
                    }
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.refresh(registry);
                }
                KeyCode::Esc => {
                    return Ok(Some(PatientAction::BackToHome));
                }
                _ => {}
            }
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
                Constraint::Length(2), // Instructions
                Constraint::Min(5),    // Table
                Constraint::Length(2), // Message area
            ])
            .margin(1)
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(16, 16, 28)));
        frame.render_widget(header_block, layout[0]);

        let title = Paragraph::new("REMOVE PATIENT")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let instructions =
            Paragraph::new("Up/Down: Navigate   Enter: Remove selected   R: Refresh   Esc: Back")
                .style(Style::default().fg(Color::Rgb(180, 180, 200)))
                .alignment(Alignment::Center);
        frame.render_widget(instructions, layout[1]);

        let table_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Patients ")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Rgb(140, 140, 200)))
            .style(Style::default().bg(Color::Rgb(26, 26, 36)));

        let normal_style = Style::default()
            .bg(Color::Rgb(26, 26, 36))
            .fg(Color::Rgb(220, 220, 240));

        let mut rows: Vec<Row> = self
            .patients
            .iter()
            .map(|patient| {
                Row::new(vec![
                    Cell::from(patient.id.to_string()).style(normal_style),
                    Cell::from(patient.name.clone()).style(normal_style),
                    Cell::from(patient.date_of_birth.clone()).style(normal_style),
                ])
            })
            .collect();

        if self.patients.is_empty() {
            rows.push(Row::new(vec![
                Cell::from(""),
                Cell::from("No patients on the roster")
                    .style(Style::default().fg(Color::Rgb(180, 180, 200))),
                Cell::from(""),
            ]));
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(55),
                Constraint::Percentage(35),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Date of Birth").style(Style::default().add_modifier(Modifier::BOLD)),
            ])
            .style(Style::default().fg(Color::Rgb(180, 180, 250)))
            .height(1),
        )
        .block(table_block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(45, 45, 60))
                .fg(Color::Rgb(250, 250, 250))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        frame.render_stateful_widget(table, layout[2], &mut self.table_state.clone());

        if let Some(success) = &self.success_message {
            let success_paragraph = Paragraph::new(success.as_str())
                .style(
                    Style::default()
                        .fg(Color::Rgb(140, 219, 140))
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            frame.render_widget(success_paragraph, layout[3]);
        } else if let Some(error) = &self.error_message {
            let error_paragraph = Paragraph::new(error.as_str())
                .style(
                    Style::default()
                        .fg(Color::Rgb(240, 100, 100))
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            frame.render_widget(error_paragraph, layout[3]);
        }

        if self.show_confirmation {
            let dialog_width = 50;
            let dialog_height = 8;
            let dialog_area = Rect::new(
                (area.width.saturating_sub(dialog_width)) / 2,
                (area.height.saturating_sub(dialog_height)) / 2,
                dialog_width,
                dialog_height,
            );

            frame.render_widget(Clear, dialog_area);

            let dialog_block = Block::default()
                .title(" Remove Patient ")
                .title_style(
                    Style::default()
                        .fg(Color::Rgb(230, 230, 250))
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(140, 140, 200)))
                .style(Style::default().bg(Color::Rgb(30, 30, 46)));

            frame.render_widget(dialog_block.clone(), dialog_area);

            let inner_area = dialog_block.inner(dialog_area);
            let content_layout = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([Constraint::Length(2), Constraint::Length(2)])
                .split(inner_area);

            let message = Paragraph::new("Remove the selected patient from the roster?")
                .style(Style::default().fg(Color::Rgb(220, 220, 240)))
                .add_modifier(Modifier::BOLD)
                .alignment(Alignment::Center);
            frame.render_widget(message, content_layout[0]);

            let buttons_layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(content_layout[1]);

            let yes_style = if self.confirmation_selected == 0 {
                Style::default()
                    .fg(Color::Rgb(140, 219, 140))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(180, 180, 200))
            };
            let no_style = if self.confirmation_selected == 1 {
                Style::default()
                    .fg(Color::Rgb(255, 100, 100))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(180, 180, 200))
            };

            let yes_text = if self.confirmation_selected == 0 {
                "> Yes <"
            } else {
                "  Yes  "
            };
            let no_text = if self.confirmation_selected == 1 {
                "> No <"
            } else {
                "  No  "
            };

            let yes_button = Paragraph::new(yes_text)
                .style(yes_style)
                .alignment(Alignment::Center);
            let no_button = Paragraph::new(no_text)
                .style(no_style)
                .alignment(Alignment::Center);

            frame.render_widget(yes_button, buttons_layout[0]);
            frame.render_widget(no_button, buttons_layout[1]);
        }
    }
}
