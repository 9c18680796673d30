use crate::components::roster::patients::PatientAction;
use crate::models::Patient;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use std::time::{Duration, Instant};
use time::{format_description, Date};

const INPUT_FIELDS: usize = 2;

/// Form for registering a new patient: name and date of birth.
pub struct AddPatient {
    name: String,
    dob: String,
    focus_index: usize,
    error_message: Option<String>,
    error_timer: Option<Instant>,
    success_message: Option<String>,
    success_timer: Option<Instant>,
}

/// The date of birth must parse as a real calendar date in `YYYY-MM-DD`.
fn dob_is_valid(dob: &str) -> bool {
    format_description::parse("[year]-[month]-[day]")
        .ok()
        .and_then(|format| Date::parse(dob, &format).ok())
        .is_some()
}

impl Default for AddPatient {
    fn default() -> Self {
        AddPatient {
            name: String::new(),
            dob: String::new(),
            focus_index: 0,
            error_message: None,
            error_timer: None,
            success_message: None,
            success_timer: None,
        }
    }
}

impl AddPatient {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear_error(&mut self) {
        self.error_message = None;
        self.error_timer = None;
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
                self.clear_error();
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
        match key.code {
            KeyCode::Char(c) => {
                match self.focus_index {
                    0 => self.name.push(c),
                    1 => self.dob.push(c),
                    _ => {}
                }
                self.clear_error();
            }
            KeyCode::Backspace => {
                match self.focus_index {
                    0 => self.name.pop(),
                    1 => self.dob.pop(),
                    _ => None,
                };
                self.clear_error();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_index = (self.focus_index + 1) % (INPUT_FIELDS + 2);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_index = (self.focus_index + INPUT_FIELDS + 1) % (INPUT_FIELDS + 2);
            }
            KeyCode::Esc => {
                return Ok(Some(PatientAction::BackToHome));
            }
            KeyCode::Enter => {
                if self.focus_index == INPUT_FIELDS + 1 {
                    return Ok(Some(PatientAction::BackToHome));
                } else if self.focus_index == INPUT_FIELDS {
                    if self.name.is_empty() {
                        self.set_error("Name cannot be empty".to_string());
                        return Ok(None);
                    }
                    if self.dob.is_empty() {
                        self.set_error("Date of Birth cannot be empty".to_string());
                        return Ok(None);
                    }
                    if !dob_is_valid(&self.dob) {
                        self.set_error("Date of Birth must be YYYY-MM-DD".to_string());
                        return Ok(None);
                    }

                    let id = registry.add_patient(Patient {
                        id: 0,
                        name: self.name.clone(),
                        date_of_birth: self.dob.clone(),
                    });

                    self.name.clear();
                    self.dob.clear();
                    self.focus_index = 0;
                    self.clear_error();
                    self.set_success(format!("Patient added with id {id}"));
                } else {
                    self.focus_index += 1;
                }
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

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
                Constraint::Length(6),
            ])
            .margin(1)
            .split(area);

        let header = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(16, 16, 28)));
        frame.render_widget(header, main_layout[0]);

        let title = Paragraph::new("PATIENT REGISTRATION")
            .style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Rgb(16, 16, 28)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, main_layout[0]);

        let body_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(22, 22, 35)));

        frame.render_widget(body_block.clone(), main_layout[1]);
        let body_inner = body_block.inner(main_layout[1]);

        let form_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .margin(1)
            .split(body_inner);

        let field_style = Style::default().fg(Color::Rgb(230, 230, 250));

        let name_input = Paragraph::new(self.name.clone())
            .style(
                Style::default()
                    .fg(Color::Rgb(220, 220, 240))
                    .bg(Color::Rgb(26, 26, 36)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(" Name* ", field_style))
                    .border_style(if self.focus_index == 0 {
                        Style::default().fg(Color::Rgb(250, 250, 110))
                    } else {
                        Style::default().fg(Color::Rgb(140, 140, 200))
                    })
                    .style(Style::default().bg(Color::Rgb(26, 26, 36))),
            );
        frame.render_widget(name_input, form_layout[0]);

        let dob_input = Paragraph::new(self.dob.clone())
            .style(
                Style::default()
                    .fg(Color::Rgb(220, 220, 240))
                    .bg(Color::Rgb(26, 26, 36)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(" Date of Birth* (YYYY-MM-DD) ", field_style))
                    .border_style(if self.focus_index == 1 {
                        Style::default().fg(Color::Rgb(250, 250, 110))
                    } else {
                        Style::default().fg(Color::Rgb(140, 140, 200))
                    })
                    .style(Style::default().bg(Color::Rgb(26, 26, 36))),
            );
        frame.render_widget(dob_input, form_layout[1]);

        let status_message = if let Some(success) = &self.success_message {
            Paragraph::new(format!("OK: {}", success))
                .style(
                    Style::default()
                        .fg(Color::Rgb(140, 219, 140))
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::Rgb(16, 16, 28)),
                )
                .alignment(Alignment::Center)
        } else if let Some(error) = &self.error_message {
            Paragraph::new(format!("Error: {}", error))
                .style(
                    Style::default()
                        .fg(Color::Rgb(255, 100, 100))
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::Rgb(16, 16, 28)),
                )
                .alignment(Alignment::Center)
        } else {
            Paragraph::new("").style(Style::default().bg(Color::Rgb(16, 16, 28)))
        };
        frame.render_widget(status_message, main_layout[2]);

        let footer_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(2),
            ])
            .split(main_layout[3]);

        let submit_text = if self.focus_index == INPUT_FIELDS {
            "> Submit <"
        } else {
            "  Submit  "
        };
        let submit_style = if self.focus_index == INPUT_FIELDS {
            Style::default()
                .fg(Color::Rgb(140, 219, 140))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(180, 180, 200))
        };
        let submit_button = Paragraph::new(submit_text)
            .style(submit_style)
            .alignment(Alignment::Center);
        frame.render_widget(submit_button, footer_layout[0]);

        let back_text = if self.focus_index == INPUT_FIELDS + 1 {
            "> Back <"
        } else {
            "  Back  "
        };
        let back_style = if self.focus_index == INPUT_FIELDS + 1 {
            Style::default()
                .fg(Color::Rgb(129, 199, 245))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(180, 180, 200))
        };
        let back_button = Paragraph::new(back_text)
            .style(back_style)
            .alignment(Alignment::Center);
        frame.render_widget(back_button, footer_layout[1]);

        let help_text =
            Paragraph::new("Tab/Arrows: Switch Fields | Enter: Submit | Esc: Back")
                .style(
                    Style::default()
                        .fg(Color::Rgb(140, 140, 170))
                        .bg(Color::Rgb(16, 16, 28)),
                )
                .alignment(Alignment::Center);
        frame.render_widget(help_text, footer_layout[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::dob_is_valid;

    #[test]
    fn accepts_iso_dates_and_rejects_other_shapes() {
        assert!(dob_is_valid("1984-07-21"));
        assert!(!dob_is_valid("21/07/1984"));
        assert!(!dob_is_valid("1984-13-01"));
        assert!(!dob_is_valid(""));
    }
}
