use crate::app::SelectedApp;
use crate::components::Component;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph},
};

// Feature panel indices.
const FEATURE_DOCTORS: usize = 0;
const FEATURE_PATIENTS: usize = 1;
const FEATURE_SEARCH: usize = 2;

/// The home menu: feature panels on the left, their screens on the right.
///
/// Entries that need a non-empty collection render disabled while the
/// corresponding count is zero, mirroring the original menu's bound
/// disable state.
pub struct Home {
    selection_mode: usize,
    active_panel: usize,
    selected_feature_index: usize,
    submenu_states: Vec<ListState>,
    features: Vec<&'static str>,
    submenu_options: Vec<Vec<&'static str>>,
}

impl Home {
    pub fn new() -> Self {
        let features = vec!["Doctors", "Patients", "Search"];

        let submenu_options = vec![
            vec!["Add Doctor", "List Doctors", "Remove Doctor"],
            vec!["Add Patient", "List Patients", "Remove Patient"],
            vec!["By Name", "By Specialization", "General Search"],
        ];

        let mut submenu_states = Vec::new();
        for _ in 0..features.len() {
            let mut state = ListState::default();
            state.select(Some(0));
            submenu_states.push(state);
        }

        Self {
            selection_mode: 0,
            active_panel: 0,
            selected_feature_index: 0,
            submenu_states,
            features,
            submenu_options,
        }
    }

    /// Whether a submenu entry is currently selectable. Listing, removing
    /// and searching need records to act on; adding always works.
    fn entry_enabled(
        &self,
        registry: &HospitalRegistry,
        feature_idx: usize,
        submenu_idx: usize,
    ) -> bool {
        match (feature_idx, submenu_idx) {
            (FEATURE_DOCTORS, 1) | (FEATURE_DOCTORS, 2) => registry.doctor_count() > 0,
            (FEATURE_PATIENTS, 1) | (FEATURE_PATIENTS, 2) => registry.patient_count() > 0,
            (FEATURE_SEARCH, 0) => registry.total_people_count() > 0,
            (FEATURE_SEARCH, 1) => registry.doctor_count() > 0,
            _ => true,
        }
    }

    fn selected_screen(&self, feature_idx: usize, submenu_idx: usize) -> SelectedApp {
        match feature_idx {
            FEATURE_DOCTORS => match submenu_idx {
                0 => SelectedApp::DoctorAdd,
                1 => SelectedApp::DoctorList,
                _ => SelectedApp::DoctorRemove,
            },
            FEATURE_PATIENTS => match submenu_idx {
                0 => SelectedApp::PatientAdd,
                1 => SelectedApp::PatientList,
                _ => SelectedApp::PatientRemove,
            },
            _ => match submenu_idx {
                0 => SelectedApp::SearchName,
                1 => SelectedApp::SearchSpecialization,
                _ => SelectedApp::SearchGeneral,
            },
        }
    }

    fn handle_key(
        &mut self,
        registry: &HospitalRegistry,
        key: KeyEvent,
    ) -> Result<Option<SelectedApp>> {
        match key.code {
            KeyCode::Tab => {
                self.selection_mode = (self.selection_mode + 1) % 2;
            }
            KeyCode::Left => {
                if self.selection_mode == 0 && self.active_panel == 1 {
                    self.active_panel = 0;
                }
            }
            KeyCode::Right => {
                if self.selection_mode == 0 && self.active_panel == 0 {
                    self.active_panel = 1;
                }
            }
            KeyCode::Up => {
                if self.selection_mode == 0 {
                    if self.active_panel == 0 {
                        self.selected_feature_index = (self.selected_feature_index
                            + self.features.len()
                            - 1)
                            % self.features.len();
                    } else {
                        let submenu_state = &mut self.submenu_states[self.selected_feature_index];
                        if let Some(i) = submenu_state.selected() {
                            let max_index =
                                self.submenu_options[self.selected_feature_index].len() - 1;
                            let new_index = if i > 0 { i - 1 } else { max_index };
                            submenu_state.select(Some(new_index));
                        }
                    }
                }
            }
            KeyCode::Down => {
                if self.selection_mode == 0 {
                    if self.active_panel == 0 {
                        self.selected_feature_index =
                            (self.selected_feature_index + 1) % self.features.len();
                    } else {
                        let submenu_state = &mut self.submenu_states[self.selected_feature_index];
                        if let Some(i) = submenu_state.selected() {
                            let len = self.submenu_options[self.selected_feature_index].len();
                            submenu_state.select(Some((i + 1) % len));
                        }
                    }
                }
            }
            KeyCode::Enter => {
                if self.selection_mode == 1 {
                    return Ok(Some(SelectedApp::Quit));
                }
                if self.active_panel == 0 {
                    self.active_panel = 1;
                } else {
                    let feature_idx = self.selected_feature_index;
                    let submenu_idx = self.submenu_states[feature_idx].selected().unwrap_or(0);
                    if self.entry_enabled(registry, feature_idx, submenu_idx) {
                        return Ok(Some(self.selected_screen(feature_idx, submenu_idx)));
                    }
                    // Disabled entry; ignore.
                }
            }
            KeyCode::Esc => {
                if self.active_panel == 1 {
                    self.active_panel = 0;
                } else {
                    self.selection_mode = 1;
                }
            }
            _ => {}
        }

        Ok(None)
    }
}

impl Component for Home {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<SelectedApp>> {
        self.handle_key(registry, event)
    }

    fn render(&self, registry: &HospitalRegistry, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 16, 28))),
            frame.area(),
        );

        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(2),
                Constraint::Length(3),
            ])
            .split(area);

        let counts_text = Line::from(vec![
            Span::styled(
                "MEDROSTER",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   Doctors: {}   Patients: {}   Total: {}",
                    registry.doctor_count(),
                    registry.patient_count(),
                    registry.total_people_count()
                ),
                Style::default()
                    .fg(Color::Rgb(129, 199, 245))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(75, 75, 120)))
            .style(Style::default().bg(Color::Rgb(24, 24, 40)));

        let header_inner = header_block.inner(main_layout[0]);
        frame.render_widget(header_block, main_layout[0]);

        let header_paragraph = Paragraph::new(counts_text)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        frame.render_widget(header_paragraph, header_inner);

        let instruction = Paragraph::new("Please select a task:")
            .style(Style::default().fg(Color::Rgb(180, 190, 254)))
            .alignment(Alignment::Center);
        frame.render_widget(instruction, main_layout[1]);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .spacing(2)
            .margin(1)
            .split(main_layout[2]);

        let left_panel_style = if self.active_panel == 0 && self.selection_mode == 0 {
            Style::default().fg(Color::Rgb(250, 250, 110))
        } else {
            Style::default().fg(Color::Rgb(140, 140, 200))
        };

        let left_panel_block = Block::default()
            .title(" Hospital Roster ")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(left_panel_style)
            .style(Style::default().bg(Color::Rgb(22, 22, 35)));

        frame.render_widget(left_panel_block.clone(), content_layout[0]);
        let left_inner = left_panel_block.inner(content_layout[0]);

        let feature_items: Vec<ListItem> = self
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| {
                let style = if idx == self.selected_feature_index {
                    if self.active_panel == 0 && self.selection_mode == 0 {
                        Style::default()
                            .fg(Color::Rgb(250, 250, 110))
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::Rgb(140, 219, 140))
                            .add_modifier(Modifier::BOLD)
                    }
                } else {
                    Style::default().fg(Color::Rgb(200, 200, 220))
                };

                let prefix = if idx == self.selected_feature_index {
                    " > "
                } else {
                    "   "
                };

                ListItem::new(format!("{}{}", prefix, feature)).style(style)
            })
            .collect();

        let features_list = List::new(feature_items)
            .block(Block::default().padding(Padding::new(1, 0, 1, 0)));
        frame.render_widget(features_list, left_inner);

        let right_panel_style = if self.active_panel == 1 && self.selection_mode == 0 {
            Style::default().fg(Color::Rgb(250, 250, 110))
        } else {
            Style::default().fg(Color::Rgb(140, 140, 200))
        };

        let right_panel_block = Block::default()
            .title(" Tasks ")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(230, 230, 250))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(right_panel_style)
            .style(Style::default().bg(Color::Rgb(22, 22, 35)));

        frame.render_widget(right_panel_block.clone(), content_layout[1]);
        let right_inner = right_panel_block.inner(content_layout[1]);

        let current_submenu = &self.submenu_options[self.selected_feature_index];
        let current_submenu_state = &self.submenu_states[self.selected_feature_index];

        let submenu_items: Vec<ListItem> = current_submenu
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let enabled = self.entry_enabled(registry, self.selected_feature_index, idx);
                let style = if !enabled {
                    Style::default().fg(Color::Rgb(90, 90, 110))
                } else if current_submenu_state.selected() == Some(idx) {
                    if self.active_panel == 1 && self.selection_mode == 0 {
                        Style::default()
                            .fg(Color::Rgb(250, 250, 110))
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::Rgb(129, 199, 245))
                            .add_modifier(Modifier::BOLD)
                    }
                } else {
                    Style::default().fg(Color::Rgb(200, 200, 220))
                };

                let prefix = if current_submenu_state.selected() == Some(idx) {
                    " > "
                } else {
                    "   "
                };

                let suffix = if enabled { "" } else { "  (no records)" };

                ListItem::new(format!("{}{}{}", prefix, option, suffix)).style(style)
            })
            .collect();

        let submenu_list =
            List::new(submenu_items).block(Block::default().padding(Padding::new(2, 0, 2, 0)));
        frame.render_widget(submenu_list, right_inner);

        // Current selections carried between screens, if any.
        let mut status_spans = vec![Span::styled(
            "Selected: ",
            Style::default().fg(Color::Rgb(140, 140, 170)),
        )];
        match registry.current_doctor() {
            Some(doctor) => status_spans.push(Span::styled(
                doctor.to_string(),
                Style::default().fg(Color::Rgb(140, 219, 140)),
            )),
            None => status_spans.push(Span::styled(
                "no doctor",
                Style::default().fg(Color::Rgb(100, 100, 130)),
            )),
        }
        status_spans.push(Span::styled(
            " | ",
            Style::default().fg(Color::Rgb(100, 100, 130)),
        ));
        match registry.current_patient() {
            Some(patient) => status_spans.push(Span::styled(
                patient.to_string(),
                Style::default().fg(Color::Rgb(140, 219, 140)),
            )),
            None => status_spans.push(Span::styled(
                "no patient",
                Style::default().fg(Color::Rgb(100, 100, 130)),
            )),
        }

        let status_line = Paragraph::new(Line::from(status_spans)).alignment(Alignment::Center);
        frame.render_widget(status_line, main_layout[3]);

        let quit_text = if self.selection_mode == 1 {
            "[ Quit ]"
        } else {
            "  Quit  "
        };

        let quit_style = if self.selection_mode == 1 {
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(180, 180, 200))
        };

        let quit_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.selection_mode == 1 {
                Style::default().fg(Color::Rgb(255, 100, 100))
            } else {
                Style::default().fg(Color::Rgb(100, 100, 140))
            })
            .style(Style::default().bg(Color::Rgb(26, 26, 36)));

        frame.render_widget(quit_block.clone(), main_layout[4]);
        let quit_inner = quit_block.inner(main_layout[4]);

        let quit_paragraph = Paragraph::new(quit_text)
            .style(quit_style)
            .alignment(Alignment::Center);
        frame.render_widget(quit_paragraph, quit_inner);
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}
