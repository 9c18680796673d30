//! The main application state and logic for medroster.
//!
//! The `App` owns the single [`HospitalRegistry`] for the session and passes
//! it by reference into whichever screen is active, so roster state survives
//! every screen transition without any global state.

use crate::components::roster::{self, RosterApp};
use crate::components::{home::Home, Component};
use crate::registry::HospitalRegistry;
use crate::tui::{self, Tui};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// Enum representing the different screens within medroster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedApp {
    /// The "Add Doctor" screen.
    DoctorAdd,
    /// The "List Doctors" screen.
    DoctorList,
    /// The "Remove Doctor" screen.
    DoctorRemove,
    /// The "Add Patient" screen.
    PatientAdd,
    /// The "List Patients" screen.
    PatientList,
    /// The "Remove Patient" screen.
    PatientRemove,
    /// The "Search by Name" screen.
    SearchName,
    /// The "Search by Specialization" screen.
    SearchSpecialization,
    /// The "General Search" screen.
    SearchGeneral,
    /// No specific selection; used by screens to mean "back to the menu".
    None,
    /// The "Quit" action.
    Quit,
}

/// The possible states of the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// The home menu.
    Home,
    /// A roster screen is active.
    Running(SelectedApp),
}

/// Main application struct for medroster.
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    /// The session's roster. Owned here, lent to every screen.
    pub registry: HospitalRegistry,
    pub home: Home,
    /// The roster screen component; only exists while a screen is active.
    pub roster: Option<RosterApp>,
}

impl App {
    pub fn new() -> Self {
        let mut registry = HospitalRegistry::new();
        // Mutation log. The observer contract is the explicit notification
        // channel; the app points it at tracing.
        registry.set_on_change(Box::new(|event| info!(?event, "registry mutation")));

        Self {
            state: AppState::Home,
            should_quit: false,
            registry,
            home: Home::new(),
            roster: None,
        }
    }

    /// Runs the application's main loop: draw, then handle one event,
    /// until quit is requested.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        info!("session started");
        while !self.should_quit {
            tui.draw(|frame| self.render_ui(frame))?;
            self.handle_input(tui)?;
        }
        info!(
            doctors = self.registry.doctor_count(),
            patients = self.registry.patient_count(),
            "session ended"
        );
        Ok(())
    }

    fn handle_input(&mut self, tui: &mut Tui) -> Result<()> {
        match tui.next_event()? {
            tui::Event::Key(key) => {
                // Global keybinding: Ctrl+Q to quit
                if key.code == KeyCode::Char('q') && key.modifiers == KeyModifiers::CONTROL {
                    self.should_quit = true;
                    return Ok(());
                }
                self.handle_key(key)?;
            }
            tui::Event::Tick => {
                if let Some(roster) = &mut self.roster {
                    roster.tick();
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state {
            AppState::Home => {
                if let Some(selected) = self.home.handle_input(&mut self.registry, key)? {
                    match selected {
                        SelectedApp::Quit => {
                            self.should_quit = true;
                        }
                        SelectedApp::None => {}
                        screen => self.open_screen(screen),
                    }
                }
            }
            AppState::Running(_) => {
                if let Some(roster) = &mut self.roster {
                    if let Some(SelectedApp::None) = roster.handle_input(&mut self.registry, key)? {
                        // Back to the menu; drop the screen component.
                        self.state = AppState::Home;
                        self.roster = None;
                    }
                } else {
                    // A Running state without a component; recover to Home.
                    self.state = AppState::Home;
                }
            }
        }
        Ok(())
    }

    /// Builds the roster component positioned on the requested screen.
    fn open_screen(&mut self, screen: SelectedApp) {
        info!(?screen, "opening screen");
        let mut app = RosterApp::new();
        match screen {
            SelectedApp::DoctorAdd => {
                app.set_state(roster::RosterState::Doctors);
                app.doctors.state = roster::doctors::DoctorsState::Add;
            }
            SelectedApp::DoctorList => {
                app.set_state(roster::RosterState::Doctors);
                app.doctors.state = roster::doctors::DoctorsState::List;
                app.doctors.refresh(&self.registry);
            }
            SelectedApp::DoctorRemove => {
                app.set_state(roster::RosterState::Doctors);
                app.doctors.state = roster::doctors::DoctorsState::Remove;
                app.doctors.open_remove(&self.registry);
            }
            SelectedApp::PatientAdd => {
                app.set_state(roster::RosterState::Patients);
                app.patients.state = roster::patients::PatientsState::Add;
            }
            SelectedApp::PatientList => {
                app.set_state(roster::RosterState::Patients);
                app.patients.state = roster::patients::PatientsState::List;
                app.patients.refresh(&self.registry);
            }
            SelectedApp::PatientRemove => {
                app.set_state(roster::RosterState::Patients);
                app.patients.state = roster::patients::PatientsState::Remove;
                app.patients.open_remove(&self.registry);
            }
            SelectedApp::SearchName => {
                app.set_state(roster::RosterState::Search);
                app.search.state = roster::search::SearchState::ByName;
            }
            SelectedApp::SearchSpecialization => {
                app.set_state(roster::RosterState::Search);
                app.search.state = roster::search::SearchState::BySpecialization;
            }
            SelectedApp::SearchGeneral => {
                app.set_state(roster::RosterState::Search);
                app.search.state = roster::search::SearchState::General;
            }
            SelectedApp::None | SelectedApp::Quit => return,
        }
        self.roster = Some(app);
        self.state = AppState::Running(screen);
    }

    fn render_ui(&self, frame: &mut crate::tui::Frame<'_>) {
        match self.state {
            AppState::Home => self.home.render(&self.registry, frame),
            AppState::Running(_) => {
                if let Some(roster) = &self.roster {
                    roster.render(&self.registry, frame);
                }
            }
        }
    }
}
