//! Roster management screens.
//!
//! This module groups the doctor, patient and search screens and routes
//! input and rendering to whichever group is active.

use crate::components::Component;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod doctors;
pub mod patients;
pub mod search;

/// Which screen group is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    Doctors,
    Patients,
    Search,
}

/// The roster application component: doctor, patient and search screens
/// behind one dispatching facade.
pub struct RosterApp {
    pub state: RosterState,
    pub doctors: doctors::Doctors,
    pub patients: patients::Patients,
    pub search: search::Search,
}

impl RosterApp {
    pub fn new() -> Self {
        Self {
            state: RosterState::Doctors,
            doctors: doctors::Doctors::new(),
            patients: patients::Patients::new(),
            search: search::Search::new(),
        }
    }

    pub fn set_state(&mut self, state: RosterState) {
        self.state = state;
    }

    /// Periodic update hook; expires stale message banners.
    pub fn tick(&mut self) {
        self.doctors.tick();
        self.patients.tick();
    }
}

impl Component for RosterApp {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<crate::app::SelectedApp>> {
        match self.state {
            RosterState::Doctors => self.doctors.handle_input(registry, event),
            RosterState::Patients => self.patients.handle_input(registry, event),
            RosterState::Search => self.search.handle_input(registry, event),
        }
    }

    fn render(&self, registry: &HospitalRegistry, frame: &mut Frame) {
        match self.state {
            RosterState::Doctors => self.doctors.render(registry, frame),
            RosterState::Patients => self.patients.render(registry, frame),
            RosterState::Search => self.search.render(registry, frame),
        }
    }
}

impl Default for RosterApp {
    fn default() -> Self {
        Self::new()
    }
}
