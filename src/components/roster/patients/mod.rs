//! Patient management screens.

use crate::app::SelectedApp;
use crate::components::Component;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod add;
pub mod list;
pub mod remove;

use add::AddPatient;
use list::ListPatients;
use remove::RemovePatient;

/// Actions a patient screen can request from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientAction {
    BackToHome,
}

/// The different patient screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientsState {
    Add,
    List,
    Remove,
}

/// Routes input and rendering to the active patient screen.
pub struct Patients {
    pub add: AddPatient,
    pub list: ListPatients,
    pub remove: Option<RemovePatient>,
    pub state: PatientsState,
}

impl Patients {
    pub fn new() -> Self {
        Self {
            add: AddPatient::new(),
            list: ListPatients::new(),
            remove: None,
            state: PatientsState::List,
        }
    }

    /// Re-snapshots the list screen from the registry.
    pub fn refresh(&mut self, registry: &HospitalRegistry) {
        self.list.refresh(registry);
    }

    /// Enters the removal screen with a fresh snapshot.
    pub fn open_remove(&mut self, registry: &HospitalRegistry) {
        self.remove = Some(RemovePatient::new(registry));
    }

    pub fn tick(&mut self) {
        self.add.check_timeouts();
        if let Some(remove) = &mut self.remove {
            remove.check_timeouts();
        }
    }
}

impl Component for Patients {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<SelectedApp>> {
        match self.state {
            PatientsState::Add => {
                if let Some(PatientAction::BackToHome) = self.add.handle_input(registry, event)? {
                    return Ok(Some(SelectedApp::None));
                }
            }
            PatientsState::List => {
                if let Some(PatientAction::BackToHome) = self.list.handle_input(registry, event)? {
                    return Ok(Some(SelectedApp::None));
                }
            }
            PatientsState::Remove => {
                if let Some(remove) = &mut self.remove {
                    if let Some(PatientAction::BackToHome) = remove.handle_input(registry, event)? {
                        self.remove = None;
                        return Ok(Some(SelectedApp::None));
                    }
                }
            }
        }
        Ok(None)
    }

    fn render(&self, registry: &HospitalRegistry, frame: &mut Frame) {
        match self.state {
            PatientsState::Add => self.add.render(frame),
            PatientsState::List => self.list.render(registry, frame),
            PatientsState::Remove => {
                if let Some(remove) = &self.remove {
                    remove.render(frame);
                }
            }
        }
    }
}

impl Default for Patients {
    fn default() -> Self {
        Self::new()
    }
}
