//! Doctor management screens.

use crate::app::SelectedApp;
use crate::components::Component;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod add;
pub mod list;
pub mod remove;

use add::AddDoctor;
use list::ListDoctors;
use remove::RemoveDoctor;

/// Actions a doctor screen can request from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorAction {
    BackToHome,
}

/// The different doctor screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorsState {
    Add,
    List,
    Remove,
}

/// Routes input and rendering to the active doctor screen.
pub struct Doctors {
    pub add: AddDoctor,
    pub list: ListDoctors,
    pub remove: Option<RemoveDoctor>,
    pub state: DoctorsState,
}

impl Doctors {
    pub fn new() -> Self {
        Self {
            add: AddDoctor::new(),
            list: ListDoctors::new(),
            remove: None,
            state: DoctorsState::List,
        }
    }

    /// Re-snapshots the list screen from the registry.
    pub fn refresh(&mut self, registry: &HospitalRegistry) {
        self.list.refresh(registry);
    }

    /// Enters the removal screen with a fresh snapshot.
    pub fn open_remove(&mut self, registry: &HospitalRegistry) {
        self.remove = Some(RemoveDoctor::new(registry));
    }

    pub fn tick(&mut self) {
        self.add.check_timeouts();
        if let Some(remove) = &mut self.remove {
            remove.check_timeouts();
        }
    }
}

impl Component for Doctors {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<SelectedApp>> {
        match self.state {
            DoctorsState::Add => {
                if let Some(DoctorAction::BackToHome) = self.add.handle_input(registry, event)? {
                    return Ok(Some(SelectedApp::None));
                }
            }
            DoctorsState::List => {
                if let Some(DoctorAction::BackToHome) = self.list.handle_input(registry, event)? {
                    return Ok(Some(SelectedApp::None));
                }
            }
            DoctorsState::Remove => {
                if let Some(remove) = &mut self.remove {
                    if let Some(DoctorAction::BackToHome) = remove.handle_input(registry, event)? {
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
            DoctorsState::Add => self.add.render(frame),
            DoctorsState::List => self.list.render(registry, frame),
            DoctorsState::Remove => {
                if let Some(remove) = &self.remove {
                    remove.render(frame);
                }
            }
        }
    }
}

impl Default for Doctors {
    fn default() -> Self {
        Self::new()
    }
}
