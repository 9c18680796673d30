//! Search screens: by name, by specialization, and the general search.

use crate::app::SelectedApp;
use crate::components::Component;
use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod general;
pub mod name;
pub mod specialization;

use general::GeneralSearch;
use name::NameSearch;
use specialization::SpecializationSearch;

/// Actions a search screen can request from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    BackToHome,
}

/// The different search screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    ByName,
    BySpecialization,
    General,
}

/// Routes input and rendering to the active search screen.
pub struct Search {
    pub state: SearchState,
    pub by_name: NameSearch,
    pub by_specialization: SpecializationSearch,
    pub general: GeneralSearch,
}

impl Search {
    pub fn new() -> Self {
        Self {
            state: SearchState::ByName,
            by_name: NameSearch::new(),
            by_specialization: SpecializationSearch::new(),
            general: GeneralSearch::new(),
        }
    }
}

impl Component for Search {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<SelectedApp>> {
        let action = match self.state {
            SearchState::ByName => self.by_name.handle_input(registry, event)?,
            SearchState::BySpecialization => self.by_specialization.handle_input(registry, event)?,
            SearchState::General => self.general.handle_input(event)?,
        };
        if let Some(SearchAction::BackToHome) = action {
            return Ok(Some(SelectedApp::None));
        }
        Ok(None)
    }

    fn render(&self, registry: &HospitalRegistry, frame: &mut Frame) {
        match self.state {
            SearchState::ByName => self.by_name.render(frame),
            SearchState::BySpecialization => self.by_specialization.render(frame),
            SearchState::General => self.general.render(registry, frame),
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}
