use crate::registry::HospitalRegistry;
use crate::tui::Frame;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod home;
pub mod roster;

/// A screen in the application.
///
/// Every screen receives the session's registry by reference on each call,
/// the way the original controllers were handed the shared hospital
/// instance. Returning `Some(SelectedApp)` asks the app to switch screens.
pub trait Component {
    fn handle_input(
        &mut self,
        registry: &mut HospitalRegistry,
        event: KeyEvent,
    ) -> Result<Option<crate::app::SelectedApp>>;
    fn render(&self, registry: &HospitalRegistry, frame: &mut Frame);
}
