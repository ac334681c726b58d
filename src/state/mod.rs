//! Application state modules
//!
//! Grouped state structs owned by MealdeckApp. Each state struct owns its
//! related fields and poll methods.

mod meals;
mod ui;

pub use meals::MealsState;
pub use ui::{Tab, UiState};

use crate::browser::BrowserEvent;

/// Events that state methods can return.
/// These communicate results back to MealdeckApp without direct mutation.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Presentation intent from the browser state
    Browser(BrowserEvent),
}
