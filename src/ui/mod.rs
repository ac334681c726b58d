//! UI modules for Mealdeck
//!
//! This module contains the UI rendering code, organized by tab.

mod browse_tab;
mod components;
mod detail_modal;
mod favorites_tab;
mod settings_tab;
pub mod theme;

pub use browse_tab::render_browse_tab;
pub use components::{render_about_dialog, render_tab};
pub use detail_modal::render_detail_modal;
pub use favorites_tab::render_favorites_tab;
pub use settings_tab::render_settings_tab;
