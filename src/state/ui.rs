//! UI-related application state

use std::time::{Duration, Instant};

use crate::ui::theme::Theme;

/// How long a notification toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Application tabs representing the main navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Browse tab: search, category filter, paginated meal grid
    #[default]
    Browse,
    /// Favorites tab: every saved meal, unpaginated
    Favorites,
    /// Settings tab: theme and API settings
    Settings,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// UI-related state
pub struct UiState {
    /// Current theme
    pub current_theme: Theme,
    /// Currently selected tab
    pub active_tab: Tab,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
    /// Page scrolling is locked while the detail modal is up
    pub scroll_locked: bool,
    /// Notification currently on screen
    pub toast: Option<Toast>,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            active_tab: Tab::default(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            scroll_locked: false,
            toast: None,
        }
    }

    /// Show a notification toast
    pub fn notify(&mut self, message: String, now: Instant) {
        self.toast = Some(Toast {
            message,
            shown_at: now,
        });
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire_toast(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.duration_since(toast.shown_at) >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemePreset;

    #[test]
    fn test_toast_expires() {
        let mut ui = UiState::new(ThemePreset::default().theme());
        let now = Instant::now();
        ui.notify("Saved".into(), now);

        ui.expire_toast(now + Duration::from_secs(1));
        assert!(ui.toast.is_some());

        ui.expire_toast(now + TOAST_DURATION);
        assert!(ui.toast.is_none());
    }
}
