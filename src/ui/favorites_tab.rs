//! Favorites tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::MealdeckApp;
use crate::ui::components::{list_scroll_source, render_meal_grid, CardAction};

/// Render the favorites tab
pub fn render_favorites_tab(app: &mut MealdeckApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let mut action = None;

    let count = app.meals.browser.current_meals().len();
    ui.label(
        RichText::new(format!("{} saved meals", count))
            .color(theme.text_muted)
            .size(11.0),
    );
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .id_salt("favorites_scroll")
        .scroll_source(list_scroll_source(app.ui.scroll_locked))
        .show(ui, |ui| {
            let browser = &app.meals.browser;
            if count == 0 {
                ui.label(
                    RichText::new("No favorites yet - save meals from the Browse tab")
                        .color(theme.text_secondary),
                );
                return;
            }

            action = render_meal_grid(ui, &theme, browser.current_displayed_meals(), |id| {
                browser.is_favorite(id)
            });
        });

    match action {
        Some(CardAction::Details(meal)) => app.show_details(&meal),
        Some(CardAction::ToggleFavorite(meal)) => app.toggle_favorite(&meal),
        None => {}
    }
}
