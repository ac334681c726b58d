//! Browse tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::MealdeckApp;
use crate::ui::components::{list_scroll_source, render_meal_grid, CardAction};

/// Render the browse tab content
pub fn render_browse_tab(app: &mut MealdeckApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    // Search and category row
    ui.horizontal(|ui| {
        ui.label(RichText::new("Search:").color(theme.text_muted));
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.meals.browser.search_query)
                .hint_text("Meal name")
                .desired_width(220.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submitted {
            app.search();
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Category:").color(theme.text_muted));

        let selected = app.meals.browser.selected_category().map(str::to_string);
        let categories = app.meals.browser.categories().to_vec();
        let mut picked: Option<String> = None;

        egui::ComboBox::from_id_salt("category_select")
            .selected_text(selected.as_deref().unwrap_or("All categories"))
            .show_ui(ui, |ui| {
                if ui.selectable_label(selected.is_none(), "All categories").clicked() {
                    picked = Some(String::new());
                }
                for category in &categories {
                    if ui
                        .selectable_label(selected.as_deref() == Some(category.as_str()), category)
                        .clicked()
                    {
                        picked = Some(category.clone());
                    }
                }
            });

        if let Some(category) = picked {
            app.select_category(&category);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if app.meals.browser.is_loading() {
                ui.spinner();
            } else if ui.button("Reload").clicked() {
                app.refresh();
            }
        });
    });

    ui.add_space(12.0);

    if let Some(error) = app.meals.browser.error() {
        ui.label(RichText::new(error).color(theme.error));
        ui.add_space(8.0);
    }

    let total = app.meals.browser.meals().len();
    let shown = app.meals.browser.current_displayed_meals().len();
    ui.label(
        RichText::new(format!("Showing {} of {} meals", shown, total))
            .color(theme.text_muted)
            .size(11.0),
    );
    ui.add_space(8.0);

    let mut action = None;
    let mut load_more = false;

    egui::ScrollArea::vertical()
        .id_salt("browse_scroll")
        .scroll_source(list_scroll_source(app.ui.scroll_locked))
        .show(ui, |ui| {
            let browser = &app.meals.browser;
            if total == 0 && !browser.is_loading() && browser.error().is_none() {
                ui.label(RichText::new("No meals match your filters").color(theme.text_secondary));
            }

            action = render_meal_grid(ui, &theme, browser.current_displayed_meals(), |id| {
                browser.is_favorite(id)
            });

            if browser.has_more() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Load more").clicked() {
                        load_more = true;
                    }
                });
            }
        });

    if load_more {
        app.meals.browser.load_more();
    }

    match action {
        Some(CardAction::Details(meal)) => app.show_details(&meal),
        Some(CardAction::ToggleFavorite(meal)) => app.toggle_favorite(&meal),
        None => {}
    }
}
