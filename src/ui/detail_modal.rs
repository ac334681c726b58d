//! Meal detail window

use eframe::egui::{self, RichText};

use crate::app::MealdeckApp;
use crate::browser::ModalPhase;

/// Render the detail window for the selected meal, if any
pub fn render_detail_modal(app: &mut MealdeckApp, ctx: &egui::Context) {
    let Some(meal) = app.meals.browser.selected_meal().cloned() else {
        return;
    };
    let theme = app.ui.current_theme.clone();
    let closing = matches!(app.meals.browser.modal_phase(), ModalPhase::Closing { .. });
    let favorite = app.meals.browser.is_favorite(&meal.id);

    let mut open = true;
    let mut close_clicked = false;
    let mut toggle_clicked = false;

    // Fade while the close transition runs
    let opacity = if closing { 0.4 } else { 1.0 };

    egui::Window::new(RichText::new(&meal.name).strong())
        .id(egui::Id::new("meal_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([520.0, 560.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_opacity(opacity);

            ui.horizontal(|ui| {
                if let Some(category) = &meal.category {
                    ui.label(RichText::new(category).color(theme.accent));
                }
                if let Some(area) = &meal.area {
                    ui.label(RichText::new(area).color(theme.text_muted));
                }
                for tag in meal.tag_list() {
                    ui.label(RichText::new(format!("#{}", tag)).color(theme.text_muted).size(11.0));
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let label = if favorite { "♥ Remove from favorites" } else { "♡ Add to favorites" };
                if ui.button(label).clicked() {
                    toggle_clicked = true;
                }
                if let Some(url) = meal.youtube.as_deref().filter(|u| !u.is_empty()) {
                    if ui.button("Watch video").clicked() {
                        let _ = open::that(url);
                    }
                }
                if let Some(url) = meal.source.as_deref().filter(|u| !u.is_empty()) {
                    if ui.button("Original recipe").clicked() {
                        let _ = open::that(url);
                    }
                }
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("detail_scroll")
                .max_height(440.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Ingredients").color(theme.accent).strong());
                    ui.add_space(4.0);
                    egui::Grid::new("ingredients_grid")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for item in meal.ingredients() {
                                ui.label(RichText::new(&item.ingredient).color(theme.text_primary));
                                ui.label(RichText::new(&item.measure).color(theme.text_secondary));
                                ui.end_row();
                            }
                        });

                    if let Some(instructions) = meal.instructions.as_deref() {
                        ui.add_space(12.0);
                        ui.label(RichText::new("Instructions").color(theme.accent).strong());
                        ui.add_space(4.0);
                        ui.label(RichText::new(instructions).color(theme.text_secondary));
                    }
                });

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if toggle_clicked {
        app.toggle_favorite(&meal);
    }
    if (!open || close_clicked) && !closing {
        app.close_details();
    }
}
