//! Shared UI components for Mealdeck

use eframe::egui::containers::scroll_area::ScrollSource;
use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

use crate::app::MealdeckApp;
use crate::meal::Meal;
use crate::state::Tab;
use crate::ui::theme::Theme;

/// Width of one meal card in the grid
const CARD_WIDTH: f32 = 220.0;

/// What the user asked for on a card this frame
pub enum CardAction {
    Details(Meal),
    ToggleFavorite(Meal),
}

/// Scroll inputs a page list accepts; none while the detail window holds the lock
pub fn list_scroll_source(locked: bool) -> ScrollSource {
    if locked { ScrollSource::NONE } else { ScrollSource::ALL }
}

/// Render a tab button
pub fn render_tab(app: &mut MealdeckApp, ui: &mut egui::Ui, tab: Tab, label: &str) {
    let theme = &app.ui.current_theme;
    let is_active = app.ui.active_tab == tab;

    let (bg, text_color) = if is_active {
        (theme.bg_medium, theme.accent)
    } else {
        (Color32::TRANSPARENT, theme.text_secondary)
    };

    let button = egui::Button::new(RichText::new(label).color(text_color))
        .fill(bg)
        .corner_radius(CornerRadius {
            nw: 6,
            ne: 6,
            sw: 0,
            se: 0,
        })
        .min_size(Vec2::new(90.0, 32.0));

    if ui.add(button).clicked() {
        app.switch_tab(tab);
    }
}

/// Render meals as a wrapping grid of cards and report the first action taken
pub fn render_meal_grid(
    ui: &mut egui::Ui,
    theme: &Theme,
    meals: &[Meal],
    is_favorite: impl Fn(&str) -> bool,
) -> Option<CardAction> {
    let columns = ((ui.available_width() / (CARD_WIDTH + 12.0)).floor() as usize).max(1);
    let mut action = None;

    egui::Grid::new("meal_grid")
        .num_columns(columns)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, meal) in meals.iter().enumerate() {
                if let Some(a) = render_meal_card(ui, theme, meal, is_favorite(&meal.id)) {
                    action.get_or_insert(a);
                }
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    action
}

fn render_meal_card(ui: &mut egui::Ui, theme: &Theme, meal: &Meal, favorite: bool) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH - 24.0);
            ui.label(RichText::new(&meal.name).color(theme.text_primary).size(15.0).strong());

            let subtitle = match (meal.category.as_deref(), meal.area.as_deref()) {
                (Some(c), Some(a)) => format!("{} · {}", c, a),
                (Some(c), None) => c.to_string(),
                (None, Some(a)) => a.to_string(),
                (None, None) => "Uncategorized".to_string(),
            };
            ui.label(RichText::new(subtitle).color(theme.text_muted).size(11.0));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Details").clicked() {
                    action = Some(CardAction::Details(meal.clone()));
                }

                let (icon, color) = if favorite {
                    ("♥ Saved", theme.favorite)
                } else {
                    ("♡ Save", theme.text_secondary)
                };
                if ui.button(RichText::new(icon).color(color)).clicked() {
                    action = Some(CardAction::ToggleFavorite(meal.clone()));
                }
            });
        });

    action
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut MealdeckApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();

    egui::Window::new("About Mealdeck")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 220.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Mealdeck").size(24.0).strong().color(theme.accent));
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(RichText::new("Recipes from TheMealDB").color(theme.text_secondary));

                ui.add_space(8.0);
                if ui.link("themealdb.com").clicked() {
                    let _ = open::that("https://www.themealdb.com/");
                }

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
