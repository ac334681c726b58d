//! Settings tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::MealdeckApp;
use crate::ui::theme::ThemePreset;

/// Render the settings tab
pub fn render_settings_tab(app: &mut MealdeckApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            let available_width = ui.available_width();

            ui.label(
                RichText::new("Settings")
                    .color(theme.text_primary)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(16.0);

            // Appearance section
            egui::Frame::new()
                .fill(theme.bg_medium)
                .corner_radius(8.0)
                .inner_margin(16.0)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .show(ui, |ui| {
                    ui.set_width(available_width - 32.0);
                    ui.label(RichText::new("Appearance").color(theme.accent).size(13.0).strong());
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Theme:").color(theme.text_muted));
                        egui::ComboBox::from_id_salt("theme_select")
                            .selected_text(app.config.ui.theme.name())
                            .show_ui(ui, |ui| {
                                for preset in ThemePreset::all() {
                                    if ui
                                        .selectable_label(app.config.ui.theme == *preset, preset.name())
                                        .clicked()
                                    {
                                        app.config.ui.theme = *preset;
                                        app.ui.current_theme = preset.theme();
                                        app.ui.theme_dirty = true;
                                        app.save_config();
                                    }
                                }
                            });
                    });
                });

            ui.add_space(12.0);

            // API section
            egui::Frame::new()
                .fill(theme.bg_medium)
                .corner_radius(8.0)
                .inner_margin(16.0)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .show(ui, |ui| {
                    ui.set_width(available_width - 32.0);
                    ui.label(RichText::new("Recipe API").color(theme.accent).size(13.0).strong());
                    ui.add_space(12.0);

                    egui::Grid::new("api_settings")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Base URL:").color(theme.text_muted));
                            ui.add(
                                egui::TextEdit::singleline(&mut app.config.api.base_url)
                                    .desired_width(360.0),
                            );
                            ui.end_row();

                            ui.label(RichText::new("Browse term:").color(theme.text_muted));
                            ui.add(
                                egui::TextEdit::singleline(&mut app.config.api.browse_term)
                                    .desired_width(80.0),
                            );
                            ui.end_row();
                        });

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("Currently using {}", app.api_base_url()))
                            .color(theme.text_muted)
                            .size(11.0),
                    );
                    ui.label(
                        RichText::new("Changes apply the next time Mealdeck starts.")
                            .color(theme.text_muted)
                            .size(11.0),
                    );
                    if ui.button("Save").clicked() && app.save_config() {
                        app.status_message = "Settings saved".to_string();
                    }
                });
        });
}
