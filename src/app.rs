use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, RichText};

use crate::browser::{BrowserEvent, MealBrowser, Tab as BrowserTab};
use crate::config::Config;
use crate::favorites::Favorites;
use crate::meal::Meal;
use crate::mealdb::MealDbClient;
use crate::state::{MealsState, StateEvent, Tab, UiState};
use crate::storage::{MemoryStorage, SqliteStorage, Storage};
use crate::ui::{
    render_about_dialog, render_browse_tab, render_detail_modal, render_favorites_tab,
    render_settings_tab, render_tab,
};

/// Main application state
pub struct MealdeckApp {
    /// Application configuration
    pub config: Config,
    /// Status message for the status bar
    pub status_message: String,
    /// Recipe API client
    client: MealDbClient,
    /// Meal browsing state
    pub meals: MealsState,
    /// UI-related state
    pub ui: UiState,
}

impl MealdeckApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        // Favorites fall back to a session-only store if the database is unusable
        let storage: Box<dyn Storage> = match SqliteStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::error!("Failed to open storage, favorites won't persist: {}", e);
                Box::new(MemoryStorage::new())
            }
        };
        let favorites = Favorites::load(storage);
        tracing::info!("You have {} meals in your favorites", favorites.len());

        let client = MealDbClient::new(&config.api.base_url)?;
        let browser = MealBrowser::new(favorites, config.api.browse_term.clone());
        let theme = config.ui.theme.theme();

        let mut app = Self {
            config,
            status_message: "Ready".to_string(),
            client,
            meals: MealsState::new(browser),
            ui: UiState::new(theme),
        };

        // Load the catalogue on startup
        app.refresh();

        Ok(app)
    }

    /// Re-fetch the full catalogue
    pub fn refresh(&mut self) {
        let event = self.meals.fetch_all(&self.client);
        self.handle_events(vec![event]);
    }

    /// Search for the current query
    pub fn search(&mut self) {
        let events = self.meals.search(&self.client).into_iter().collect();
        self.handle_events(events);
    }

    /// Select a category ("" clears it)
    pub fn select_category(&mut self, category: &str) {
        let events = self
            .meals
            .filter_by_category(category, &self.client)
            .into_iter()
            .collect();
        self.handle_events(events);
    }

    pub fn toggle_favorite(&mut self, meal: &Meal) {
        let events = self.meals.toggle_favorite(meal).into_iter().collect();
        self.handle_events(events);
    }

    pub fn show_details(&mut self, meal: &Meal) {
        let event = self.meals.show_details(meal);
        self.handle_events(vec![event]);
    }

    pub fn close_details(&mut self) {
        let events = self.meals.close_details(Instant::now()).into_iter().collect();
        self.handle_events(events);
    }

    /// Switch tabs, keeping the browser's list selection in step
    pub fn switch_tab(&mut self, tab: Tab) {
        self.ui.active_tab = tab;
        match tab {
            Tab::Browse => self.meals.browser.tab = BrowserTab::All,
            Tab::Favorites => self.meals.browser.tab = BrowserTab::Favorites,
            Tab::Settings => {}
        }
    }

    /// Base URL of the running API client
    pub fn api_base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Validate and save configuration; a failure is shown in the status bar
    pub fn save_config(&mut self) -> bool {
        let result = self.config.api.validate().and_then(|()| self.config.save());
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save config: {}", e);
                self.status_message = format!("Settings not saved: {}", e);
                false
            }
        }
    }

    /// React to state events
    fn handle_events(&mut self, events: Vec<StateEvent>) {
        let now = Instant::now();
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::Browser(BrowserEvent::Notification(msg)) => {
                    tracing::info!("🔔 {}", msg);
                    self.ui.notify(msg, now);
                }
                StateEvent::Browser(BrowserEvent::ModalOpened | BrowserEvent::ModalClosed) => {
                    self.ui.scroll_locked = self.meals.browser.scroll_locked();
                }
                StateEvent::Browser(BrowserEvent::ModalClosing) => {}
            }
        }
    }
}

impl eframe::App for MealdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Apply theme if changed
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks and timers
        let events = self.meals.poll(ctx, now);
        self.handle_events(events);
        self.ui.expire_toast(now);
        if self.ui.toast.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // Escape closes the detail window
        if self.meals.browser.selected_meal().is_some()
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.close_details();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reload meals").clicked() {
                        self.refresh();
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                    }
                });
            });
        });

        // Status bar at bottom
        let theme = self.ui.current_theme.clone();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.meals.in_flight() > 0 {
                    ui.spinner();
                }
                ui.label(RichText::new(&self.status_message).color(theme.text_muted));
                if let Some(toast) = &self.ui.toast {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&toast.message).color(theme.accent));
                    });
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_tab(self, ui, Tab::Browse, "Browse");
                let favorites = format!("Favorites ({})", self.meals.browser.favorites().len());
                render_tab(self, ui, Tab::Favorites, &favorites);
                render_tab(self, ui, Tab::Settings, "Settings");
            });
            ui.separator();

            match self.ui.active_tab {
                Tab::Browse => render_browse_tab(self, ui),
                Tab::Favorites => render_favorites_tab(self, ui),
                Tab::Settings => render_settings_tab(self, ui),
            }
        });

        render_detail_modal(self, ctx);
        render_about_dialog(self, ctx);
    }
}
