//! Meal browsing state for the desktop app
//!
//! Wraps `MealBrowser` with the tokio tasks that run its remote requests.
//! Each request becomes its own task; finished tasks are applied during
//! `poll`, in spawn order, so overlapping searches resolve last-applied-wins.

use std::time::Instant;

use eframe::egui;
use tokio::task::JoinHandle;

use crate::browser::{FetchOutcome, MealBrowser, RequestKind, SearchRequest};
use crate::meal::Meal;
use crate::mealdb::{ApiError, MealDbClient, MealSource};
use crate::state::StateEvent;
use crate::task::drain_finished;

/// Meal browsing state
pub struct MealsState {
    /// Browser view state
    pub browser: MealBrowser,
    /// In-flight requests, tagged with the operation they belong to
    tasks: Vec<(RequestKind, JoinHandle<FetchOutcome>)>,
}

impl MealsState {
    pub fn new(browser: MealBrowser) -> Self {
        Self {
            browser,
            tasks: Vec::new(),
        }
    }

    /// Number of requests still running
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    fn spawn(&mut self, request: SearchRequest, client: &MealDbClient) {
        let client = client.clone();
        let kind = request.kind;
        self.tasks.push((
            kind,
            tokio::spawn(async move { client.search(&request.term).await }),
        ));
    }

    /// Start the browse-all fetch
    pub fn fetch_all(&mut self, client: &MealDbClient) -> StateEvent {
        let request = self.browser.begin_fetch_all();
        self.spawn(request, client);
        StateEvent::StatusMessage("Loading meals...".to_string())
    }

    /// Search for the browser's current query
    pub fn search(&mut self, client: &MealDbClient) -> Option<StateEvent> {
        let request = self.browser.begin_search()?;
        let message = format!("Searching for \"{}\"...", request.term);
        self.spawn(request, client);
        Some(StateEvent::StatusMessage(message))
    }

    /// Select a category ("" clears it)
    pub fn filter_by_category(&mut self, category: &str, client: &MealDbClient) -> Option<StateEvent> {
        match self.browser.begin_filter_by_category(category) {
            Some(request) => {
                self.spawn(request, client);
                None
            }
            None => Some(StateEvent::StatusMessage(format!(
                "{} meals",
                self.browser.meals().len()
            ))),
        }
    }

    /// Toggle a favorite, surfacing the notification if one was produced
    pub fn toggle_favorite(&mut self, meal: &Meal) -> Option<StateEvent> {
        self.browser.toggle_favorite(meal).map(StateEvent::Browser)
    }

    /// Open the detail modal
    pub fn show_details(&mut self, meal: &Meal) -> StateEvent {
        StateEvent::Browser(self.browser.show_meal_details(meal))
    }

    /// Start closing the detail modal
    pub fn close_details(&mut self, now: Instant) -> Option<StateEvent> {
        self.browser.close_modal(now).map(StateEvent::Browser)
    }

    /// Apply finished requests and advance timed state
    pub fn poll(&mut self, ctx: &egui::Context, now: Instant) -> Vec<StateEvent> {
        let mut events = Vec::new();

        for (kind, result) in drain_finished(&mut self.tasks) {
            let outcome = result.unwrap_or_else(|e| {
                tracing::error!("Request task panicked: {}", e);
                Err(ApiError::Task(e.to_string()))
            });

            match kind {
                RequestKind::FetchAll => {
                    self.browser.apply_fetch_all(outcome);
                    let message = match self.browser.error() {
                        Some(error) => error.to_string(),
                        None => format!("Loaded {} meals", self.browser.all_meals().len()),
                    };
                    events.push(StateEvent::StatusMessage(message));
                }
                RequestKind::Search => {
                    self.browser.apply_search(outcome);
                    events.push(StateEvent::StatusMessage(format!(
                        "{} meals found",
                        self.browser.meals().len()
                    )));
                }
            }
        }

        if let Some(event) = self.browser.tick(now) {
            events.push(StateEvent::Browser(event));
        }

        if !self.tasks.is_empty() {
            ctx.request_repaint();
        } else if let Some(remaining) = self.browser.modal_close_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        events
    }
}
