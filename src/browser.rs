//! Meal browser view state.
//!
//! `MealBrowser` owns everything a front end renders: the fetched catalogue,
//! the filtered view, categories, favorites, pagination, the active tab and
//! the detail modal. Derived lists are computed on demand from that state.
//!
//! Network operations come in two halves. A `begin_*` call updates the state
//! and hands back the `SearchRequest` to run (or `None` when the answer is
//! local); the matching `apply_*` call consumes the outcome. The desktop app
//! runs requests on tokio tasks between the two halves, while the CLI uses the
//! async wrappers (`fetch_all`, `search_meals`, `filter_by_category`) that do
//! all three steps inline. Overlapping searches are not coordinated; whichever
//! outcome is applied last wins.
//!
//! Presentation side effects are never performed here. Operations that imply
//! one return a `BrowserEvent` for the front end to act on.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::favorites::{Favorites, Toggle};
use crate::meal::Meal;
use crate::mealdb::{ApiError, MealSource};

/// Meals revealed initially and per "load more"
pub const PAGE_SIZE: usize = 6;

/// Delay between asking the modal to close and clearing the selection
pub const MODAL_TRANSITION: Duration = Duration::from_millis(300);

/// Error shown when the initial fetch returns nothing
pub const NO_MEALS_FOUND: &str = "No meals found";

/// Error shown when the initial fetch fails
pub const CONNECTIVITY_ERROR: &str =
    "An error occurred while loading data. Please ensure your internet connection.";

/// Result of one remote search
pub type FetchOutcome = Result<Option<Vec<Meal>>, ApiError>;

/// Top-level list being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Favorites,
}

/// Detail modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    /// Close requested; selection is cleared once the transition elapses
    Closing { since: Instant },
}

/// Presentation intents emitted by state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Short user-facing message
    Notification(String),
    /// Modal shown; page scrolling should lock
    ModalOpened,
    /// Modal is animating out
    ModalClosing,
    /// Modal gone; page scrolling should unlock
    ModalClosed,
}

/// Which operation a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    FetchAll,
    Search,
}

/// A remote search the caller must run and feed back through `apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub kind: RequestKind,
    pub term: String,
}

/// The browser state
pub struct MealBrowser {
    all_meals: Vec<Meal>,
    meals: Vec<Meal>,
    categories: Vec<String>,
    favorites: Favorites,
    /// Active tab
    pub tab: Tab,
    /// Free-text search box contents
    pub search_query: String,
    selected_category: Option<String>,
    meals_to_show: usize,
    selected_meal: Option<Meal>,
    modal: ModalPhase,
    loading: bool,
    error: Option<String>,
    browse_term: String,
}

impl MealBrowser {
    /// Create an empty browser. `browse_term` is the search term used to
    /// stand in for "all meals".
    pub fn new(favorites: Favorites, browse_term: impl Into<String>) -> Self {
        Self {
            all_meals: Vec::new(),
            meals: Vec::new(),
            categories: Vec::new(),
            favorites,
            tab: Tab::default(),
            search_query: String::new(),
            selected_category: None,
            meals_to_show: PAGE_SIZE,
            selected_meal: None,
            modal: ModalPhase::Closed,
            loading: false,
            error: None,
            browse_term: browse_term.into(),
        }
    }

    pub fn all_meals(&self) -> &[Meal] {
        &self.all_meals
    }

    /// Current filtered/search view
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn meals_to_show(&self) -> usize {
        self.meals_to_show
    }

    pub fn selected_meal(&self) -> Option<&Meal> {
        self.selected_meal.as_ref()
    }

    pub fn modal_phase(&self) -> ModalPhase {
        self.modal
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Trimmed search query, or `None` when blank
    fn active_query(&self) -> Option<&str> {
        let query = self.search_query.trim();
        (!query.is_empty()).then_some(query)
    }

    // --- Remote fetch ---

    /// Start the browse-all fetch
    pub fn begin_fetch_all(&mut self) -> SearchRequest {
        self.loading = true;
        self.error = None;
        SearchRequest {
            kind: RequestKind::FetchAll,
            term: self.browse_term.clone(),
        }
    }

    /// Apply the browse-all outcome. Loading is cleared on every path.
    pub fn apply_fetch_all(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(Some(meals)) if !meals.is_empty() => {
                tracing::info!("Fetched {} meals", meals.len());
                self.all_meals = meals.clone();
                self.meals = meals;
                self.extract_categories();
            }
            Ok(_) => {
                tracing::warn!("Browse fetch returned no meals");
                self.error = Some(NO_MEALS_FOUND.to_string());
            }
            Err(e) => {
                tracing::error!("Data fetch error: {}", e);
                self.error = Some(CONNECTIVITY_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Fetch the full catalogue through `source`
    pub async fn fetch_all<S: MealSource>(&mut self, source: &S) {
        let request = self.begin_fetch_all();
        let outcome = source.search(&request.term).await;
        self.apply_fetch_all(outcome);
    }

    /// Start a search for the current query.
    ///
    /// A blank query is answered locally: the view goes back to the full
    /// catalogue (narrowed by the active category) and `None` is returned.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let Some(term) = self.active_query().map(str::to_string) else {
            self.meals = self.all_meals.clone();
            if self.selected_category.is_some() {
                self.apply_local_filters();
            }
            self.meals_to_show = PAGE_SIZE;
            return None;
        };

        self.loading = true;
        Some(SearchRequest {
            kind: RequestKind::Search,
            term,
        })
    }

    /// Apply a search outcome.
    ///
    /// Failures are logged and shown as an empty list; the error message is
    /// left alone.
    pub fn apply_search(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(Some(meals)) => {
                self.meals = match self.selected_category.as_deref() {
                    Some(category) => meals.into_iter().filter(|m| m.in_category(category)).collect(),
                    None => meals,
                };
            }
            Ok(None) => self.meals = Vec::new(),
            Err(e) => {
                tracing::error!("Search error: {}", e);
                self.meals = Vec::new();
            }
        }
        self.meals_to_show = PAGE_SIZE;
        self.loading = false;
    }

    /// Search for the current query through `source`
    pub async fn search_meals<S: MealSource>(&mut self, source: &S) {
        if let Some(request) = self.begin_search() {
            let outcome = source.search(&request.term).await;
            self.apply_search(outcome);
        }
    }

    // --- Categories & filtering ---

    /// Rebuild the sorted, de-duplicated category list from the catalogue
    pub fn extract_categories(&mut self) {
        let unique: BTreeSet<&str> = self
            .all_meals
            .iter()
            .filter_map(|m| m.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect();
        self.categories = unique.into_iter().map(str::to_string).collect();
        tracing::info!("Available categories: {:?}", self.categories);
    }

    /// Select a category (empty string clears it) and refilter.
    ///
    /// Clearing the category while a query is active re-runs the search, so
    /// a request may come back.
    pub fn begin_filter_by_category(&mut self, category: &str) -> Option<SearchRequest> {
        self.selected_category = (!category.is_empty()).then(|| category.to_string());

        if self.selected_category.is_none() {
            self.meals = self.all_meals.clone();
            let request = if self.active_query().is_some() {
                self.begin_search()
            } else {
                None
            };
            self.meals_to_show = PAGE_SIZE;
            return request;
        }

        self.apply_local_filters();
        self.meals_to_show = PAGE_SIZE;
        tracing::info!("Filtered: {} meals in category {}", self.meals.len(), category);
        None
    }

    /// Select a category through `source`, re-running the search if needed
    pub async fn filter_by_category<S: MealSource>(&mut self, category: &str, source: &S) {
        if let Some(request) = self.begin_filter_by_category(category) {
            let outcome = source.search(&request.term).await;
            self.apply_search(outcome);
        }
    }

    /// Category AND name filter over the full catalogue
    fn apply_local_filters(&mut self) {
        let category = self.selected_category.as_deref();
        let query = self.active_query();
        let filtered: Vec<Meal> = self
            .all_meals
            .iter()
            .filter(|m| category.is_none_or(|c| m.in_category(c)))
            .filter(|m| query.is_none_or(|q| m.name_matches(q)))
            .cloned()
            .collect();
        self.meals = filtered;
    }

    // --- Pagination ---

    /// Reveal another page
    pub fn load_more(&mut self) {
        self.meals_to_show += PAGE_SIZE;
        tracing::debug!("Show {} of {} meals", self.meals_to_show, self.meals.len());
    }

    /// Whether the current view has unrevealed meals
    pub fn has_more(&self) -> bool {
        self.tab == Tab::All && self.meals.len() > self.meals_to_show
    }

    // --- Derived views ---

    /// Everything in the active tab
    pub fn current_meals(&self) -> &[Meal] {
        match self.tab {
            Tab::Favorites => self.favorites.items(),
            Tab::All => &self.meals,
        }
    }

    /// What the active tab actually displays (favorites are not paginated)
    pub fn current_displayed_meals(&self) -> &[Meal] {
        match self.tab {
            Tab::Favorites => self.favorites.items(),
            Tab::All => &self.meals[..self.meals_to_show.min(self.meals.len())],
        }
    }

    // --- Favorites ---

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Toggle a favorite; adding produces a notification
    pub fn toggle_favorite(&mut self, meal: &Meal) -> Option<BrowserEvent> {
        match self.favorites.toggle(meal) {
            Toggle::Added => Some(BrowserEvent::Notification(format!(
                "\"{}\" has been added to favorites",
                meal.name
            ))),
            Toggle::Removed => None,
        }
    }

    // --- Detail view ---

    /// Select a meal and open the modal
    pub fn show_meal_details(&mut self, meal: &Meal) -> BrowserEvent {
        tracing::debug!("Show details: {}", meal.name);
        self.selected_meal = Some(meal.clone());
        self.modal = ModalPhase::Open;
        BrowserEvent::ModalOpened
    }

    /// Begin closing the modal. The selection stays until `tick` sees the
    /// transition elapse.
    pub fn close_modal(&mut self, now: Instant) -> Option<BrowserEvent> {
        match self.modal {
            ModalPhase::Open => {
                self.modal = ModalPhase::Closing { since: now };
                Some(BrowserEvent::ModalClosing)
            }
            ModalPhase::Closing { .. } | ModalPhase::Closed => None,
        }
    }

    /// Advance timed state; finishes a pending modal close
    pub fn tick(&mut self, now: Instant) -> Option<BrowserEvent> {
        let ModalPhase::Closing { since } = self.modal else {
            return None;
        };
        if now.duration_since(since) < MODAL_TRANSITION {
            return None;
        }
        self.modal = ModalPhase::Closed;
        self.selected_meal = None;
        Some(BrowserEvent::ModalClosed)
    }

    /// Time left before a pending close completes
    pub fn modal_close_remaining(&self, now: Instant) -> Option<Duration> {
        match self.modal {
            ModalPhase::Closing { since } => Some(MODAL_TRANSITION.saturating_sub(now.duration_since(since))),
            _ => None,
        }
    }

    /// Page scrolling is locked while the modal is up or closing
    pub fn scroll_locked(&self) -> bool {
        self.modal != ModalPhase::Closed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;
    use crate::meal::meal;
    use crate::storage::MemoryStorage;

    const BROWSE: &str = "a";

    /// Canned source: the browse term returns the catalogue, any other term
    /// returns catalogue entries whose name contains it.
    struct FakeSource {
        catalogue: Vec<Meal>,
        failing: HashSet<String>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(catalogue: Vec<Meal>) -> Self {
            Self {
                catalogue,
                failing: HashSet::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, term: &str) -> Self {
            self.failing.insert(term.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl MealSource for FakeSource {
        async fn search(&self, term: &str) -> FetchOutcome {
            self.requests.lock().unwrap().push(term.to_string());
            if self.failing.contains(term) {
                return Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            let found: Vec<Meal> = if term == BROWSE {
                self.catalogue.clone()
            } else {
                self.catalogue.iter().filter(|m| m.name_matches(term)).cloned().collect()
            };
            Ok((!found.is_empty()).then_some(found))
        }
    }

    fn catalogue() -> Vec<Meal> {
        vec![
            meal("1", "Beef Wellington", Some("Beef")),
            meal("2", "Apple Frangipan Tart", Some("Dessert")),
            meal("3", "Beef Stroganoff", Some("Beef")),
            meal("4", "Chicken Handi", Some("Chicken")),
            meal("5", "Apam Balik", Some("Dessert")),
            meal("6", "Beef Banh Mi Bowls", Some("Beef")),
            meal("7", "Kentucky Fried Chicken", Some("Chicken")),
            meal("8", "Mystery Stew", None),
            meal("9", "Unsorted Beef Pie", Some("")),
        ]
    }

    fn browser() -> MealBrowser {
        MealBrowser::new(Favorites::load(Box::new(MemoryStorage::new())), BROWSE)
    }

    async fn loaded() -> (MealBrowser, FakeSource) {
        let source = FakeSource::new(catalogue());
        let mut browser = browser();
        browser.fetch_all(&source).await;
        (browser, source)
    }

    fn ids(meals: &[Meal]) -> Vec<&str> {
        meals.iter().map(|m| m.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_all_success() {
        let (browser, source) = loaded().await;
        assert_eq!(source.requests(), vec![BROWSE]);
        assert_eq!(browser.all_meals().len(), 9);
        assert_eq!(browser.meals().len(), 9);
        assert!(!browser.is_loading());
        assert_eq!(browser.error(), None);
        assert_eq!(browser.categories(), ["Beef", "Chicken", "Dessert"]);
    }

    #[test]
    fn test_begin_fetch_all_sets_loading_and_clears_error() {
        let mut browser = browser();
        browser.apply_fetch_all(Ok(None));
        assert!(browser.error().is_some());

        let request = browser.begin_fetch_all();
        assert_eq!(request, SearchRequest { kind: RequestKind::FetchAll, term: BROWSE.into() });
        assert!(browser.is_loading());
        assert_eq!(browser.error(), None);
    }

    #[test]
    fn test_fetch_all_empty_is_no_meals_found() {
        for outcome in [Ok(None), Ok(Some(Vec::new()))] {
            let mut browser = browser();
            browser.begin_fetch_all();
            browser.apply_fetch_all(outcome);
            assert_eq!(browser.error(), Some(NO_MEALS_FOUND));
            assert!(!browser.is_loading());
            assert!(browser.all_meals().is_empty());
        }
    }

    #[tokio::test]
    async fn test_fetch_all_failure_is_connectivity_error() {
        let source = FakeSource::new(catalogue()).failing_on(BROWSE);
        let mut browser = browser();
        browser.fetch_all(&source).await;
        assert_eq!(browser.error(), Some(CONNECTIVITY_ERROR));
        assert!(!browser.is_loading());
        assert!(browser.meals().is_empty());
    }

    #[tokio::test]
    async fn test_category_filter_matches_exactly() {
        let (mut browser, _) = loaded().await;
        for category in ["Beef", "Chicken", "Dessert", "Seafood"] {
            assert_eq!(browser.begin_filter_by_category(category), None);
            assert!(browser.meals().iter().all(|m| m.in_category(category)));
            assert_eq!(browser.selected_category(), Some(category));
        }
        browser.begin_filter_by_category("Beef");
        assert_eq!(ids(browser.meals()), vec!["1", "3", "6"]);
    }

    #[tokio::test]
    async fn test_category_filter_with_query_is_local() {
        let (mut browser, source) = loaded().await;
        browser.search_query = "  BEEF ".into();
        browser.filter_by_category("Beef", &source).await;
        assert_eq!(ids(browser.meals()), vec!["1", "3", "6"]);
        assert_eq!(source.requests(), vec![BROWSE]);

        browser.search_query = "stro".into();
        browser.filter_by_category("Beef", &source).await;
        assert_eq!(ids(browser.meals()), vec!["3"]);
    }

    #[tokio::test]
    async fn test_clearing_category_restores_all() {
        let (mut browser, _) = loaded().await;
        browser.begin_filter_by_category("Dessert");
        assert_eq!(browser.begin_filter_by_category(""), None);
        assert_eq!(browser.selected_category(), None);
        assert_eq!(browser.meals(), browser.all_meals());
    }

    #[tokio::test]
    async fn test_clearing_category_reruns_active_search() {
        let (mut browser, source) = loaded().await;
        browser.search_query = "chicken".into();
        browser.filter_by_category("Chicken", &source).await;
        browser.filter_by_category("", &source).await;

        assert_eq!(source.requests(), vec![BROWSE, "chicken"]);
        assert_eq!(ids(browser.meals()), vec!["4", "7"]);
        assert!(!browser.is_loading());
    }

    #[tokio::test]
    async fn test_blank_search_restores_without_request() {
        let (mut browser, source) = loaded().await;
        browser.search_query = "apple".into();
        browser.search_meals(&source).await;
        assert_eq!(ids(browser.meals()), vec!["2"]);

        browser.load_more();
        browser.load_more();
        browser.search_query = "   ".into();
        browser.search_meals(&source).await;
        assert_eq!(browser.meals().len(), 9);
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);
        assert_eq!(source.requests(), vec![BROWSE, "apple"]);
    }

    #[tokio::test]
    async fn test_blank_search_keeps_category() {
        let (mut browser, _) = loaded().await;
        browser.begin_filter_by_category("Dessert");
        browser.search_query.clear();
        assert_eq!(browser.begin_search(), None);
        assert_eq!(ids(browser.meals()), vec!["2", "5"]);
    }

    #[tokio::test]
    async fn test_search_narrows_by_category() {
        let (mut browser, _) = loaded().await;
        browser.begin_filter_by_category("Beef");
        browser.search_query = "e".into();

        let request = browser.begin_search().unwrap();
        assert_eq!(request.kind, RequestKind::Search);
        assert!(browser.is_loading());

        browser.apply_search(Ok(Some(catalogue())));
        assert_eq!(ids(browser.meals()), vec!["1", "3", "6"]);
        assert!(!browser.is_loading());
    }

    #[tokio::test]
    async fn test_search_paths_agree() {
        let (mut remote, source) = loaded().await;
        remote.begin_filter_by_category("Chicken");
        remote.search_query = "fried".into();
        remote.search_meals(&source).await;

        let (mut local, _) = loaded().await;
        local.search_query = "fried".into();
        local.begin_filter_by_category("Chicken");

        assert_eq!(ids(remote.meals()), ids(local.meals()));
        assert_eq!(ids(local.meals()), vec!["7"]);
    }

    #[tokio::test]
    async fn test_search_absent_is_empty_not_error() {
        let (mut browser, source) = loaded().await;
        browser.search_query = "zzz".into();
        browser.search_meals(&source).await;
        assert!(browser.meals().is_empty());
        assert_eq!(browser.error(), None);
    }

    #[tokio::test]
    async fn test_search_failure_is_swallowed() {
        let source = FakeSource::new(catalogue()).failing_on(BROWSE).failing_on("beef");
        let mut browser = browser();
        browser.fetch_all(&source).await;
        assert_eq!(browser.error(), Some(CONNECTIVITY_ERROR));

        browser.search_query = "beef".into();
        browser.load_more();
        browser.search_meals(&source).await;
        assert!(browser.meals().is_empty());
        assert_eq!(browser.error(), Some(CONNECTIVITY_ERROR));
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);
        assert!(!browser.is_loading());

        let mut fresh = self::browser();
        fresh.search_query = "beef".into();
        fresh.search_meals(&source).await;
        assert_eq!(fresh.error(), None);
    }

    #[tokio::test]
    async fn test_pagination_resets_on_every_filter_change() {
        let (mut browser, source) = loaded().await;
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);

        browser.load_more();
        browser.load_more();
        assert_eq!(browser.meals_to_show(), 18);

        browser.begin_filter_by_category("Beef");
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);

        browser.load_more();
        browser.search_query = "beef".into();
        browser.search_meals(&source).await;
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);

        browser.load_more();
        browser.begin_filter_by_category("");
        assert_eq!(browser.meals_to_show(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_displayed_meals_are_a_page() {
        let (mut browser, _) = loaded().await;
        assert_eq!(browser.current_displayed_meals().len(), 6);
        assert!(browser.has_more());

        browser.load_more();
        assert_eq!(browser.current_displayed_meals().len(), 9);
        assert!(!browser.has_more());

        browser.load_more();
        assert_eq!(browser.meals_to_show(), 18);
        assert_eq!(browser.current_displayed_meals().len(), 9);
    }

    #[tokio::test]
    async fn test_favorites_tab_is_unpaginated() {
        let (mut browser, _) = loaded().await;
        let all: Vec<Meal> = browser.all_meals().to_vec();
        for m in &all {
            browser.toggle_favorite(m);
        }

        browser.tab = Tab::Favorites;
        assert_eq!(browser.current_meals().len(), 9);
        assert_eq!(browser.current_displayed_meals().len(), 9);
        assert!(!browser.has_more());

        browser.tab = Tab::All;
        assert_eq!(browser.current_displayed_meals().len(), 6);
    }

    #[test]
    fn test_toggle_favorite_notifies_on_add_only() {
        let mut browser = browser();
        let tart = meal("2", "Apple Frangipan Tart", Some("Dessert"));

        assert_eq!(
            browser.toggle_favorite(&tart),
            Some(BrowserEvent::Notification(
                "\"Apple Frangipan Tart\" has been added to favorites".into()
            ))
        );
        assert!(browser.is_favorite("2"));

        assert_eq!(browser.toggle_favorite(&tart), None);
        assert!(!browser.is_favorite("2"));
    }

    #[test]
    fn test_modal_closes_after_transition() {
        let mut browser = browser();
        let stew = meal("8", "Mystery Stew", None);
        let start = Instant::now();

        assert_eq!(browser.show_meal_details(&stew), BrowserEvent::ModalOpened);
        assert_eq!(browser.modal_phase(), ModalPhase::Open);
        assert!(browser.scroll_locked());
        assert_eq!(browser.tick(start + Duration::from_secs(5)), None);

        assert_eq!(browser.close_modal(start), Some(BrowserEvent::ModalClosing));
        assert_eq!(browser.close_modal(start), None);
        assert_eq!(browser.tick(start + Duration::from_millis(100)), None);
        assert_eq!(browser.selected_meal().map(|m| m.id.as_str()), Some("8"));
        assert_eq!(
            browser.modal_close_remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );

        assert_eq!(
            browser.tick(start + MODAL_TRANSITION),
            Some(BrowserEvent::ModalClosed)
        );
        assert_eq!(browser.selected_meal(), None);
        assert_eq!(browser.modal_phase(), ModalPhase::Closed);
        assert!(!browser.scroll_locked());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut browser = browser();
        assert_eq!(browser.close_modal(Instant::now()), None);
        assert_eq!(browser.modal_phase(), ModalPhase::Closed);
    }
}
