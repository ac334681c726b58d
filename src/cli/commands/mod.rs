//! CLI subcommand implementations

pub mod config;
pub mod diag;
pub mod favorites;
pub mod meals;

use anyhow::Result;

use crate::browser::MealBrowser;
use crate::config::Config;
use crate::favorites::Favorites;
use crate::mealdb::MealDbClient;
use crate::storage::SqliteStorage;

/// Everything a browsing command needs
pub(crate) struct Session {
    pub client: MealDbClient,
    pub browser: MealBrowser,
}

impl Session {
    /// Load config, open storage, and build the browser state
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let client = MealDbClient::new(&config.api.base_url)?;
        let favorites = Favorites::load(Box::new(SqliteStorage::open()?));
        let browser = MealBrowser::new(favorites, config.api.browse_term);
        Ok(Self { client, browser })
    }
}
