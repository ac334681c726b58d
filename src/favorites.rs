//! User favorites, persisted as a JSON array under the `favorites` key.
//!
//! Persistence is best effort in both directions: a missing, unreadable or
//! corrupt payload loads as an empty list, and a failed write is logged while
//! the in-memory list stays authoritative.

use std::collections::HashSet;

use crate::meal::Meal;
use crate::storage::Storage;

/// Storage key holding the serialized favorites
pub const FAVORITES_KEY: &str = "favorites";

/// Outcome of toggling a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered favorites list, unique by meal id
pub struct Favorites {
    items: Vec<Meal>,
    storage: Box<dyn Storage>,
}

impl Favorites {
    /// Load favorites from storage, falling back to an empty list
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let items = match storage.get(FAVORITES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Meal>>(&payload) {
                Ok(items) => {
                    let items = dedup_by_id(items);
                    tracing::info!("{} meals loaded from favorites", items.len());
                    items
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable favorites payload: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::info!("Favorites are empty - start adding your favorite meals!");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                Vec::new()
            }
        };

        Self { items, storage }
    }

    pub fn items(&self) -> &[Meal] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a meal with this id is a favorite
    pub fn is_favorite(&self, id: &str) -> bool {
        self.items.iter().any(|m| m.id == id)
    }

    /// Remove the meal if present, append it otherwise, then persist
    pub fn toggle(&mut self, meal: &Meal) -> Toggle {
        let outcome = match self.items.iter().position(|m| m.id == meal.id) {
            Some(index) => {
                self.items.remove(index);
                tracing::info!("Removed from favorites: {}", meal.name);
                Toggle::Removed
            }
            None => {
                self.items.push(meal.clone());
                tracing::info!("Added to favorites: {}", meal.name);
                Toggle::Added
            }
        };

        self.save();
        outcome
    }

    fn save(&self) {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Favorites not saved: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(FAVORITES_KEY, &payload) {
            tracing::warn!("Favorites not saved: {}", e);
        }
    }
}

/// Keep the first occurrence of each id
fn dedup_by_id(items: Vec<Meal>) -> Vec<Meal> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::meal;
    use crate::storage::{MemoryStorage, SqliteStorage, StorageError};

    /// Storage whose every call fails
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }
    }

    fn ids(favorites: &Favorites) -> Vec<&str> {
        favorites.items().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_load_missing_is_empty() {
        let favorites = Favorites::load(Box::new(MemoryStorage::new()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let storage = MemoryStorage::new();
        storage.set(FAVORITES_KEY, "{not json").unwrap();
        let favorites = Favorites::load(Box::new(storage));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_storage_failure_is_empty() {
        let favorites = Favorites::load(Box::new(BrokenStorage));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let storage = MemoryStorage::new();
        storage
            .set(
                FAVORITES_KEY,
                r#"[{"idMeal":"1","strMeal":"A"},{"idMeal":"2","strMeal":"B"},{"idMeal":"1","strMeal":"A again"}]"#,
            )
            .unwrap();
        let favorites = Favorites::load(Box::new(storage));
        assert_eq!(ids(&favorites), vec!["1", "2"]);
        assert_eq!(favorites.items()[0].name, "A");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::load(Box::new(MemoryStorage::new()));
        let soup = meal("7", "Soup", Some("Starter"));

        assert_eq!(favorites.toggle(&soup), Toggle::Added);
        assert!(favorites.is_favorite("7"));

        assert_eq!(favorites.toggle(&soup), Toggle::Removed);
        assert!(!favorites.is_favorite("7"));
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let mut favorites = Favorites::load(Box::new(MemoryStorage::new()));
        for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
            favorites.toggle(&meal(id, name, None));
        }

        let b = meal("2", "B", None);
        favorites.toggle(&b);
        assert_eq!(ids(&favorites), vec!["1", "3"]);
        favorites.toggle(&b);
        assert_eq!(ids(&favorites), vec!["1", "3", "2"]);

        // Toggling a fresh id twice leaves the list as it was
        let before = ids(&favorites).join(",");
        let d = meal("4", "D", None);
        favorites.toggle(&d);
        favorites.toggle(&d);
        assert_eq!(ids(&favorites).join(","), before);
    }

    #[test]
    fn test_toggle_persists_each_change() {
        let storage = MemoryStorage::new();
        let mut favorites = Favorites::load(Box::new(storage.clone()));

        favorites.toggle(&meal("1", "A", Some("Beef")));
        let saved: Vec<Meal> =
            serde_json::from_str(&storage.get(FAVORITES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].category.as_deref(), Some("Beef"));

        favorites.toggle(&meal("1", "A", Some("Beef")));
        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let mut favorites = Favorites::load(Box::new(BrokenStorage));
        assert_eq!(favorites.toggle(&meal("1", "A", None)), Toggle::Added);
        assert!(favorites.is_favorite("1"));
    }

    #[test]
    fn test_round_trip_through_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mealdeck.db");

        {
            let mut favorites = Favorites::load(Box::new(SqliteStorage::open_at(&path).unwrap()));
            favorites.toggle(&meal("52771", "Spicy Arrabiata Penne", Some("Vegetarian")));
            favorites.toggle(&meal("52772", "Teriyaki Chicken Casserole", Some("Chicken")));
        }

        let favorites = Favorites::load(Box::new(SqliteStorage::open_at(&path).unwrap()));
        assert_eq!(ids(&favorites), vec!["52771", "52772"]);
    }
}
