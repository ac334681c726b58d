//! TheMealDB API client.
//!
//! This module provides:
//!
//! - `MealSource`: the seam the browser state fetches through
//! - `MealDbClient`: HTTP client wrapper implementing it
//! - `ApiError`: transport, status, and decode failures
//!
//! Both endpoints used here answer with `{"meals": [...]}`, where `meals` is
//! `null` when nothing matched. That case is `Ok(None)`, not an error.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

use crate::meal::Meal;

/// Default API base URL (free developer key `1`)
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// User agent for API requests
const USER_AGENT: &str = concat!("Mealdeck/", env!("CARGO_PKG_VERSION"));

/// Errors from the recipe API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request task failed: {0}")]
    Task(String),
}

/// Response envelope shared by `search.php` and `lookup.php`
#[derive(Debug, Deserialize)]
struct MealsResponse {
    #[serde(default)]
    meals: Option<Vec<Meal>>,
}

/// Anything that can answer a meal search.
///
/// `Ok(None)` means the API had no `meals` for the term.
pub trait MealSource {
    fn search(&self, term: &str) -> impl Future<Output = Result<Option<Vec<Meal>>, ApiError>> + Send;
}

/// TheMealDB API client
#[derive(Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client against the given base URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{endpoint}` with one query parameter and decode the envelope
    async fn get_meals(&self, endpoint: &str, param: (&str, &str)) -> Result<Option<Vec<Meal>>, ApiError> {
        let start = std::time::Instant::now();
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[param])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        // Decode from text so a bad body surfaces as a serde error, not a transport one
        let body = response.text().await?;
        let parsed: MealsResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            "{}?{}={} returned {} meals in {:.1}s",
            endpoint,
            param.0,
            param.1,
            parsed.meals.as_ref().map(Vec::len).unwrap_or(0),
            start.elapsed().as_secs_f32()
        );
        Ok(parsed.meals)
    }

    /// Look up a single meal by its identifier
    pub async fn lookup(&self, id: &str) -> Result<Option<Meal>, ApiError> {
        let meals = self.get_meals("lookup.php", ("i", id)).await?;
        Ok(meals.and_then(|m| m.into_iter().next()))
    }
}

impl MealSource for MealDbClient {
    async fn search(&self, term: &str) -> Result<Option<Vec<Meal>>, ApiError> {
        self.get_meals("search.php", ("s", term)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_meals() {
        let body = r#"{"meals":[{"idMeal":"1","strMeal":"Apple Frangipan Tart","strCategory":"Dessert"}]}"#;
        let parsed: MealsResponse = serde_json::from_str(body).unwrap();
        let meals = parsed.meals.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Apple Frangipan Tart");
    }

    #[test]
    fn test_envelope_null_and_absent() {
        let parsed: MealsResponse = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(parsed.meals.is_none());

        let parsed: MealsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.meals.is_none());
    }

    #[test]
    fn test_envelope_garbage_is_decode_error() {
        let err: ApiError = serde_json::from_str::<MealsResponse>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = MealDbClient::new("https://example.com/api/").unwrap();
        assert_eq!(client.base_url(), "https://example.com/api");
    }
}
