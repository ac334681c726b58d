//! Meal records as returned by TheMealDB.
//!
//! The API flattens up to 20 ingredient/measure pairs into numbered fields
//! (`strIngredient1`, `strMeasure1`, ...). Those and any other field we don't
//! model explicitly are kept in `extra`, so a meal written to favorites and
//! read back is the same record the API sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of ingredient slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// A recipe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "strArea", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Ingredient slots and any unmodelled API fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One line of a meal's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

impl Meal {
    /// Read a string field from the unmodelled part of the record.
    /// Nulls and non-string values read as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }

    /// Ingredients in slot order (slot 1 first).
    ///
    /// A slot is included only when its ingredient name is present and not
    /// blank after trimming. A missing measure becomes an empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = self.field(&format!("strIngredient{slot}"))?;
                if ingredient.trim().is_empty() {
                    return None;
                }
                let measure = self.field(&format!("strMeasure{slot}")).unwrap_or_default();
                Some(Ingredient {
                    ingredient: ingredient.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Exact category match
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Case-insensitive substring match on the meal name
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Comma-separated `strTags` split into trimmed, non-empty tags
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Build a bare meal record, for tests across the crate
#[cfg(test)]
pub(crate) fn meal(id: &str, name: &str, category: Option<&str>) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
        area: None,
        instructions: None,
        thumbnail: None,
        tags: None,
        youtube: None,
        source: None,
        extra: BTreeMap::new(),
    }
}
