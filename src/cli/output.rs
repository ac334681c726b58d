//! Output formatting utilities for CLI

use serde::Serialize;

use crate::meal::Meal;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as JSON or use custom text formatter
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text_formatter(value)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Format a status line with a check mark or blank
pub fn status_line(ok: bool, message: &str) -> String {
    if ok {
        format!("[OK] {}", message)
    } else {
        format!("[  ] {}", message)
    }
}

/// Compact, serializable view of a meal for listings
#[derive(Debug, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub favorite: bool,
}

impl MealSummary {
    pub fn new(meal: &Meal, favorite: bool) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            category: meal.category.clone(),
            area: meal.area.clone(),
            favorite,
        }
    }
}

/// One text line per meal: id, marker, name, category
pub fn format_meal_lines(meals: &[MealSummary]) -> Vec<String> {
    let id_width = meals.iter().map(|m| m.id.len()).max().unwrap_or(0);
    meals
        .iter()
        .map(|m| {
            let marker = if m.favorite { "♥" } else { " " };
            match &m.category {
                Some(category) if !category.is_empty() => {
                    format!("{:>width$} {} {} [{}]", m.id, marker, m.name, category, width = id_width)
                }
                _ => format!("{:>width$} {} {}", m.id, marker, m.name, width = id_width),
            }
        })
        .collect()
}
