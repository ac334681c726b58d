//! Favorites management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use super::Session;
use crate::browser::BrowserEvent;
use crate::cli::output::{format_meal_lines, print_formatted, print_success, MealSummary, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List favorite meals
    List,

    /// Add a meal to favorites, or remove it if already there
    Toggle {
        /// Meal ID
        id: String,
    },

    /// Check whether a meal is a favorite
    Check {
        /// Meal ID
        id: String,
    },
}

#[derive(Serialize)]
struct ToggleResult {
    id: String,
    name: String,
    favorite: bool,
}

#[derive(Serialize)]
struct CheckResult {
    id: String,
    favorite: bool,
}

pub async fn run(command: FavoritesCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        FavoritesCommands::List => list(format).await,
        FavoritesCommands::Toggle { id } => toggle(&id, format, quiet).await,
        FavoritesCommands::Check { id } => check(&id, format).await,
    }
}

async fn list(format: OutputFormat) -> Result<()> {
    let session = Session::open()?;
    let meals: Vec<MealSummary> = session
        .browser
        .favorites()
        .items()
        .iter()
        .map(|m| MealSummary::new(m, true))
        .collect();

    print_formatted(&meals, format, |m| {
        if m.is_empty() {
            "No favorites yet".to_string()
        } else {
            format_meal_lines(m).join("\n")
        }
    });

    Ok(())
}

async fn toggle(id: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut session = Session::open()?;

    // Removing needs no network; the stored record is enough
    let stored = session
        .browser
        .favorites()
        .items()
        .iter()
        .find(|m| m.id == id)
        .cloned();
    let meal = match stored {
        Some(meal) => meal,
        None => session
            .client
            .lookup(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Meal not found: {}", id))?,
    };

    let notification = session.browser.toggle_favorite(&meal);
    let result = ToggleResult {
        id: meal.id.clone(),
        name: meal.name.clone(),
        favorite: session.browser.is_favorite(&meal.id),
    };

    match format {
        OutputFormat::Json => print_formatted(&result, format, |_| String::new()),
        OutputFormat::Text => match notification {
            Some(BrowserEvent::Notification(message)) => print_success(&message, quiet),
            _ => print_success(&format!("\"{}\" removed from favorites", result.name), quiet),
        },
    }

    Ok(())
}

async fn check(id: &str, format: OutputFormat) -> Result<()> {
    let session = Session::open()?;
    let result = CheckResult {
        id: id.to_string(),
        favorite: session.browser.is_favorite(id),
    };

    print_formatted(&result, format, |r| {
        if r.favorite {
            format!("{} is a favorite", r.id)
        } else {
            format!("{} is not a favorite", r.id)
        }
    });

    Ok(())
}
