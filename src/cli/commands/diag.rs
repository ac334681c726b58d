//! Diagnostic and debugging commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{print_formatted, status_line, OutputFormat};
use crate::config::Config;
use crate::favorites::FAVORITES_KEY;
use crate::meal::Meal;
use crate::storage::{SqliteStorage, Storage};

#[derive(Subcommand, Debug)]
pub enum DiagCommands {
    /// Show all data paths (config, database)
    Paths,

    /// Verify local state health
    Check,
}

#[derive(Serialize)]
struct PathsResult {
    config_file: String,
    database: String,
}

#[derive(Serialize)]
struct CheckResult {
    config_exists: bool,
    config_valid: bool,
    database_accessible: bool,
    favorites_readable: bool,
    favorite_count: usize,
}

pub async fn run(command: DiagCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        DiagCommands::Paths => paths(format).await,
        DiagCommands::Check => check(format).await,
    }
}

async fn paths(format: OutputFormat) -> Result<()> {
    let result = PathsResult {
        config_file: Config::config_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "<error>".to_string()),
        database: SqliteStorage::db_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "<error>".to_string()),
    };

    print_formatted(&result, format, |r| {
        [
            format!("Config file:  {}", r.config_file),
            format!("Database:     {}", r.database),
        ]
        .join("\n")
    });

    Ok(())
}

async fn check(format: OutputFormat) -> Result<()> {
    let config_path = Config::config_path().ok();
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let config_valid = Config::load().is_ok();

    let storage = SqliteStorage::open().ok();
    let database_accessible = storage.is_some();
    let favorites = storage.as_ref().map(|s| check_favorites(s)).unwrap_or((false, 0));

    let result = CheckResult {
        config_exists,
        config_valid,
        database_accessible,
        favorites_readable: favorites.0,
        favorite_count: favorites.1,
    };

    print_formatted(&result, format, |r| {
        [
            status_line(r.config_exists, "Config file exists"),
            status_line(r.config_valid, "Config file parses"),
            status_line(r.database_accessible, "Database accessible"),
            status_line(
                r.favorites_readable,
                &format!("Favorites readable ({} saved)", r.favorite_count),
            ),
        ]
        .join("\n")
    });

    Ok(())
}

/// Whether the stored favorites payload decodes, and how many it holds.
/// A key that was never written counts as readable and empty.
fn check_favorites(storage: &dyn Storage) -> (bool, usize) {
    match storage.get(FAVORITES_KEY) {
        Ok(Some(payload)) => match serde_json::from_str::<Vec<Meal>>(&payload) {
            Ok(meals) => (true, meals.len()),
            Err(_) => (false, 0),
        },
        Ok(None) => (true, 0),
        Err(_) => (false, 0),
    }
}
