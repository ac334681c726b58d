//! CLI module for Mealdeck
//!
//! Provides command-line access to browsing, favorites, and configuration.
//! Running without a subcommand opens the desktop window.

mod commands;
mod output;
mod shell;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Mealdeck - TheMealDB recipe browser
#[derive(Parser, Debug)]
#[command(name = "mealdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse, search, and inspect meals
    Meals {
        #[command(subcommand)]
        command: commands::meals::MealsCommands,
    },

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        command: commands::favorites::FavoritesCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Diagnostics and debugging
    Diag {
        #[command(subcommand)]
        command: commands::diag::DiagCommands,
    },

    /// Interactive shell
    Shell,
}

/// Run a parsed subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Meals { command } => commands::meals::run(command, format, quiet).await,
        Commands::Favorites { command } => commands::favorites::run(command, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Diag { command } => commands::diag::run(command, format, quiet).await,
        Commands::Shell => shell::run().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_window() {
        let cli = Cli::try_parse_from(["mealdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_meals_list_flags() {
        let cli = Cli::try_parse_from([
            "mealdeck", "meals", "list", "--category", "Beef", "--search", "pie", "--pages", "2", "--json",
        ])
        .unwrap();
        assert!(cli.output.json);
        match cli.command {
            Some(Commands::Meals {
                command: commands::meals::MealsCommands::List { search, category, pages },
            }) => {
                assert_eq!(search.as_deref(), Some("pie"));
                assert_eq!(category.as_deref(), Some("Beef"));
                assert_eq!(pages, 2);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_pages_must_be_positive() {
        assert!(Cli::try_parse_from(["mealdeck", "meals", "list", "--pages", "0"]).is_err());
    }
}
