mod app;
mod browser;
mod cli;
mod config;
mod favorites;
mod meal;
mod mealdb;
mod state;
mod storage;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Command-line runs stay quiet unless asked; the window logs freely
    let default_filter = if cli.output.verbose || cli.command.is_none() {
        "mealdeck=debug,info"
    } else {
        "mealdeck=warn"
    };

    // Initialize logging (stderr, so --json output on stdout stays clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(command) => cli::run(command, &cli.output).await,
        None => run_window(),
    }
}

/// Open the desktop window
fn run_window() -> Result<()> {
    tracing::info!("Starting Mealdeck");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 760.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("Mealdeck");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    eframe::run_native(
        "Mealdeck",
        native_options,
        Box::new(|cc| Ok(Box::new(app::MealdeckApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
