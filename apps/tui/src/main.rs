mod api;
mod app;
mod chart;
mod cli;
mod config;
mod db;
mod domain;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    init_tracing(args.debug);

    // Initialize application state
    let mut app = App::new();

    // Without a terminal there is nothing to draw; print the summary instead
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Connect the settings store and restore persisted preferences
    if let Err(e) = app.initialize().await {
        eprintln!("Error initializing settings store: {e}");
        eprintln!("Will continue without persisted preferences");
    } else {
        eprintln!("Settings store initialization successful");
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // Logs go to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
