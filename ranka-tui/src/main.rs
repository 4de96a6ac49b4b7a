mod app;
mod data;
#[macro_use]
mod logging;
mod store;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ranka_types::ColorScheme;
use std::time::Duration;

/// ranka - A keyboard-driven terminal dashboard for social profile rankings
#[derive(Parser)]
#[command(name = "ranka")]
#[command(about = "A terminal leaderboard and search dashboard for social profiles")]
#[command(version)]
struct Cli {
    /// Color scheme: default, dark, light, or solarized
    #[arg(long, short, env = "RANKA_THEME")]
    theme: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging system
    let log_config = if cli.verbose {
        logging::LogConfig::verbose()
    } else {
        logging::LogConfig::default()
    };
    logging::init_logging(&log_config)?;

    // Resolve color scheme before entering the alternate screen
    let color_scheme = match cli.theme.as_deref() {
        Some(name) => ColorScheme::parse(name).unwrap_or_else(|| {
            log::warn!("Unknown theme {:?}, falling back to default", name);
            ColorScheme::default()
        }),
        None => ColorScheme::default(),
    };

    // Initialize terminal
    let mut tui = terminal::init()?;

    // Create app over the fixed seed data
    let mut app = App::new();
    app.color_scheme = color_scheme;
    app.log_config = log_config;

    log::info!(
        "Dashboard started with {} profiles, theme {}",
        app.store.len(),
        app.color_scheme.as_str()
    );

    // Main event loop
    while app.running {
        // Render UI
        tui.draw(|frame| ui::render(&mut app, frame))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            // Filter out mouse events - keyboard-only navigation
            if matches!(event, Event::Mouse(_)) {
                continue;
            }

            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    let context = if app.show_help {
                        "help_modal"
                    } else {
                        match app.current_tab {
                            app::Tab::Leaderboard => "leaderboard",
                            app::Tab::Search => "search",
                        }
                    };
                    log_key_event!(app.log_config, "key={:?}, context={}", key.code, context);

                    app.handle_key_event(key)?;
                }
            }
        }
    }

    // Restore terminal
    terminal::restore()?;

    Ok(())
}
