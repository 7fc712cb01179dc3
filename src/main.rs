//! Folio TUI - a single-page developer portfolio for the terminal.
//!
//! This binary loads a portfolio content file and renders it as one tall
//! scrollable page with scroll-triggered reveal animations.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_tui::app::{App, AppState};
use folio_tui::config::{Config, DEFAULT_CONTENT_FILE};
use folio_tui::content::{self, AssetMap};
use folio_tui::ui::input::{handle_input, handle_mouse};
use folio_tui::ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds).
/// Short enough that reveal and glide frames stay smooth.
const EVENT_POLL_TIMEOUT_MS: u64 = 33;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; the alternate screen owns stdout. Redirect with
    // `2>folio.log` to capture them.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Parse CLI arguments by hand: one optional content path plus flags
    let mut cli_content: Option<PathBuf> = None;
    let mut check_only = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--check" => check_only = true,
            "--version" | "-V" => {
                println!("folio {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                anyhow::bail!("Unknown option: {} (see --help)", flag);
            }
            path => cli_content = Some(PathBuf::from(path)),
        }
    }

    // Initialize logging
    init_tracing();

    // A broken config is not fatal; the defaults always work
    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    if check_only {
        return check_content(&config, cli_content.as_ref());
    }

    info!("Folio TUI starting");

    // Load content before touching the terminal so a fatal error prints
    // on the normal screen
    let content_path = config.content_path(cli_content.as_ref());
    let portfolio = content::load(&content_path)?;
    let assets = AssetMap::build(&portfolio, &config.asset_dir_for(&content_path));

    let mouse_capture = config.mouse_capture;
    let mut app = App::new(config, portfolio, assets);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Folio TUI shutting down");
    Ok(())
}

/// Validate the content file and report without entering the UI.
fn check_content(config: &Config, cli_path: Option<&PathBuf>) -> Result<()> {
    let path = config.content_path(cli_path);
    let portfolio = content::load(&path)?;
    let assets = AssetMap::build(&portfolio, &config.asset_dir_for(&path));

    println!(
        "{}: OK ({} projects, {} certificates, {} achievements, {} skills)",
        path.display(),
        portfolio.projects.len(),
        portfolio.certificates.len(),
        portfolio.achievements.len(),
        portfolio.skills.all().len(),
    );
    if assets.missing_count() > 0 {
        println!(
            "note: {} of {} image references will render as placeholders",
            assets.missing_count(),
            assets.len(),
        );
    }
    Ok(())
}

fn print_usage() {
    println!("folio - a single-page developer portfolio for the terminal");
    println!();
    println!("Usage: folio [OPTIONS] [CONTENT_FILE]");
    println!();
    println!("Arguments:");
    println!(
        "  CONTENT_FILE   Portfolio JSON to render (default: {})",
        DEFAULT_CONTENT_FILE
    );
    println!();
    println!("Options:");
    println!("  --check        Validate the content file and exit");
    println!("  -V, --version  Print version and exit");
    println!("  -h, --help     Print this help and exit");
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to keep animation frames flowing
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    handle_input(app, key);
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        // Advance reveals, glides, the marquee, and pending form timers
        app.tick(Instant::now());

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
