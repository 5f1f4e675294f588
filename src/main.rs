mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{compute_time_left, parse_target_date, KEY_EVENT_DATE, KEY_EVENT_NAME};
use persistence::{ensure_soon_dir, get_soon_dir, init_local_soon, state_file, FileStore, KvStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "soon")]
#[command(about = "A calm, terminal-based countdown to the events you're waiting for", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .soon directory in the current directory
    Init,
    /// Update the stored event without opening the countdown screen
    Set {
        /// Event name
        #[arg(short, long)]
        name: Option<String>,
        /// Event date (YYYY-MM-DD format)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the remaining time once and exit
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .soon directory
            let soon_dir = init_local_soon()?;
            println!("Initialized soon directory: {}", soon_dir.display());
            println!();
            println!("Soon will now use this local directory for event storage.");
            println!("Run 'soon' to start the countdown.");
            Ok(())
        }
        Some(Commands::Set { name, date }) => {
            ensure_soon_dir()?;
            let mut store = FileStore::open(state_file()?);

            if let Some(name) = name {
                store.set(KEY_EVENT_NAME, &name)?;
                println!("Event name set to '{}'", name);
            }
            if let Some(date) = date {
                // Stored as-is either way; an unparsable date just shows
                // a zero countdown
                if parse_target_date(&date).is_none() {
                    eprintln!("Warning: '{}' does not parse as a date (expected YYYY-MM-DD)", date);
                }
                store.set(KEY_EVENT_DATE, &date)?;
                println!("Event date set to '{}'", date);
            }
            Ok(())
        }
        Some(Commands::Show) => {
            ensure_soon_dir()?;
            let store = FileStore::open(state_file()?);
            let defaults = domain::Event::default();
            let name = store.get(KEY_EVENT_NAME).unwrap_or(defaults.name);
            let date = store.get(KEY_EVENT_DATE).unwrap_or(defaults.date);

            let left = compute_time_left(&date, chrono::Local::now());
            if parse_target_date(&date).is_none() {
                println!("{}: no countdown ('{}' is not a date)", name, date);
            } else if left.is_zero() {
                println!("{} is here!", name);
            } else {
                println!("{} - {} to go ({})", name, left, date);
            }
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure soon directory exists
    ensure_soon_dir()?;

    // Show which directory we're using
    let soon_dir = get_soon_dir()?;
    eprintln!("Using soon directory: {}", soon_dir.display());

    // Load the stored event (missing keys fall back to defaults)
    let store = FileStore::open(state_file()?);
    let mut app = AppState::new(Box::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if app.needs_save {
        if let Err(e) = app.save() {
            eprintln!("Error saving state: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Refresh the current time and recompute the countdown
        app.tick();

        // Autosave if needed
        if app.needs_save {
            app.save()?;
        }
    }
}
