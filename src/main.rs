mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod store;
mod ticker;
mod ui;

use app::AppState;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::LoggerHandle;
use persistence::{
    atomic_write, config_file, ensure_hub_dir, init_local_hub, load_config, logs_dir, save_config,
    FileBackend, HubConfig,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use store::Store;
use ticker::{SystemClock, TickDriver};

#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "A terminal productivity hub: pomodoro, tasks, notes, habits and journal", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). Overrides config.json.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .hub directory in the current directory
    Init,
    /// Print the saved state as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Discard all saved data and start over
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let hub_dir = init_local_hub()?;
            save_config(config_file(&hub_dir), &HubConfig::default())?;
            println!("Initialized hub directory: {}", hub_dir.display());
            println!();
            println!("Hub will now keep its data in this local directory.");
            println!("Run 'hub' to open the dashboard.");
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let (hub_dir, _config, _logger) = bootstrap(cli.log_level.as_deref())?;
            let store = Store::open(FileBackend::new(&hub_dir));
            let json = store.export()?;

            match output {
                Some(path) => {
                    atomic_write(&path, &json)?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Some(Commands::Reset) => {
            let (hub_dir, _config, _logger) = bootstrap(cli.log_level.as_deref())?;
            let mut store = Store::open(FileBackend::new(&hub_dir));
            store.reset_all()?;
            store.flush()?;
            println!("Reset hub data in {}", hub_dir.display());
            Ok(())
        }
        None => run_tui(cli.log_level.as_deref()),
    }
}

/// Hub directory, its config and a running logger
fn bootstrap(cli_level: Option<&str>) -> Result<(PathBuf, HubConfig, LoggerHandle)> {
    let hub_dir = ensure_hub_dir()?;
    let config = load_config(config_file(&hub_dir))?;
    let logger = start_logging(&hub_dir, cli_level, &config)?;
    Ok((hub_dir, config, logger))
}

fn start_logging(hub_dir: &Path, cli_level: Option<&str>, config: &HubConfig) -> Result<LoggerHandle> {
    let level = logging::resolve_level(cli_level, &config.log_level);
    logging::init_logging(level, &logs_dir(hub_dir)).context("Failed to initialize logging")
}

fn run_tui(cli_level: Option<&str>) -> Result<()> {
    let (hub_dir, config, _logger) = bootstrap(cli_level)?;
    eprintln!("Using hub directory: {}", hub_dir.display());

    let mut store = Store::open(FileBackend::new(&hub_dir));
    if config.notifications {
        let watcher = notifications::phase_watcher(store.pomodoro());
        store.subscribe(watcher);
    }
    let mut app = AppState::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(status) = &app.status {
        eprintln!("{}", status);
    }
    if let Err(err) = result {
        log::error!("event=app_error error={:#}", err);
        eprintln!("Error: {}", err);
    }
    log::info!("event=app_exit");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &HubConfig,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(config.ui_tick_ms);
    let mut driver = TickDriver::new(SystemClock);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if input::wants_editor(app, &key) {
                        // Hand the terminal to the editor
                        disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

                        if let Err(err) = input::edit_selected_note(app) {
                            log::warn!("event=editor_failed error={:#}", err);
                            app.status = Some(format!("{:#}", err));
                        }

                        enable_raw_mode()?;
                        execute!(io::stdout(), EnterAlternateScreen)?;
                        terminal.clear()?;
                    } else if input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
            }
        }

        app.drive_ticks(&mut driver);
    }
}
