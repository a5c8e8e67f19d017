//! WellSync terminal application.
//!
//! A vim-style terminal interface for daily mood check-ins: chat with the
//! companion, analyze a diary entry, take the lifestyle quiz, follow a daily
//! routine and reflect in the evening.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line protocol suitable for scripts and tests:
//!
//! ```bash
//! echo "#analyze so tired today" | cargo run -p wellsync -- --headless --json
//! ```

mod app;
mod config;
mod events;
mod headless;
mod logging;
mod ui;
mod worker;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use config::AppConfig;
use events::{handle_event, EventResult};
use ui::render::render;
use worker::{spawn_worker, WorkerRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let config = match AppConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if config.show_help {
        print_help();
        return Ok(());
    }

    logging::init(&config)?;
    tracing::info!(headless = config.headless, "Starting WellSync");

    if config.headless {
        return headless::run_headless(config.json).map_err(|e| e.into());
    }

    let worker = spawn_worker(config.reply_delay, StdRng::from_entropy());
    let shutdown_tx = worker.request_tx.clone();
    let app = App::new(worker.request_tx, worker.response_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    shutdown_tx.send(WorkerRequest::Shutdown).await.ok();
    worker.task.await.ok();

    if let Err(e) = result {
        tracing::error!(error = %e, "TUI exited with an error");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Drain companion replies
        while let Ok(response) = app.response_rx.try_recv() {
            app.apply_worker_response(response);
        }

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("WellSync - daily wellness companion");
    println!();
    println!("USAGE:");
    println!("  wellsync [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --headless    Read commands from stdin instead of running the TUI");
    println!("  --json        Print headless results as JSON");
    println!("  -h, --help    Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("  WELLSYNC_LOG             Log filter (falls back to RUST_LOG, then info)");
    println!("  WELLSYNC_LOG_FILE        Log file for the TUI (TUI logging is off without it)");
    println!("  WELLSYNC_REPLY_DELAY_MS  Companion typing delay in milliseconds (default 800)");
    println!();
    println!("TUI KEYS:");
    println!("  1-7, Tab      Switch page");
    println!("  i             Type (Esc to stop)");
    println!("  :             Command mode (:q to quit)");
    println!("  ?             Help");
}
