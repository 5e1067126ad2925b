// Algoscope: step-by-step sorting and searching visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use algoscope::config::{Settings, DEFAULT_PLAYBACK_INTERVAL};
use algoscope::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through sorting and searching algorithms", long_about = None)]
struct Cli {
    /// Array to load on startup, e.g. "5,3,8,1"
    #[arg(short, long)]
    array: Option<String>,

    /// Delay between steps while playing, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_PLAYBACK_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(File::create(path)?);
    }

    let settings = Settings {
        initial_array: cli.array,
        log_file: cli.log_file,
        ..Settings::default()
    }
    .with_interval_ms(cli.interval_ms);
    tracing::info!(?settings, "starting algoscope");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_tracing(file: File) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
