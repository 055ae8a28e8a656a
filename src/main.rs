use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::config::{AppConfig, LoggingConfig};
use tic_tac_toe::ui::{App, TerminalRenderer};

/// Play Tic-Tac-Toe against the computer in the terminal.
#[derive(Parser)]
#[command(name = "tic_tac_toe", about = "Play Tic-Tac-Toe against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tic_tac_toe.toml")]
    config: PathBuf,

    /// Seed for the computer's random moves (overrides [ai] seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }

    init_logging(&config.logging)?;
    info!(config = %cli.config.display(), seed = ?config.ai.seed, "starting");

    run(&config).context("running terminal UI")
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let log_file = File::create(&logging.file)
        .with_context(|| format!("creating log file {}", logging.file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized
    Ok(())
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut renderer = TerminalRenderer::new(Terminal::new(backend)?);

    let mut app = App::new(config);
    let res = app.run(&mut renderer);

    // Restore terminal even if the app failed
    let terminal = renderer.terminal_mut();
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    info!("exiting");
    res
}
