use amateur_radio_quiz::{App, Config, QuizError, TerminalInput, TerminalPresenter, logger};
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::process::ExitCode;

/// Puts the terminal back when dropped, whichever way `run` exits.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            tracing::warn!("failed to restore terminal: {}", err);
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    raw
}

fn run(config: Config) -> Result<(), QuizError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let _guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config, TerminalInput::new(), TerminalPresenter::new(terminal), rng);
    app.run()
}

fn main() -> ExitCode {
    let config = Config::parse();
    logger::init(&config.log_file);
    tracing::info!(?config, "starting");

    match run(config) {
        Ok(()) => {
            println!("Thanks for using the quiz app!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {}", err);
            if matches!(err, QuizError::DataNotFound { .. }) {
                eprintln!("Run the update step first to download the question banks.");
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
