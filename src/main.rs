// calctty: four-function terminal calculator

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use calctty::logging::{self, LogTarget};
use calctty::session::evaluate;
use calctty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "calctty", version, about = "Four-function terminal calculator")]
struct Cli {
    /// Evaluate a key sequence without starting the TUI, e.g. "3+4*2="
    ///
    /// Accepts 0-9 + - * / = c, the keypad glyphs, and '<' for backspace.
    #[arg(short, long, value_name = "KEYS")]
    eval: Option<String>,

    /// With --eval, print every display update instead of only the last one
    #[arg(long, requires = "eval")]
    trace_steps: bool,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(keys) = &cli.eval {
        let target = cli
            .log_file
            .clone()
            .map_or(LogTarget::Stderr, LogTarget::File);
        logging::init(target, cli.verbose)?;
        return run_batch(keys, cli.trace_steps);
    }

    // Never log to the terminal the TUI is drawing on
    let target = cli.log_file.clone().map_or(LogTarget::Off, LogTarget::File);
    logging::init(target, cli.verbose)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Feed `keys` to a fresh calculator and print the display
fn run_batch(keys: &str, trace_steps: bool) -> Result<(), Box<dyn std::error::Error>> {
    let display = match evaluate(keys) {
        Ok(display) => display,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if trace_steps {
        for line in &display.lines {
            println!("{}", line);
        }
    } else if let Some(value) = display.current() {
        println!("{}", value);
    }

    Ok(())
}
