// SORTTY: step-by-step sorting visualizer

use std::io;
use std::process::ExitCode;

use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::algorithms::Algorithm;
use sortty::cli::{Cli, print_trace};
use sortty::errors::Result;
use sortty::logging::init_tracing;
use sortty::player::Player;
use sortty::ui::{App, TerminalGuard};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    init_tracing(cli.log_file.as_deref())?;

    let algorithm: Algorithm = cli.algorithm.parse()?;
    let config = cli.config()?;
    let elements = cli.elements(&config)?;
    tracing::info!(
        algorithm = algorithm.key(),
        elements = elements.len(),
        "starting"
    );

    let trace = algorithm.generate(&elements)?;

    if cli.verify {
        trace.verify()?;
        println!("{}: {} steps, all checks passed", algorithm, trace.len());
        return Ok(());
    }

    if cli.print {
        let stdout = io::stdout();
        return print_trace(&trace, &mut stdout.lock());
    }

    let player = Player::new(trace, config.play_interval);

    // Set up terminal; the guard undoes whatever succeeded if a later step fails
    let mut guard = TerminalGuard::new(io::stdout());
    guard.enable_raw_mode()?;
    guard.enter_alternate_screen()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(player);
    let res = app.run(&mut terminal);

    // Restore terminal
    guard.restore()?;

    res?;
    tracing::info!("session ended");
    Ok(())
}
