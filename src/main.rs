// stepscope: brute force vs optimal algorithm stepper

use std::fs::File;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use stepscope::catalog::Algorithm;
use stepscope::config::Cli;
use stepscope::export;
use stepscope::session::Session;
use stepscope::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        print_catalogue();
        return Ok(());
    }

    init_logging(&cli)?;

    let config = match cli.simulation() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: stepscope <ALGORITHM> [--input 1,2,3] [--param N]");
            eprintln!("       stepscope --list");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(config, cli.mode);
    session.controller_mut().set_speed(cli.speed);

    if let Some(path) = &cli.export {
        export::write_json(&session, path)?;
        eprintln!(
            "Wrote {} optimal and {} brute-force steps to {}",
            session.optimal().len(),
            session.brute_force().len(),
            path.display()
        );
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Logs go to `--log-file` when given. Without one, export runs log to
/// stderr and the TUI runs silent, since it owns the terminal.
fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if cli.export.is_none() {
        builder.filter_level(LevelFilter::Off);
    }

    builder.init();
    Ok(())
}

fn print_catalogue() {
    println!("{:<20} {:<16} {:<14} {}", "ALGORITHM", "FAMILY", "PARAMETER", "COST");
    for algorithm in Algorithm::ALL {
        let name = clap::ValueEnum::to_possible_value(&algorithm)
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        let complexity = algorithm.complexity();
        println!(
            "{:<20} {:<16} {:<14} {} -> {}",
            name,
            algorithm.family().to_string(),
            algorithm.parameter().name(),
            complexity.brute_force,
            complexity.optimal
        );
    }
}
