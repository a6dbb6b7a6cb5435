// ESAL: compiler front-end with a terminal editor

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing::{error, info};

use esal::{compile, logging, ui::App};

/// Editor contents when no file is given
const DEFAULT_SOURCE: &str = "esal() {\n    ## x = 5;\n    @$ x;\n}\n";

#[derive(Parser, Debug)]
#[command(name = "esal")]
#[command(version, about = "ESAL compiler front-end with a terminal editor")]
struct Args {
    /// ESAL source file to open (or to check with --check)
    file: Option<PathBuf>,

    /// Compile FILE, print the report and exit non-zero on errors
    #[arg(long)]
    check: bool,

    /// Write logs to this file while the editor is running
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no input file provided (usage: esal --check <file.esal>)")]
    MissingInput,

    #[error("file '{0}' not found")]
    NotFound(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Batch mode: print the report, exit 1 when it has errors
fn run_check(path: Option<&Path>) -> Result<(), CliError> {
    let path = path.ok_or(CliError::MissingInput)?;
    let source = read_source(path)?;

    info!("Checking {}", path.display());
    let report = compile(&source);
    print!("{}", report.render());

    if report.has_errors() {
        error!("{} error(s) in {}", report.errors.len(), path.display());
        process::exit(1);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.check {
        logging::init_stderr();
        if let Err(e) = run_check(args.file.as_deref()) {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
        return Ok(());
    }

    if let Some(log_file) = &args.log_file {
        logging::init_file(log_file)?;
    }

    let source = match &args.file {
        Some(path) => match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => DEFAULT_SOURCE.to_string(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting editor");
    let mut app = App::new(&source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("editor failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
