mod cli;
mod dimacs;
mod error;
mod writer;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("simplesat: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (path_label, input) = read_input(cli.file.as_deref())?;

    let parsed = dimacs::parse(&path_label, &input)?;
    log::info!(
        "parsed {} with {} variables and {} clauses",
        path_label,
        parsed.n_vars,
        parsed.n_clauses
    );

    let mut solver = dimacs::load(&parsed);
    let solution = solver.solve();
    log::info!(
        "solved: {solution} ({} branches, {} propagations)",
        solver.stats().branches,
        solver.stats().propagations
    );

    write_output(cli.output.as_deref(), &solver)
}

fn read_input(file: Option<&std::path::Path>) -> Result<(String, String), CliError> {
    match file {
        Some(path) => {
            let mut contents = String::new();
            File::open(path)
                .and_then(|mut f| f.read_to_string(&mut contents))
                .map_err(|source| CliError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok((path.display().to_string(), contents))
        }
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|source| CliError::FileAccess {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(("<stdin>".to_string(), contents))
        }
    }
}

fn write_output(file: Option<&std::path::Path>, solver: &solver::Solver) -> Result<(), CliError> {
    match file {
        Some(path) => {
            let mut f = File::create(path).map_err(|source| CliError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            writer::write_solution(&mut f, solver).map_err(|source| CliError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writer::write_solution(&mut handle, solver).map_err(|source| CliError::FileAccess {
                path: "<stdout>".into(),
                source,
            })
        }
    }
}
