use std::path::PathBuf;

use clap::Parser;

/// A reference chronological-backtracking DPLL solver for DIMACS CNF.
#[derive(Parser, Debug)]
#[command(name = "simplesat", version, about, long_about = None)]
pub struct Cli {
    /// CNF file to read. Reads standard input if omitted.
    pub file: Option<PathBuf>,

    /// Write the solution here instead of standard output.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
