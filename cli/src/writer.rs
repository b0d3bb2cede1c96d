//! Output formatting: comment lines carrying generator statistics, the
//! `s` verdict line, and — on SATISFIABLE — the soft-wrapped `v`
//! lines.

use std::io::{self, Write};

use solver::{int_from_lit, negate, positive_of, Solution, Solver};

const LINE_WIDTH: usize = 79;

pub fn write_solution(out: &mut impl Write, solver: &Solver) -> io::Result<()> {
    writeln!(out, "c simplesat {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "c elapsed {:.6}s", solver.stats().elapsed().as_secs_f64())?;
    writeln!(out, "c branches {}", solver.stats().branches)?;
    writeln!(out, "c propagations {}", solver.stats().propagations)?;
    writeln!(out, "s {}", solver.solution())?;

    if solver.solution() == Solution::Satisfiable {
        write_model(out, &solver.model())?;
    }
    Ok(())
}

fn write_model(out: &mut impl Write, model: &[bool]) -> io::Result<()> {
    let tokens: Vec<String> = model
        .iter()
        .enumerate()
        .map(|(v, &value)| {
            let lit = if value { positive_of(v) } else { negate(positive_of(v)) };
            int_from_lit(lit).to_string()
        })
        .chain(std::iter::once("0".to_string()))
        .collect();

    let mut column = 1usize; // "v" already written
    write!(out, "v")?;
    for token in tokens {
        if column + 1 + token.len() > LINE_WIDTH {
            writeln!(out)?;
            write!(out, "v")?;
            column = 1;
        }
        write!(out, " {token}")?;
        column += 1 + token.len();
    }
    writeln!(out)
}
