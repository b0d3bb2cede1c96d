//! DIMACS CNF parsing. This module owns the entire contract described
//! for the parser: comment lines, the single problem line, and the
//! `n_clauses` whitespace-separated, zero-terminated clauses that
//! follow. It hands the core solver nothing but literals.

use solver::{lit_from_int, Lit, Solver};

use crate::error::CliError;

/// A parsed CNF header plus its clauses, not yet loaded into a
/// [`Solver`].
pub struct ParsedCnf {
    pub n_vars: usize,
    pub n_clauses: usize,
    pub clauses: Vec<Vec<i64>>,
}

fn format_error(path: &str, reason: impl Into<String>) -> CliError {
    CliError::InvalidFormat {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Parses DIMACS CNF text per the format described in the program's
/// external interface: comment lines, one `p cnf <n> <m>` problem
/// line, then exactly `m` zero-terminated clauses.
pub fn parse(path: &str, input: &str) -> Result<ParsedCnf, CliError> {
    let mut problem_line = None;
    let mut rest_offset = 0usize;

    // Comment lines, then the problem line. Track byte offsets (via
    // split_inclusive, which keeps the line terminator in each piece)
    // so we can hand the clause body — everything after the problem
    // line — to a plain whitespace tokenizer afterwards.
    let mut consumed = 0usize;
    for line in input.split_inclusive('\n') {
        consumed += line.len();
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        problem_line = Some(trimmed);
        rest_offset = consumed.min(input.len());
        break;
    }

    let problem_line =
        problem_line.ok_or_else(|| format_error(path, "missing DIMACS problem line"))?;

    let tokens: Vec<&str> = problem_line.split_whitespace().collect();
    if tokens.len() != 4 || tokens[0] != "p" || tokens[1] != "cnf" {
        return Err(format_error(
            path,
            format!("malformed problem line: {problem_line:?}"),
        ));
    }
    let n_vars: usize = tokens[2]
        .parse()
        .map_err(|_| format_error(path, format!("non-integer variable count: {:?}", tokens[2])))?;
    let n_clauses: usize = tokens[3]
        .parse()
        .map_err(|_| format_error(path, format!("non-integer clause count: {:?}", tokens[3])))?;
    if n_vars == 0 || n_clauses == 0 {
        return Err(format_error(
            path,
            "n_vars and n_clauses must both be strictly positive",
        ));
    }

    let body = &input[rest_offset.min(input.len())..];
    let mut tokens = body.split_whitespace();
    let mut clauses: Vec<Vec<i64>> = Vec::with_capacity(n_clauses);
    let mut current: Vec<i64> = Vec::new();

    while clauses.len() < n_clauses {
        let tok = tokens.next().ok_or_else(|| {
            format_error(
                path,
                format!(
                    "unexpected end of input: expected {} more clause(s)",
                    n_clauses - clauses.len()
                ),
            )
        })?;
        let value: i64 = tok
            .parse()
            .map_err(|_| format_error(path, format!("non-integer literal: {tok:?}")))?;
        if value == 0 {
            clauses.push(std::mem::take(&mut current));
        } else {
            let var = value.unsigned_abs() as usize;
            if var > n_vars {
                return Err(format_error(
                    path,
                    format!("variable {var} exceeds declared n_vars {n_vars}"),
                ));
            }
            current.push(value);
        }
    }

    if !current.is_empty() {
        return Err(format_error(path, "clause not terminated by 0"));
    }
    if let Some(junk) = tokens.next() {
        return Err(format_error(
            path,
            format!("unexpected token after final clause: {junk:?}"),
        ));
    }

    Ok(ParsedCnf {
        n_vars,
        n_clauses,
        clauses,
    })
}

/// Loads a parsed formula into a fresh [`Solver`].
pub fn load(parsed: &ParsedCnf) -> Solver {
    let mut solver = Solver::new(parsed.n_vars, parsed.n_clauses);
    for (c, lits) in parsed.clauses.iter().enumerate() {
        for &repr in lits {
            let lit: Lit = lit_from_int(repr);
            solver.add_literal_to_clause(c, lit);
        }
    }
    solver
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(src: &str) -> ParsedCnf {
        parse("test.cnf", src).expect("expected successful parse")
    }

    #[test]
    fn parses_minimal_formula() {
        let parsed = parse_ok("p cnf 1 1\n1 0\n");
        assert_eq!(parsed.n_vars, 1);
        assert_eq!(parsed.n_clauses, 1);
        assert_eq!(parsed.clauses, vec![vec![1]]);
    }

    #[test]
    fn skips_comments_before_problem_line() {
        let parsed = parse_ok("c a comment\nc another\np cnf 2 1\n1 -2 0\n");
        assert_eq!(parsed.clauses, vec![vec![1, -2]]);
    }

    #[test]
    fn clauses_may_span_lines() {
        let parsed = parse_ok("p cnf 3 1\n1 2\n3 0\n");
        assert_eq!(parsed.clauses, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn tolerates_trailing_whitespace_on_problem_line() {
        let parsed = parse_ok("p cnf 1 1   \n1 0\n");
        assert_eq!(parsed.n_vars, 1);
    }

    #[test]
    fn rejects_missing_problem_line() {
        assert!(parse("t.cnf", "c only a comment\n").is_err());
    }

    #[test]
    fn rejects_extra_token_on_problem_line() {
        assert!(parse("t.cnf", "p cnf 1 1 extra\n1 0\n").is_err());
    }

    #[test]
    fn rejects_zero_clause_count() {
        assert!(parse("t.cnf", "p cnf 1 0\n").is_err());
    }

    #[test]
    fn rejects_premature_eof_mid_clause() {
        assert!(parse("t.cnf", "p cnf 1 1\n1").is_err());
    }

    #[test]
    fn rejects_junk_after_last_clause() {
        assert!(parse("t.cnf", "p cnf 1 1\n1 0\nextra\n").is_err());
    }

    #[test]
    fn rejects_out_of_range_variable() {
        assert!(parse("t.cnf", "p cnf 1 1\n2 0\n").is_err());
    }

    #[test]
    fn admits_empty_clause() {
        let parsed = parse_ok("p cnf 1 1\n0\n");
        assert_eq!(parsed.clauses, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn admits_tautological_clause() {
        let parsed = parse_ok("p cnf 1 1\n1 -1 0\n");
        assert_eq!(parsed.clauses, vec![vec![1, -1]]);
    }
}
