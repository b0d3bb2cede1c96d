//! Chronological-backtracking DPLL core for Boolean satisfiability
//! over CNF formulas.
//!
//! The crate is organized leaves-first, matching the data flow of a
//! single solve: [`literal`] is the signed/unsigned literal bijection,
//! [`clause`] is per-clause counter bookkeeping, [`lit_state`] is the
//! per-literal occurrence index, and [`solver`] is the recursive
//! search engine built on top of the three.
//!
//! Parsing DIMACS input and printing a [`Solution`] are the caller's
//! responsibility; this crate only ever returns a verdict.

mod clause;
mod lit_state;
pub mod literal;
mod solution;
mod solver;

pub use literal::{
    int_from_lit, lit_from_int, negate, negative_of, positive_of, var_of, Lit, VarId,
};
pub use solution::Solution;
pub use solver::{Solver, Stats};
