use proptest::prelude::*;
use solver::{lit_from_int, Solution, Solver};

/// Exhaustively checks `2^num_vars` valuations. Used as the ground
/// truth oracle for the soundness/completeness property tests below;
/// only practical for the small variable counts proptest generates
/// here.
fn brute_force_satisfiable(clauses: &[Vec<i64>], num_vars: usize) -> bool {
    if num_vars > 20 {
        panic!("brute force oracle only intended for small instances");
    }
    (0u64..(1u64 << num_vars)).any(|assignment| {
        clauses.iter().all(|clause| {
            clause.iter().any(|&repr| {
                let var = repr.unsigned_abs() as usize - 1;
                let value = (assignment >> var) & 1 == 1;
                if repr > 0 {
                    value
                } else {
                    !value
                }
            })
        })
    })
}

fn build_and_solve(num_vars: usize, clauses: &[Vec<i64>]) -> Solver {
    let mut solver = Solver::new(num_vars, clauses.len());
    for (c, lits) in clauses.iter().enumerate() {
        for &repr in lits {
            solver.add_literal_to_clause(c, lit_from_int(repr));
        }
    }
    solver.solve();
    solver
}

fn satisfies_all_clauses(model: &[bool], clauses: &[Vec<i64>]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|&repr| {
            let var = repr.unsigned_abs() as usize - 1;
            if repr > 0 {
                model[var]
            } else {
                !model[var]
            }
        })
    })
}

#[test]
fn empty_formula_is_satisfiable() {
    let solver = build_and_solve(1, &[]);
    assert_eq!(solver.solution(), Solution::Satisfiable);
}

#[test]
fn single_unit_clause() {
    let solver = build_and_solve(1, &[vec![1]]);
    assert_eq!(solver.solution(), Solution::Satisfiable);
    assert_eq!(solver.model(), vec![true]);
}

#[test]
fn direct_contradiction() {
    let solver = build_and_solve(1, &[vec![1], vec![-1]]);
    assert_eq!(solver.solution(), Solution::Unsatisfiable);
}

#[test]
fn two_sat_chain() {
    let solver = build_and_solve(3, &[vec![-1, 2], vec![-2, 3], vec![-3]]);
    assert_eq!(solver.solution(), Solution::Satisfiable);
    assert_eq!(solver.model(), vec![false, false, false]);
}

#[test]
fn three_sat_toy() {
    let clauses = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3]];
    let solver = build_and_solve(3, &clauses);
    assert_eq!(solver.solution(), Solution::Satisfiable);
    assert!(satisfies_all_clauses(&solver.model(), &clauses));
}

#[test]
fn pigeonhole_php_3_2_is_unsatisfiable() {
    let var = |i: usize, j: usize| (2 * (i - 1) + j) as i64;
    let mut clauses = Vec::new();
    for i in 1..=3 {
        clauses.push(vec![var(i, 1), var(i, 2)]);
    }
    for j in 1..=2 {
        for i1 in 1..=3 {
            for i2 in (i1 + 1)..=3 {
                clauses.push(vec![-var(i1, j), -var(i2, j)]);
            }
        }
    }
    let solver = build_and_solve(6, &clauses);
    assert_eq!(solver.solution(), Solution::Unsatisfiable);
    assert!(solver.stats().branches > 0);
    assert!(solver.stats().propagations > 0);
}

fn arbitrary_clause(max_var: usize, max_lits: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec((1..=max_var, any::<bool>()), 1..=max_lits).prop_map(|lits| {
        lits.into_iter()
            .map(|(v, sign)| if sign { v as i64 } else { -(v as i64) })
            .collect()
    })
}

fn arbitrary_cnf(max_var: usize, max_lits: usize, max_clauses: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(arbitrary_clause(max_var, max_lits), 1..=max_clauses)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Completeness: every SATISFIABLE verdict comes with a model that
    /// actually satisfies every input clause.
    #[test]
    fn completeness(clauses in arbitrary_cnf(8, 4, 6)) {
        let solver = build_and_solve(8, &clauses);
        if solver.solution().is_satisfiable() {
            prop_assert!(satisfies_all_clauses(&solver.model(), &clauses));
        }
    }

    /// Soundness: an UNSATISFIABLE verdict agrees with brute force over
    /// all 2^num_vars valuations.
    #[test]
    fn soundness(clauses in arbitrary_cnf(8, 4, 6)) {
        let solver = build_and_solve(8, &clauses);
        if solver.solution().is_unsatisfiable() {
            prop_assert!(!brute_force_satisfiable(&clauses, 8));
        }
    }

    /// The verdict always agrees with the brute-force oracle, in both
    /// directions, for small instances.
    #[test]
    fn verdict_matches_brute_force(clauses in arbitrary_cnf(6, 3, 5)) {
        let solver = build_and_solve(6, &clauses);
        let expected = brute_force_satisfiable(&clauses, 6);
        prop_assert_eq!(solver.solution().is_satisfiable(), expected);
    }
}
