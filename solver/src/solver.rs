use std::mem;
use std::time::{Duration, Instant};

use crate::clause::ClauseState;
use crate::lit_state::LitState;
use crate::literal::{negate, negative_of, positive_of, Lit};
use crate::solution::Solution;

/// Running totals kept alongside the search, surfaced in the `c`
/// comment lines of the DIMACS output.
#[derive(Debug, Clone)]
pub struct Stats {
    pub branches: u64,
    pub propagations: u64,
    start: Instant,
    elapsed: Option<Duration>,
}

impl Stats {
    fn new() -> Self {
        Stats {
            branches: 0,
            propagations: 0,
            start: Instant::now(),
            elapsed: None,
        }
    }

    fn stop(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(self.start.elapsed());
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start.elapsed())
    }
}

fn weight(n_free_lits: u32) -> i64 {
    match n_free_lits {
        2 => 4,
        3 => 2,
        n if n >= 4 => 1,
        _ => 0,
    }
}

/// Owns the entire state of one satisfiability search: the clause and
/// literal arrays, the occurrence index implicit in [`LitState`], the
/// unit-propagation queue, and the assignment trail.
///
/// A `Solver` is built with a known `(n_vars, n_clauses)`, populated
/// clause by clause with [`Solver::add_literal_to_clause`], solved
/// exactly once with [`Solver::solve`], then inspected. Re-solving is
/// not supported.
pub struct Solver {
    n_vars: usize,
    n_clauses: usize,
    lits: Vec<LitState>,
    clauses: Vec<ClauseState>,
    n_sat_clauses: usize,
    n_unsat_clauses: usize,
    unit_stack: Vec<Lit>,
    assigned: Vec<Lit>,
    solution: Solution,
    stats: Stats,
}

impl Solver {
    /// Creates a solver with `n_vars` variables and `n_clauses` empty
    /// clause slots, ready to receive literals via
    /// [`Solver::add_literal_to_clause`].
    pub fn new(n_vars: usize, n_clauses: usize) -> Self {
        Solver {
            n_vars,
            n_clauses,
            lits: (0..2 * n_vars).map(|_| LitState::new()).collect(),
            clauses: (0..n_clauses).map(|_| ClauseState::new()).collect(),
            n_sat_clauses: 0,
            n_unsat_clauses: 0,
            unit_stack: Vec::with_capacity(2 * n_vars + n_clauses),
            assigned: Vec::with_capacity(n_vars),
            solution: Solution::Unknown,
            stats: Stats::new(),
        }
    }

    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    pub fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    pub fn solution(&self) -> Solution {
        self.solution
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Appends `lit` to clause `c`, unless it is already present
    /// (duplicate literals within a clause are silently deduplicated).
    pub fn add_literal_to_clause(&mut self, c: usize, lit: Lit) {
        let clause = &mut self.clauses[c];
        if clause.lits.contains(&lit) {
            return;
        }
        clause.lits.push(lit);
        clause.n_free_lits += 1;
        self.lits[lit].cont_clauses.push(c);
    }

    /// Recovers the satisfying valuation from the current trail:
    /// `model()[v]` is the truth value of 1-based variable `v + 1`.
    /// Variables never touched by the search (because the formula was
    /// already satisfied before they were branched on) default to
    /// `true`.
    pub fn model(&self) -> Vec<bool> {
        (0..self.n_vars)
            .map(|v| {
                let p = positive_of(v);
                if self.lits[p].fixed {
                    self.lits[p].assigned
                } else {
                    true
                }
            })
            .collect()
    }

    /// Runs the search to completion and returns the verdict.
    pub fn solve(&mut self) -> Solution {
        self.admit_clauses();
        let outcome = if !self.drain_unit_stack() {
            Solution::Unsatisfiable
        } else {
            self.search_assignments()
        };
        self.solution = outcome;
        self.stats.stop();
        outcome
    }

    /// Scans the freshly constructed clause array once: empty clauses
    /// are immediately contradictory (they can never be satisfied and
    /// have no free literal to assign), and clauses that already have
    /// exactly one literal are unit from the start. Neither of these
    /// conditions can be discovered through the reactive transition
    /// checks in [`Solver::add_false_assignment`], since no assignment
    /// event has happened yet.
    fn admit_clauses(&mut self) {
        for c in 0..self.clauses.len() {
            let clause = &self.clauses[c];
            if clause.lits.is_empty() {
                self.n_unsat_clauses += 1;
            } else if clause.is_unit() {
                let u = self.get_unit(c);
                self.unit_stack.push(u);
            }
        }
    }

    // ---- clause assignment primitives (§4.3) ----

    fn add_true_assignment(&mut self, c: usize) {
        let clause = &mut self.clauses[c];
        debug_assert!(clause.n_free_lits > 0);
        if clause.n_assigned_true == 0 {
            self.n_sat_clauses += 1;
        }
        clause.n_assigned_true += 1;
        clause.n_free_lits -= 1;
    }

    fn add_false_assignment(&mut self, c: usize) {
        let clause = &mut self.clauses[c];
        debug_assert!(clause.n_free_lits > 0);
        let becomes_contradicted = clause.n_assigned_true == 0 && clause.n_free_lits == 1;
        if becomes_contradicted {
            self.n_unsat_clauses += 1;
        }
        clause.n_assigned_false += 1;
        clause.n_free_lits -= 1;

        let clause = &self.clauses[c];
        if clause.n_assigned_true == 0 && clause.n_free_lits == 1 {
            let u = self.get_unit(c);
            self.unit_stack.push(u);
        }
    }

    fn undo_true_assignment(&mut self, c: usize) {
        let clause = &mut self.clauses[c];
        clause.n_assigned_true -= 1;
        clause.n_free_lits += 1;
        if clause.n_assigned_true == 0 {
            self.n_sat_clauses -= 1;
        }
    }

    fn undo_false_assignment(&mut self, c: usize) {
        let clause = &mut self.clauses[c];
        clause.n_assigned_false -= 1;
        clause.n_free_lits += 1;
        if clause.n_assigned_true == 0 && clause.n_free_lits == 1 {
            self.n_unsat_clauses -= 1;
        }
    }

    /// Precondition: `clauses[c]` is unit (`n_free_lits == 1`,
    /// `n_assigned_true == 0`). Scans linearly for the one literal
    /// whose variable is not yet fixed.
    fn get_unit(&self, c: usize) -> Lit {
        self.clauses[c]
            .lits
            .iter()
            .copied()
            .find(|&lit| !self.lits[lit].fixed)
            .expect("unit clause has no free literal")
    }

    // ---- assignment commit / rollback (§4.5) ----

    fn make_assignment(&mut self, lit: Lit) {
        let nlit = negate(lit);
        self.lits[lit].fixed = true;
        self.lits[lit].assigned = true;
        self.lits[nlit].fixed = true;
        self.lits[nlit].assigned = false;

        let pos_clauses = mem::take(&mut self.lits[lit].cont_clauses);
        for &c in &pos_clauses {
            self.add_true_assignment(c);
        }
        self.lits[lit].cont_clauses = pos_clauses;

        let neg_clauses = mem::take(&mut self.lits[nlit].cont_clauses);
        for &c in &neg_clauses {
            self.add_false_assignment(c);
        }
        self.lits[nlit].cont_clauses = neg_clauses;
    }

    fn undo_assignment(&mut self, lit: Lit) {
        let nlit = negate(lit);

        let neg_clauses = mem::take(&mut self.lits[nlit].cont_clauses);
        for &c in &neg_clauses {
            self.undo_false_assignment(c);
        }
        self.lits[nlit].cont_clauses = neg_clauses;

        let pos_clauses = mem::take(&mut self.lits[lit].cont_clauses);
        for &c in &pos_clauses {
            self.undo_true_assignment(c);
        }
        self.lits[lit].cont_clauses = pos_clauses;

        self.lits[lit].fixed = false;
        self.lits[nlit].fixed = false;
    }

    // ---- branching heuristic (§4.6) ----

    fn update_scores(&mut self) {
        for lit in 0..self.lits.len() {
            if self.lits[lit].fixed {
                self.lits[lit].score = 0;
                continue;
            }
            let cont = mem::take(&mut self.lits[lit].cont_clauses);
            let mut score = 0i64;
            for &c in &cont {
                let clause = &self.clauses[c];
                if !clause.is_satisfied() {
                    score += weight(clause.n_free_lits);
                }
            }
            self.lits[lit].cont_clauses = cont;
            self.lits[lit].score = score;
        }
    }

    /// Precondition: at least one variable is unassigned and at least
    /// one clause is unsatisfied.
    fn choose_branch(&mut self) -> Lit {
        self.update_scores();

        let mut best_score = -1i64;
        let mut best_lit = None;
        for v in 0..self.n_vars {
            let p = positive_of(v);
            if self.lits[p].fixed {
                continue;
            }
            let n = negative_of(v);
            let a = self.lits[p].score;
            let b = self.lits[n].score;
            let combined = (a + 1) * (b + 1);
            if combined > best_score {
                best_score = combined;
                best_lit = Some(if a >= b { p } else { n });
            }
        }
        best_lit.expect("choose_branch called with no free variable")
    }

    // ---- search engine (§4.7) ----

    fn search_assignments(&mut self) -> Solution {
        if self.n_unsat_clauses > 0 {
            return Solution::Unsatisfiable;
        }
        if self.n_sat_clauses == self.n_clauses {
            return Solution::Satisfiable;
        }

        let lit = self.choose_branch();
        let outcome = self.try_assignment(lit);
        if !outcome.is_unsatisfiable() {
            return outcome;
        }
        self.try_assignment(negate(lit))
    }

    fn try_assignment(&mut self, branch: Lit) -> Solution {
        let prev_n_assigned = self.assigned.len();
        self.assigned.push(branch);
        self.stats.branches += 1;
        self.make_assignment(branch);

        let conflict = !self.drain_unit_stack();

        let outcome = if conflict {
            Solution::Unsatisfiable
        } else {
            self.search_assignments()
        };

        if outcome.is_unsatisfiable() {
            while self.assigned.len() > prev_n_assigned {
                let lit = self.assigned.pop().unwrap();
                self.undo_assignment(lit);
            }
        }
        outcome
    }

    /// Drains `unit_stack`, assigning each pending literal and pushing
    /// it onto the trail. Returns `false` on the first conflict
    /// (a literal whose negation is already assigned), clearing the
    /// stack in that case. Used both for the reactive propagation
    /// loop inside [`Solver::try_assignment`] and for the one-off
    /// initial propagation driven by [`Solver::admit_clauses`].
    fn drain_unit_stack(&mut self) -> bool {
        while let Some(u) = self.unit_stack.pop() {
            if !self.lits[u].fixed {
                self.assigned.push(u);
                self.stats.propagations += 1;
                self.make_assignment(u);
            } else if !self.lits[u].assigned {
                self.unit_stack.clear();
                return false;
            }
            // else: already satisfied, discard.
        }
        true
    }
}
