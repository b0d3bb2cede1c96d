//! Per-literal state and the occurrence index: for each literal, the
//! fixed/assigned flags, a scratch score used by the branching
//! heuristic, and the list of clauses containing it.

/// Storage for a single literal. Every variable owns a pair of these
/// (positive and negative); `fixed` and `assigned` always agree across
/// the pair (see invariant L1 in the design doc).
#[derive(Debug, Clone, Default)]
pub struct LitState {
    pub fixed: bool,
    pub assigned: bool,
    pub score: i64,
    /// Clauses containing this literal. Static for the solver's lifetime.
    pub cont_clauses: Vec<usize>,
}

impl LitState {
    pub fn new() -> Self {
        LitState::default()
    }
}
