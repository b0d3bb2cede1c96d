use std::fmt;

/// Verdict of a solve attempt.
///
/// The engine is complete and never returns [`Solution::Unknown`]
/// itself; the variant is retained so a future incomplete variant
/// (timeout, interrupt) can reuse the same encoding, and so that a
/// solver inspected before `solve` is called reports `Unknown` rather
/// than a fabricated verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solution {
    Unknown,
    Satisfiable,
    Unsatisfiable,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Solution::Satisfiable)
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Solution::Unsatisfiable)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Solution::Unknown)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Solution::Satisfiable => "SATISFIABLE",
            Solution::Unsatisfiable => "UNSATISFIABLE",
            Solution::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}
