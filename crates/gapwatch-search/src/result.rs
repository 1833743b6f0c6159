// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Outcomes reported by a `SearchEngine` once it stops.
//!
//! `SolveStatus` says what is known about the best solution, and
//! `TerminationReason` says why the engine stopped. A monitor-requested
//! stop is `TerminationReason::Aborted` carrying the monitor's reason, which
//! is how callers tell "interrupted by a monitor" apart from "proven".

use crate::{gap::OptimalityGap, num::SolverFloat, stats::SearchStatistics};

/// What is known about the best solution when the engine stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// A solution was found and proven optimal.
    Optimal,
    /// A feasible solution was found but not proven optimal.
    Feasible,
    /// The model was proven to have no feasible solution.
    Infeasible,
    /// The engine stopped without a solution and without an infeasibility proof.
    Unknown,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Feasible => write!(f, "Feasible"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the engine stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted with an incumbent.
    OptimalityProven,
    /// The search space was exhausted without a feasible solution.
    InfeasibilityProven,
    /// A monitor requested termination; the string is its reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The result of one `SearchEngine::optimize` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<T> {
    status: SolveStatus,
    termination: TerminationReason,
    best_objective: Option<T>,
    best_bound: T,
    statistics: SearchStatistics,
}

impl<T> SolveOutcome<T>
where
    T: SolverFloat,
{
    /// The search was exhausted and `objective` is optimal.
    #[inline]
    pub fn optimal(objective: T, statistics: SearchStatistics) -> Self {
        Self {
            status: SolveStatus::Optimal,
            termination: TerminationReason::OptimalityProven,
            best_objective: Some(objective),
            best_bound: objective,
            statistics,
        }
    }

    /// The search was exhausted without finding a feasible solution.
    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self {
            status: SolveStatus::Infeasible,
            termination: TerminationReason::InfeasibilityProven,
            best_objective: None,
            best_bound: T::nan(),
            statistics,
        }
    }

    /// A monitor stopped the search. The status is `Feasible` if an
    /// incumbent exists and `Unknown` otherwise.
    #[inline]
    pub fn aborted<R>(
        best_objective: Option<T>,
        best_bound: T,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let status = match best_objective {
            Some(_) => SolveStatus::Feasible,
            None => SolveStatus::Unknown,
        };

        Self {
            status,
            termination: TerminationReason::Aborted(reason.into()),
            best_objective,
            best_bound,
            statistics,
        }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination
    }

    #[inline]
    pub fn best_objective(&self) -> Option<T> {
        self.best_objective
    }

    #[inline]
    pub fn best_bound(&self) -> T {
        self.best_bound
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the gap between the best objective and the best bound, if a
    /// solution exists.
    #[inline]
    pub fn final_gap(&self) -> Option<OptimalityGap> {
        self.best_objective
            .map(|objective| OptimalityGap::between(objective, self.best_bound))
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Returns `true` if a monitor stopped the search.
    #[inline]
    pub fn is_interrupted(&self) -> bool {
        matches!(self.termination, TerminationReason::Aborted(_))
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.best_objective.is_some()
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best_objective {
            Some(objective) => write!(
                f,
                "SolveOutcome(status: {}, objective: {}, bound: {}, reason: {})",
                self.status, objective, self.best_bound, self.termination
            ),
            None => write!(
                f,
                "SolveOutcome(status: {}, reason: {})",
                self.status, self.termination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SearchStatistics {
        SearchStatistics::default()
    }

    #[test]
    fn test_optimal_outcome_has_zero_gap() {
        let outcome = SolveOutcome::optimal(42.0_f64, stats());
        assert!(outcome.is_optimal());
        assert!(!outcome.is_interrupted());
        assert!(outcome.has_solution());
        assert_eq!(outcome.best_bound(), 42.0);
        assert_eq!(outcome.final_gap().map(|g| g.value()), Some(0.0));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_aborted_with_solution_is_feasible_and_interrupted() {
        let outcome = SolveOutcome::aborted(Some(100.0_f64), 105.0, "stagnation", stats());
        assert_eq!(outcome.status(), SolveStatus::Feasible);
        assert!(outcome.is_interrupted());
        assert_eq!(outcome.final_gap().map(|g| g.value()), Some(0.05));
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "stagnation"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_aborted_without_solution_is_unknown() {
        let outcome = SolveOutcome::<f64>::aborted(None, 10.0, "interrupt", stats());
        assert_eq!(outcome.status(), SolveStatus::Unknown);
        assert!(!outcome.has_solution());
        assert!(outcome.final_gap().is_none());
    }

    #[test]
    fn test_infeasible_outcome() {
        let outcome = SolveOutcome::<f64>::infeasible(stats());
        assert_eq!(outcome.status(), SolveStatus::Infeasible);
        assert!(!outcome.has_solution());
        assert!(!outcome.is_interrupted());
    }

    #[test]
    fn test_display() {
        let outcome = SolveOutcome::aborted(Some(1.5_f64), 2.0, "time limit", stats());
        assert_eq!(
            outcome.to_string(),
            "SolveOutcome(status: Feasible, objective: 1.5, bound: 2, reason: Aborted: time limit)"
        );
        assert_eq!(TerminationReason::OptimalityProven.to_string(), "Optimality Proven");
    }
}
