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

//! # Search Progress Snapshots
//!
//! A `SearchProgress<T>` is what an engine hands to its monitors each time
//! it decides to report. It is a plain value: cheap to copy, created per
//! callback, never retained by the engine.
//!
//! ## Fields
//!
//! - `phase`: where the engine is. Only `NodeExploration` snapshots carry a
//!   meaningful gap; earlier phases are reported so that time-based monitors
//!   can still act on them.
//! - `elapsed_seconds`: engine runtime, non-decreasing within one search.
//! - `incumbent_objective`: best feasible objective, `None` until one exists.
//! - `best_bound`: best proven bound on the optimal objective.
//! - `solution_count`: number of feasible solutions found so far.
//! - `explored_nodes`: branch-and-bound nodes processed so far.
//!
//! ## Usage
//!
//! ```rust
//! use gapwatch_search::progress::{SearchPhase, SearchProgress};
//!
//! let p = SearchProgress::node_exploration(12.5, Some(100.0_f64), 105.0, 3)
//!     .with_explored_nodes(4096);
//! assert_eq!(p.phase(), SearchPhase::NodeExploration);
//! assert_eq!(p.relative_gap(), Some(0.05));
//! ```

use crate::{gap::relative_gap, num::SolverFloat};

/// The stage of the search a snapshot was taken in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SearchPhase {
    /// Model reductions before any relaxation is solved.
    Presolve,
    /// Solving the root relaxation; no tree exists yet.
    RootRelaxation,
    /// Branch-and-bound tree search.
    #[default]
    NodeExploration,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SearchPhase::Presolve => "Presolve",
            SearchPhase::RootRelaxation => "RootRelaxation",
            SearchPhase::NodeExploration => "NodeExploration",
        };
        f.pad(name)
    }
}

/// A snapshot of search progress delivered to monitors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SearchProgress<T> {
    phase: SearchPhase,
    elapsed_seconds: f64,
    incumbent_objective: Option<T>,
    best_bound: T,
    solution_count: u64,
    explored_nodes: u64,
}

impl<T> SearchProgress<T>
where
    T: SolverFloat,
{
    /// Creates a snapshot for the given phase.
    #[inline]
    pub fn new(
        phase: SearchPhase,
        elapsed_seconds: f64,
        incumbent_objective: Option<T>,
        best_bound: T,
        solution_count: u64,
    ) -> Self {
        Self {
            phase,
            elapsed_seconds,
            incumbent_objective,
            best_bound,
            solution_count,
            explored_nodes: 0,
        }
    }

    /// Creates a snapshot taken during branch-and-bound tree search.
    #[inline]
    pub fn node_exploration(
        elapsed_seconds: f64,
        incumbent_objective: Option<T>,
        best_bound: T,
        solution_count: u64,
    ) -> Self {
        Self::new(
            SearchPhase::NodeExploration,
            elapsed_seconds,
            incumbent_objective,
            best_bound,
            solution_count,
        )
    }

    /// Sets the number of explored nodes.
    #[inline]
    pub fn with_explored_nodes(mut self, explored_nodes: u64) -> Self {
        self.explored_nodes = explored_nodes;
        self
    }

    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    #[inline]
    pub fn incumbent_objective(&self) -> Option<T> {
        self.incumbent_objective
    }

    #[inline]
    pub fn best_bound(&self) -> T {
        self.best_bound
    }

    #[inline]
    pub fn solution_count(&self) -> u64 {
        self.solution_count
    }

    #[inline]
    pub fn explored_nodes(&self) -> u64 {
        self.explored_nodes
    }

    /// Returns `true` if the snapshot was taken during tree search.
    #[inline]
    pub fn is_node_exploration(&self) -> bool {
        self.phase == SearchPhase::NodeExploration
    }

    /// Returns the incumbent objective if at least one feasible solution
    /// has been reported. A snapshot with `solution_count == 0` has no
    /// incumbent even if the engine filled in a placeholder value.
    #[inline]
    pub fn incumbent(&self) -> Option<T> {
        if self.solution_count == 0 {
            return None;
        }
        self.incumbent_objective
    }

    /// Returns the relative optimality gap, or `None` without an incumbent.
    #[inline]
    pub fn relative_gap(&self) -> Option<T> {
        self.incumbent()
            .map(|incumbent| relative_gap(incumbent, self.best_bound))
    }
}

impl<T> std::fmt::Display for SearchProgress<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let incumbent = match self.incumbent() {
            Some(v) => format!("{}", v),
            None => "-".to_string(),
        };
        write!(
            f,
            "SearchProgress(phase: {}, elapsed: {:.1}s, incumbent: {}, bound: {}, solutions: {}, nodes: {})",
            self.phase,
            self.elapsed_seconds,
            incumbent,
            self.best_bound,
            self.solution_count,
            self.explored_nodes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_node_exploration() {
        assert_eq!(SearchPhase::default(), SearchPhase::NodeExploration);
    }

    #[test]
    fn test_phase_display_matches_log_table() {
        assert_eq!(SearchPhase::Presolve.to_string(), "Presolve");
        assert_eq!(SearchPhase::RootRelaxation.to_string(), "RootRelaxation");
        assert_eq!(
            format!("{:<16}|", SearchPhase::NodeExploration),
            "NodeExploration |"
        );
    }

    #[test]
    fn test_node_exploration_constructor() {
        let p = SearchProgress::node_exploration(3.0, Some(10.0_f64), 12.0, 2);
        assert!(p.is_node_exploration());
        assert_eq!(p.elapsed_seconds(), 3.0);
        assert_eq!(p.incumbent(), Some(10.0));
        assert_eq!(p.best_bound(), 12.0);
        assert_eq!(p.solution_count(), 2);
        assert_eq!(p.explored_nodes(), 0);
    }

    #[test]
    fn test_incumbent_hidden_without_solutions() {
        let p = SearchProgress::node_exploration(1.0, Some(10.0_f64), 12.0, 0);
        assert_eq!(p.incumbent_objective(), Some(10.0));
        assert_eq!(p.incumbent(), None);
        assert_eq!(p.relative_gap(), None);
    }

    #[test]
    fn test_relative_gap_uses_incumbent_and_bound() {
        let p = SearchProgress::node_exploration(1.0, Some(100.0_f64), 105.0, 1);
        assert_eq!(p.relative_gap(), Some(0.05));
    }

    #[test]
    fn test_display_lists_fields() {
        let p = SearchProgress::new(SearchPhase::RootRelaxation, 0.5, None, 7.5_f64, 0)
            .with_explored_nodes(9);
        let s = p.to_string();
        assert!(s.contains("RootRelaxation"));
        assert!(s.contains("incumbent: -"));
        assert!(s.contains("nodes: 9"));
    }
}
