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

//! # Knapsack Branch and Bound
//!
//! A depth-first branch-and-bound engine for the 0/1 knapsack (maximization)
//! that reports its progress to a `SearchMonitor<f64>`.
//!
//! ## Search
//!
//! - Items are branched on in decreasing value density (`DensityOrder`).
//!   The "take" branch is explored before the "skip" branch.
//! - Every node is bounded with the fractional (Dantzig) bound and pruned
//!   if it cannot beat the incumbent.
//! - A greedy pass over the density order provides the first incumbent
//!   before tree search starts.
//! - Partial assignments are feasible solutions (untaken items are simply
//!   left out), so incumbents improve as soon as a better prefix is found.
//!
//! ## Monitoring protocol
//!
//! 1. `on_enter_search`.
//! 2. One `RootRelaxation` snapshot with the root bound and no incumbent.
//! 3. The greedy incumbent: `on_solution_found`, then a `NodeExploration`
//!    snapshot.
//! 4. During tree search a `NodeExploration` snapshot every time the number
//!    of explored nodes has all bits of the report mask cleared, i.e. every
//!    `mask + 1` nodes for a mask of the form `2^k - 1`.
//! 5. `on_exit_search`.
//!
//! `search_command` is consulted after every snapshot and a `Terminate`
//! ends the search right away. Elapsed time in the snapshots is wall-clock
//! time since the search started.
//!
//! The best bound reported is the largest bound among the open nodes (or
//! the incumbent if that is larger), so the reported gap only shrinks as the
//! tree is closed.

use crate::{
    bound::DensityOrder, index::ItemIndex, instance::KnapsackInstance,
    solution::KnapsackSolution, trail::SearchTrail,
};
use fixedbitset::FixedBitSet;
use gapwatch_search::{
    engine::SearchEngine,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    progress::{SearchPhase, SearchProgress},
    result::SolveOutcome,
    stats::{SearchStatistics, SearchStatisticsBuilder},
};

/// Nodes whose bound exceeds the incumbent by no more than this cannot
/// yield a strictly better solution.
const PRUNE_TOLERANCE: f64 = 1e-9;

/// A pending branch: decide item `depth` of the density order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Decision {
    depth: usize,
    take: bool,
    /// Bound of the node this branch was created from.
    parent_bound: f64,
}

/// The result of a knapsack solve: the generic outcome plus the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackOutcome {
    outcome: SolveOutcome<f64>,
    solution: Option<KnapsackSolution>,
}

impl KnapsackOutcome {
    #[inline]
    pub fn outcome(&self) -> &SolveOutcome<f64> {
        &self.outcome
    }

    #[inline]
    pub fn solution(&self) -> Option<&KnapsackSolution> {
        self.solution.as_ref()
    }

    #[inline]
    pub fn into_parts(self) -> (SolveOutcome<f64>, Option<KnapsackSolution>) {
        (self.outcome, self.solution)
    }
}

impl std::fmt::Display for KnapsackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.solution {
            Some(solution) => write!(f, "{}, {}", self.outcome, solution),
            None => write!(f, "{}", self.outcome),
        }
    }
}

/// Depth-first branch-and-bound solver bound to one instance. The search
/// storage is reused across solves.
#[derive(Debug, Clone)]
pub struct KnapsackSolver<'a> {
    instance: &'a KnapsackInstance,
    order: DensityOrder,
    report_mask: u64,
    trail: SearchTrail,
    stack: Vec<Decision>,
    best_solution: Option<KnapsackSolution>,
}

impl<'a> KnapsackSolver<'a> {
    /// Report every 4,096 nodes (2^12).
    pub const DEFAULT_REPORT_MASK: u64 = 0xFFF;

    /// Creates a solver for `instance`.
    pub fn new(instance: &'a KnapsackInstance) -> Self {
        let n = instance.num_items();
        Self {
            instance,
            order: DensityOrder::new(instance),
            report_mask: Self::DEFAULT_REPORT_MASK,
            trail: SearchTrail::preallocated(n),
            stack: Vec::with_capacity(2 * n + 2),
            best_solution: None,
        }
    }

    /// Sets the report mask. A snapshot is sent whenever
    /// `explored_nodes & mask == 0`; `0` reports every node.
    #[inline]
    pub fn with_report_mask(mut self, report_mask: u64) -> Self {
        self.report_mask = report_mask;
        self
    }

    #[inline]
    pub fn instance(&self) -> &KnapsackInstance {
        self.instance
    }

    #[inline]
    pub fn report_mask(&self) -> u64 {
        self.report_mask
    }

    /// Best selection of the most recent solve.
    #[inline]
    pub fn best_solution(&self) -> Option<&KnapsackSolution> {
        self.best_solution.as_ref()
    }

    /// Solves the instance under `monitor`. Pass `&mut monitor` to inspect
    /// the monitor afterwards.
    pub fn solve<M>(&mut self, mut monitor: M) -> KnapsackOutcome
    where
        M: SearchMonitor<f64>,
    {
        let session = KnapsackSearchSession::new(
            self.instance,
            &self.order,
            &mut self.trail,
            &mut self.stack,
            self.report_mask,
            &mut monitor,
        );
        let result = session.run();
        self.best_solution = result.solution.clone();
        result
    }
}

impl<'a> SearchEngine<f64> for KnapsackSolver<'a> {
    fn name(&self) -> &str {
        "KnapsackSolver"
    }

    fn optimize(&mut self, monitor: &mut dyn SearchMonitor<f64>) -> SolveOutcome<f64> {
        self.solve(monitor).outcome
    }
}

/// State of one running search.
struct KnapsackSearchSession<'s, M> {
    instance: &'s KnapsackInstance,
    order: &'s DensityOrder,
    trail: &'s mut SearchTrail,
    stack: &'s mut Vec<Decision>,
    report_mask: u64,
    monitor: &'s mut M,
    best_objective: f64,
    best_selection: Option<FixedBitSet>,
    explored_nodes: u64,
    solutions_found: u64,
    progress_reports: u64,
    start_time: std::time::Instant,
}

impl<'s, M> KnapsackSearchSession<'s, M>
where
    M: SearchMonitor<f64>,
{
    #[inline]
    fn new(
        instance: &'s KnapsackInstance,
        order: &'s DensityOrder,
        trail: &'s mut SearchTrail,
        stack: &'s mut Vec<Decision>,
        report_mask: u64,
        monitor: &'s mut M,
    ) -> Self {
        Self {
            instance,
            order,
            trail,
            stack,
            report_mask,
            monitor,
            best_objective: f64::NEG_INFINITY,
            best_selection: None,
            explored_nodes: 0,
            solutions_found: 0,
            progress_reports: 0,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> KnapsackOutcome {
        self.monitor.on_enter_search();
        self.trail.clear();
        self.stack.clear();

        let capacity = self.instance.capacity();
        let root_bound = self.order.upper_bound(0, 0.0, capacity);
        log::debug!(
            "Starting knapsack search over {} items, root bound {:.3}",
            self.order.len(),
            root_bound
        );

        if let SearchCommand::Terminate(reason) =
            self.report(SearchPhase::RootRelaxation, root_bound)
        {
            return self.finish(Some((reason, root_bound)));
        }

        self.install_greedy();
        if let SearchCommand::Terminate(reason) =
            self.report(SearchPhase::NodeExploration, root_bound)
        {
            return self.finish(Some((reason, root_bound)));
        }

        if root_bound > self.best_objective + PRUNE_TOLERANCE {
            self.push_children(0, root_bound);
        }

        let aborted = loop {
            let Some(decision) = self.stack.pop() else {
                break None;
            };
            self.explored_nodes += 1;

            if self.explored_nodes & self.report_mask == 0 {
                let bound = self.open_bound(decision.parent_bound);
                if let SearchCommand::Terminate(reason) =
                    self.report(SearchPhase::NodeExploration, bound)
                {
                    break Some((reason, bound));
                }
            }

            self.process(decision);
        };

        self.finish(aborted)
    }

    /// Applies `decision` and pushes its children unless the node is
    /// infeasible, a leaf or dominated by the incumbent.
    #[inline(always)]
    fn process(&mut self, decision: Decision) {
        self.trail.backtrack_to(decision.depth);

        let item = self.order.item(decision.depth);
        if decision.take {
            let weight = self.instance.weight(item);
            if self.trail.weight() + weight > self.instance.capacity() {
                return;
            }
            self.trail
                .take(decision.depth, item, self.instance.value(item), weight);
        }

        let value = self.trail.value();
        if value > self.best_objective + PRUNE_TOLERANCE {
            self.install_incumbent(value);
        }

        let depth = decision.depth + 1;
        if depth == self.order.len() {
            return;
        }

        let remaining = (self.instance.capacity() - self.trail.weight()).max(0.0);
        let bound = self.order.upper_bound(depth, value, remaining);
        if bound <= self.best_objective + PRUNE_TOLERANCE {
            return;
        }
        self.push_children(depth, bound);
    }

    #[inline(always)]
    fn push_children(&mut self, depth: usize, bound: f64) {
        // LIFO: the take branch is popped first.
        self.stack.push(Decision {
            depth,
            take: false,
            parent_bound: bound,
        });
        self.stack.push(Decision {
            depth,
            take: true,
            parent_bound: bound,
        });
    }

    /// Largest bound among the open nodes, never below the incumbent.
    fn open_bound(&self, current: f64) -> f64 {
        self.stack
            .iter()
            .map(|d| d.parent_bound)
            .fold(current.max(self.best_objective), f64::max)
    }

    fn install_greedy(&mut self) {
        let capacity = self.instance.capacity();
        let mut selection = FixedBitSet::with_capacity(self.instance.num_items());
        let mut weight = 0.0;
        let mut value = 0.0;
        for &item in self.order.order() {
            let w = self.instance.weight(item);
            if weight + w <= capacity {
                weight += w;
                value += self.instance.value(item);
                selection.insert(item.get());
            }
        }
        log::debug!(
            "Greedy incumbent {:.3} with {} items",
            value,
            selection.count_ones(..)
        );
        self.set_incumbent(value, selection);
    }

    fn install_incumbent(&mut self, value: f64) {
        let mut selection = self
            .best_selection
            .take()
            .unwrap_or_else(|| FixedBitSet::with_capacity(self.instance.num_items()));
        selection.clear();
        for item in self.trail.items() {
            selection.insert(item.get());
        }
        log::debug!(
            "New incumbent {:.3} with {} items after {} nodes",
            value,
            self.trail.len(),
            self.explored_nodes
        );
        self.set_incumbent(value, selection);
    }

    #[inline]
    fn set_incumbent(&mut self, value: f64, selection: FixedBitSet) {
        self.best_objective = value;
        self.best_selection = Some(selection);
        self.solutions_found += 1;
        self.monitor.on_solution_found(value);
    }

    /// Sends a snapshot and returns the monitor's answer.
    fn report(&mut self, phase: SearchPhase, best_bound: f64) -> SearchCommand {
        let incumbent = self.best_selection.as_ref().map(|_| self.best_objective);
        let progress = SearchProgress::new(
            phase,
            self.start_time.elapsed().as_secs_f64(),
            incumbent,
            best_bound,
            self.solutions_found,
        )
        .with_explored_nodes(self.explored_nodes);

        self.progress_reports += 1;
        self.monitor.on_progress(&progress);
        self.monitor.search_command()
    }

    fn statistics(&self) -> SearchStatistics {
        SearchStatisticsBuilder::new()
            .explored_nodes(self.explored_nodes)
            .solutions_found(self.solutions_found)
            .progress_reports(self.progress_reports)
            .runtime(self.start_time.elapsed())
            .build()
    }

    /// Ends the search. `aborted` carries the stop reason and the bound at
    /// the time of the stop.
    fn finish(self, aborted: Option<(String, f64)>) -> KnapsackOutcome {
        let statistics = self.statistics();
        self.monitor.on_exit_search();

        let solution = self
            .best_selection
            .map(|selection| KnapsackSolution::from_bitset(self.instance, selection));

        let outcome = match (aborted, &solution) {
            (Some((reason, bound)), solution) => {
                log::debug!("Knapsack search aborted: {}", reason);
                SolveOutcome::aborted(
                    solution.as_ref().map(|s| s.objective()),
                    bound,
                    reason,
                    statistics,
                )
            }
            (None, Some(solution)) => SolveOutcome::optimal(solution.objective(), statistics),
            // Unreachable for valid instances: the greedy pass always
            // installs an incumbent before tree search.
            (None, None) => SolveOutcome::infeasible(statistics),
        };

        KnapsackOutcome { outcome, solution }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapwatch_search::{
        monitor::{
            gap_limit::GapLimitMonitor, interrupt::InterruptMonitor,
            solution_limit::SolutionLimitMonitor,
        },
        result::SolveStatus,
    };
    use std::sync::atomic::AtomicBool;

    /// A monitor that never stops and records what it was told.
    #[derive(Default)]
    struct Recorder {
        snapshots: Vec<SearchProgress<f64>>,
        solutions: Vec<f64>,
        entered: usize,
        exited: usize,
    }

    impl SearchMonitor<f64> for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }
        fn on_enter_search(&mut self) {
            self.entered += 1;
        }
        fn on_exit_search(&mut self) {
            self.exited += 1;
        }
        fn on_solution_found(&mut self, objective: f64) {
            self.solutions.push(objective);
        }
        fn on_progress(&mut self, progress: &SearchProgress<f64>) {
            self.snapshots.push(*progress);
        }
        fn search_command(&self) -> SearchCommand {
            SearchCommand::Continue
        }
    }

    fn brute_force(instance: &KnapsackInstance) -> f64 {
        let n = instance.num_items();
        (0u32..(1 << n))
            .filter_map(|mask| {
                let (v, w) = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .fold((0.0, 0.0), |(v, w), i| {
                        let item = ItemIndex::new(i);
                        (v + instance.value(item), w + instance.weight(item))
                    });
                (w <= instance.capacity()).then_some(v)
            })
            .fold(0.0, f64::max)
    }

    fn small_instance() -> KnapsackInstance {
        KnapsackInstance::new(
            vec![10.0, 5.0, 6.0, 2.0, 8.0],
            vec![5.0, 5.0, 2.0, 4.0, 6.0],
            12.0,
        )
        .unwrap()
    }

    #[test]
    fn test_small_instance_is_solved_to_optimality() {
        let instance = small_instance();
        let mut solver = KnapsackSolver::new(&instance).with_report_mask(0);
        let result = solver.solve(Recorder::default());

        assert!(result.outcome().is_optimal());
        let solution = result.solution().unwrap();
        assert_eq!(solution.objective(), brute_force(&instance));
        assert!(solution.is_feasible());
        assert_eq!(result.outcome().best_bound(), solution.objective());
        assert_eq!(solver.best_solution(), Some(solution));
    }

    #[test]
    fn test_matches_exhaustive_enumeration_on_random_instances() {
        for seed in 0..20 {
            let instance = KnapsackInstance::generate(12, seed).unwrap();
            let mut solver = KnapsackSolver::new(&instance);
            let result = solver.solve(Recorder::default());

            assert!(result.outcome().is_optimal(), "seed {}", seed);
            let objective = result.outcome().best_objective().unwrap();
            assert!(
                (objective - brute_force(&instance)).abs() < 1e-9,
                "seed {}: got {}, expected {}",
                seed,
                objective,
                brute_force(&instance)
            );
        }
    }

    #[test]
    fn test_monitoring_protocol() {
        let instance = KnapsackInstance::generate(30, 3).unwrap();
        let mut recorder = Recorder::default();
        let result = KnapsackSolver::new(&instance)
            .with_report_mask(0)
            .solve(&mut recorder);

        assert_eq!(recorder.entered, 1);
        assert_eq!(recorder.exited, 1);
        assert_eq!(recorder.snapshots[0].phase(), SearchPhase::RootRelaxation);
        assert_eq!(recorder.snapshots[0].solution_count(), 0);
        assert!(
            recorder.snapshots[1..]
                .iter()
                .all(|p| p.phase() == SearchPhase::NodeExploration)
        );

        for pair in recorder.snapshots.windows(2) {
            assert!(pair[0].elapsed_seconds() <= pair[1].elapsed_seconds());
            assert!(pair[0].explored_nodes() <= pair[1].explored_nodes());
            // The open bound only tightens.
            assert!(pair[1].best_bound() <= pair[0].best_bound() + 1e-9);
        }
        for progress in &recorder.snapshots[1..] {
            let incumbent = progress.incumbent().unwrap();
            assert!(progress.best_bound() >= incumbent - 1e-9);
        }
        assert!(recorder.solutions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            recorder.solutions.len() as u64,
            result.outcome().statistics().solutions_found
        );
        assert_eq!(
            recorder.snapshots.len() as u64,
            result.outcome().statistics().progress_reports
        );
    }

    #[test]
    fn test_interrupt_before_greedy_has_no_solution() {
        let instance = small_instance();
        let flag = AtomicBool::new(true);
        let result = KnapsackSolver::new(&instance).solve(InterruptMonitor::new(&flag));

        assert!(result.outcome().is_interrupted());
        assert_eq!(result.outcome().status(), SolveStatus::Unknown);
        assert!(result.solution().is_none());
        assert_eq!(result.outcome().statistics().progress_reports, 1);
    }

    #[test]
    fn test_solution_limit_stops_after_greedy() {
        let instance = KnapsackInstance::generate(40, 11).unwrap();
        let result = KnapsackSolver::new(&instance).solve(SolutionLimitMonitor::new(1));

        assert!(result.outcome().is_interrupted());
        assert_eq!(result.outcome().status(), SolveStatus::Feasible);
        assert_eq!(result.outcome().statistics().explored_nodes, 0);
        assert!(result.solution().unwrap().is_feasible());
    }

    #[test]
    fn test_gap_limit_accepts_greedy_within_target() {
        let instance = KnapsackInstance::generate(40, 5).unwrap();
        let result =
            KnapsackSolver::new(&instance).solve(GapLimitMonitor::new(1.0).unwrap());

        assert!(result.outcome().is_interrupted());
        assert!(result.outcome().final_gap().unwrap().is_within(1.0));
    }

    #[test]
    fn test_zero_capacity_yields_empty_optimal_selection() {
        let instance = KnapsackInstance::new(vec![3.0, 4.0], vec![1.0, 2.0], 0.0).unwrap();
        let result = KnapsackSolver::new(&instance).solve(Recorder::default());

        assert!(result.outcome().is_optimal());
        assert_eq!(result.solution().unwrap().num_selected(), 0);
        assert_eq!(result.outcome().best_objective(), Some(0.0));
    }

    #[test]
    fn test_solver_is_reusable() {
        let instance = KnapsackInstance::generate(20, 9).unwrap();
        let mut solver = KnapsackSolver::new(&instance);
        let first = solver.solve(Recorder::default());
        let second = solver.solve(Recorder::default());
        assert_eq!(
            first.outcome().best_objective(),
            second.outcome().best_objective()
        );
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn test_search_engine_trait_object() {
        let instance = small_instance();
        let mut solver = KnapsackSolver::new(&instance);
        let mut recorder = Recorder::default();
        let engine: &mut dyn SearchEngine<f64> = &mut solver;

        assert_eq!(engine.name(), "KnapsackSolver");
        let outcome = engine.optimize(&mut recorder);
        assert!(outcome.is_optimal());
        assert_eq!(recorder.entered, 1);
    }
}
