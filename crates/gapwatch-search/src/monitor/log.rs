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

//! # Progress Log Monitor
//!
//! Writes a progress table through the `log` facade: a header when the
//! search starts, one row per `log_interval` of engine time and a closing
//! line when the search ends. It never requests termination.
//!
//! ```text
//! Elapsed   | Phase            | Nodes        | Sols   | Incumbent      | Bound          | Gap
//! ------------------------------------------------------------------------------------------------
//! 0.0s      | RootRelaxation   | 0            | 0      | -              | 1254.372       | -
//! 1.0s      | NodeExploration  | 1048576      | 14     | 1251           | 1253.908       | 0.23%
//! ```

use crate::{
    gap::OptimalityGap,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverFloat,
    progress::SearchProgress,
};
use std::time::Duration;

const RULE_WIDTH: usize = 96;

#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    log_interval: Duration,
    last_logged_elapsed: Option<f64>,
    best_objective: Option<T>,
    rows_logged: u64,
}

impl<T> LogMonitor<T>
where
    T: SolverFloat,
{
    pub fn new(log_interval: Duration) -> Self {
        Self {
            log_interval,
            last_logged_elapsed: None,
            best_objective: None,
            rows_logged: 0,
        }
    }

    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    /// Number of progress rows written during the current search.
    #[inline]
    pub fn rows_logged(&self) -> u64 {
        self.rows_logged
    }

    /// Best objective announced through `on_solution_found`.
    #[inline]
    pub fn best_objective(&self) -> Option<T> {
        self.best_objective
    }

    #[inline]
    fn is_due(&self, elapsed_seconds: f64) -> bool {
        match self.last_logged_elapsed {
            None => true,
            Some(last) => elapsed_seconds - last >= self.log_interval.as_secs_f64(),
        }
    }

    fn log_header(&self) {
        log::info!(
            "{:<9} | {:<16} | {:<12} | {:<6} | {:<14} | {:<14} | {:<8}",
            "Elapsed",
            "Phase",
            "Nodes",
            "Sols",
            "Incumbent",
            "Bound",
            "Gap"
        );
        log::info!("{}", "-".repeat(RULE_WIDTH));
    }

    fn log_row(&mut self, progress: &SearchProgress<T>) {
        let incumbent = progress
            .incumbent()
            .or(self.best_objective)
            .map_or_else(|| "-".to_string(), |v| format!("{}", v));
        let gap = progress
            .relative_gap()
            .map_or_else(|| "-".to_string(), |g| OptimalityGap::new(g.as_()).to_string());
        let elapsed = format!("{:.1}s", progress.elapsed_seconds());

        log::info!(
            "{:<9} | {:<16} | {:<12} | {:<6} | {:<14} | {:<14.3} | {:<8}",
            elapsed,
            progress.phase(),
            progress.explored_nodes(),
            progress.solution_count(),
            incumbent,
            progress.best_bound(),
            gap
        );

        self.last_logged_elapsed = Some(progress.elapsed_seconds());
        self.rows_logged += 1;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {:.3}s)",
            self.log_interval.as_secs_f64()
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self) {
        self.last_logged_elapsed = None;
        self.best_objective = None;
        self.rows_logged = 0;
        self.log_header();
    }

    fn on_exit_search(&mut self) {
        log::info!("{}", "-".repeat(RULE_WIDTH));
        log::info!("Search finished after {} progress rows.", self.rows_logged);
    }

    fn on_solution_found(&mut self, objective: T) {
        self.best_objective = Some(objective);
    }

    fn on_progress(&mut self, progress: &SearchProgress<T>) {
        if self.is_due(progress.elapsed_seconds()) {
            self.log_row(progress);
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
