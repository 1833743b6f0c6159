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

//! # Time Limit Monitor
//!
//! Enforces a time budget measured on the engine's own clock: the
//! `elapsed_seconds` of the progress snapshots, the same time the
//! stagnation rule reads. No wall clock is consulted.
//!
//! Every snapshot counts regardless of phase, so a search stuck in presolve
//! is stopped as well.
//!
//! ```rust
//! use gapwatch_search::monitor::time_limit::TimeLimitMonitor;
//! use gapwatch_search::monitor::search_monitor::SearchMonitor;
//! use gapwatch_search::progress::SearchProgress;
//! use std::time::Duration;
//!
//! let mut monitor = TimeLimitMonitor::<f64>::new(Duration::from_secs(5));
//! monitor.on_progress(&SearchProgress::node_exploration(5.0, None, 10.0, 0));
//! assert!(monitor.search_command().is_terminate());
//! ```

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverFloat,
    progress::SearchProgress,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeLimitMonitor<T> {
    time_limit: std::time::Duration,
    latest_elapsed_seconds: f64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            time_limit,
            latest_elapsed_seconds: 0.0,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> std::time::Duration {
        self.time_limit
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.latest_elapsed_seconds >= self.time_limit.as_secs_f64()
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.latest_elapsed_seconds = 0.0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _objective: T) {}

    #[inline(always)]
    fn on_progress(&mut self, progress: &SearchProgress<T>) {
        // NaN never compares greater, so a malformed time is skipped.
        if progress.elapsed_seconds() > self.latest_elapsed_seconds {
            self.latest_elapsed_seconds = progress.elapsed_seconds();
        }
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
