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

//! # Search Engines
//!
//! `SearchEngine<T>` is the seam to whatever actually runs the
//! branch-and-bound search. The engine owns the loop; it calls the monitor
//! synchronously, never concurrently, and stops promptly once
//! `search_command` answers `Terminate`. After that it must not report
//! progress again for the same search.
//!
//! A conforming engine drives the monitor in this order:
//!
//! 1. `on_enter_search` once.
//! 2. Any number of `on_progress` / `on_solution_found` calls, each
//!    `on_progress` followed by a `search_command` check.
//! 3. `on_exit_search` once, also after a monitor-requested stop.

use crate::{monitor::search_monitor::SearchMonitor, num::SolverFloat, result::SolveOutcome};

/// An optimization engine that can be observed and stopped by a monitor.
pub trait SearchEngine<T>
where
    T: SolverFloat,
{
    /// Returns the name of the engine.
    fn name(&self) -> &str;

    /// Runs the search to completion or until the monitor requests
    /// termination.
    fn optimize(&mut self, monitor: &mut dyn SearchMonitor<T>) -> SolveOutcome<T>;
}

impl<T> std::fmt::Debug for dyn SearchEngine<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchEngine({})", self.name())
    }
}
