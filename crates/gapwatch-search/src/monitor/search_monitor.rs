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

use crate::{num::SolverFloat, progress::SearchProgress};

/// The answer a monitor gives when the engine asks whether to go on.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl SearchCommand {
    /// Returns `true` for `Terminate`.
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, SearchCommand::Terminate(_))
    }
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Observes a search and decides whether it should continue.
///
/// Callbacks take `&mut self` and run on the engine's thread between
/// nodes; keep them short and non-blocking.
pub trait SearchMonitor<T>
where
    T: SolverFloat,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first progress report of a search.
    fn on_enter_search(&mut self);
    /// Called once after the search stopped, for whatever reason.
    fn on_exit_search(&mut self);
    /// Called when the engine installs an improving incumbent.
    fn on_solution_found(&mut self, objective: T);
    /// Called with every progress snapshot.
    fn on_progress(&mut self, progress: &SearchProgress<T>);
    /// Called after each progress report to decide what happens next.
    fn search_command(&self) -> SearchCommand;
}

impl<T, M> SearchMonitor<T> for &mut M
where
    T: SolverFloat,
    M: SearchMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self) {
        (**self).on_enter_search();
    }

    fn on_exit_search(&mut self) {
        (**self).on_exit_search();
    }

    fn on_solution_found(&mut self, objective: T) {
        (**self).on_solution_found(objective);
    }

    fn on_progress(&mut self, progress: &SearchProgress<T>) {
        (**self).on_progress(progress);
    }

    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
