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

//! # Search Monitors
//!
//! Observers and controllers for a running search. Engines report progress
//! to a monitor; the monitor answers with a `SearchCommand`.
//!
//! ## Submodules
//!
//! - `search_monitor`: the `SearchMonitor<T>` trait and `SearchCommand`.
//! - `stagnation`: stops the search once the optimality gap has not moved
//!   by more than an epsilon for a configured number of seconds.
//! - `composite`: fan-out to several monitors; first `Terminate` wins.
//! - `index`: typed indices for addressing monitors inside a composite.
//! - `gap_limit`: stops once the gap is within a target.
//! - `time_limit`: stops once engine time exceeds a budget.
//! - `solution_limit`: stops after a number of feasible solutions.
//! - `interrupt`: stops when a shared atomic flag is raised.
//! - `log`: periodic progress rows through the `log` facade.
//!
//! Monitors never veto each other: composing adds stop reasons, it never
//! removes one.

pub mod composite;
pub mod gap_limit;
pub mod index;
pub mod interrupt;
pub mod log;
pub mod search_monitor;
pub mod solution_limit;
pub mod stagnation;
pub mod time_limit;
