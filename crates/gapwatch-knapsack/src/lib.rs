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

//! # Gapwatch Knapsack
//!
//! A monitored 0/1 knapsack engine used to exercise the search monitors of
//! `gapwatch_search` on a real branch-and-bound tree.
//!
//! - `instance`: validated instances and a seeded random generator.
//! - `bound`: density ordering and the fractional upper bound.
//! - `solution`: the selected items of a solution.
//! - `solver`: the depth-first branch-and-bound engine, implementing
//!   `SearchEngine<f64>`.
//!
//! ```rust
//! use gapwatch_knapsack::{instance::KnapsackInstance, solver::KnapsackSolver};
//! use gapwatch_search::monitor::stagnation::GapStagnationMonitor;
//!
//! let instance = KnapsackInstance::generate(25, 1).unwrap();
//! let mut solver = KnapsackSolver::new(&instance);
//! let result = solver.solve(GapStagnationMonitor::<f64>::default());
//! assert!(result.solution().unwrap().is_feasible());
//! ```

pub mod bound;
pub mod error;
pub mod index;
pub mod instance;
pub mod solution;
pub mod solver;
mod trail;
