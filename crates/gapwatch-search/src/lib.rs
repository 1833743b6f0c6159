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

//! # Gapwatch Search
//!
//! The boundary between a branch-and-bound engine and the observers that
//! watch it. An engine reports `SearchProgress` snapshots at its own pace;
//! monitors digest them and answer with a `SearchCommand`.
//!
//! ## Modules
//!
//! - `progress`: the per-callback snapshot (`SearchProgress<T>`, `SearchPhase`).
//! - `gap`: relative optimality gap with the near-zero normalization.
//! - `monitor`: the `SearchMonitor<T>` trait and its implementations, most
//!   notably the gap-stagnation monitor that stops a search whose gap has
//!   stopped moving.
//! - `engine`: the `SearchEngine<T>` trait engines implement.
//! - `result` / `stats`: what an engine hands back when it stops.
//! - `error`: configuration and progress-contract errors.
//! - `num`: the `SolverFloat` bound used across the crate.

pub mod engine;
pub mod error;
pub mod gap;
pub mod monitor;
pub mod num;
pub mod progress;
pub mod result;
pub mod stats;
