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

//! # Solver Float Trait
//!
//! `SolverFloat` bundles the bounds every objective type in this crate must
//! satisfy: float arithmetic from `num_traits`, the near-zero tolerance from
//! `gapwatch_core`, a lossless-enough cast to `f64` for thresholds and
//! reporting, and `Send + Sync` so monitors can live on worker threads.
//!
//! `f32` and `f64` both qualify.

use gapwatch_core::num::tolerance::NearZero;
use num_traits::{AsPrimitive, Float};

/// A trait alias for objective value types.
pub trait SolverFloat:
    Float + NearZero + AsPrimitive<f64> + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> SolverFloat for T where
    T: Float
        + NearZero
        + AsPrimitive<f64>
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}
