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

//! # Relative Optimality Gap
//!
//! The gap measures how far the best proven bound is from the incumbent,
//! relative to the incumbent:
//!
//! ```text
//! gap = |best_bound - incumbent| / |incumbent|
//! ```
//!
//! When the incumbent is effectively zero (see
//! `gapwatch_core::num::tolerance::NearZero`) the ratio is meaningless, so it
//! is normalized instead of computed: the gap is `0` if the bound is also
//! effectively zero and `+inf` otherwise. This function never returns `NaN`
//! for finite inputs.
//!
//! ```rust
//! use gapwatch_search::gap::relative_gap;
//!
//! assert_eq!(relative_gap(100.0_f64, 105.0), 0.05);
//! assert_eq!(relative_gap(1e-12_f64, 0.0), 0.0);
//! assert!(relative_gap(1e-12_f64, 5.0).is_infinite());
//! ```

use crate::num::SolverFloat;

/// Computes the relative optimality gap between `incumbent` and `best_bound`.
#[inline]
pub fn relative_gap<T>(incumbent: T, best_bound: T) -> T
where
    T: SolverFloat,
{
    if incumbent.is_effectively_zero() {
        if best_bound.is_effectively_zero() {
            T::zero()
        } else {
            T::infinity()
        }
    } else {
        (best_bound - incumbent).abs() / incumbent.abs()
    }
}

/// A gap value that displays as a percentage with two decimals.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct OptimalityGap(f64);

impl OptimalityGap {
    /// Wraps a raw (fractional) gap value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Computes the gap from an incumbent and a bound.
    #[inline]
    pub fn between<T>(incumbent: T, best_bound: T) -> Self
    where
        T: SolverFloat,
    {
        Self(relative_gap(incumbent, best_bound).as_())
    }

    /// Returns the fractional value (`0.05` for 5%).
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the gap is at most `tolerance`.
    #[inline]
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.0 <= tolerance
    }
}

impl std::fmt::Display for OptimalityGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{:.2}%", self.0 * 100.0)
        }
    }
}
