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

//! # Near-Zero Tolerances
//!
//! Objective values reported by a search engine are floats, and relative
//! quantities such as the optimality gap divide by them. Dividing by a value
//! that is zero up to round-off produces enormous or `NaN` ratios, so callers
//! first ask whether a value is *effectively* zero.
//!
//! The tolerance is an associated constant per float type, implemented by a
//! macro for `f32` and `f64`.
//!
//! ```rust
//! use gapwatch_core::num::tolerance::NearZero;
//!
//! assert!(1e-12_f64.is_effectively_zero());
//! assert!(!1e-9_f64.is_effectively_zero());
//! ```

use num_traits::Float;

/// Float types carrying an absolute tolerance below which a magnitude is
/// treated as zero.
pub trait NearZero: Float {
    /// Magnitudes strictly below this value count as zero.
    const ZERO_TOLERANCE: Self;

    /// Returns `true` if `|self| < ZERO_TOLERANCE`.
    ///
    /// `NaN` is never effectively zero.
    #[inline(always)]
    fn is_effectively_zero(self) -> bool {
        self.abs() < Self::ZERO_TOLERANCE
    }
}

macro_rules! impl_near_zero_for {
    ($t:ty, $tol:expr) => {
        impl NearZero for $t {
            const ZERO_TOLERANCE: Self = $tol;
        }
    };
}

impl_near_zero_for!(f64, 1e-10);
impl_near_zero_for!(f32, 1e-10);
