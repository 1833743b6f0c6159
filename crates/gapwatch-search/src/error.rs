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

//! Error types for monitor configuration and for engines that break the
//! progress-reporting contract.

/// The error type for invalid monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The gap change epsilon must be finite and non-negative.
    InvalidGapChangeEpsilon(f64),
    /// The stagnation limit (seconds) must be finite and non-negative.
    InvalidStagnationLimit(f64),
    /// A target gap must be finite and non-negative.
    InvalidGapTarget(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGapChangeEpsilon(v) => write!(
                f,
                "Gap change epsilon must be finite and non-negative, got {}",
                v
            ),
            Self::InvalidStagnationLimit(v) => write!(
                f,
                "Stagnation limit must be a finite, non-negative number of seconds, got {}",
                v
            ),
            Self::InvalidGapTarget(v) => {
                write!(f, "Target gap must be finite and non-negative, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A progress report that a monitor refused because the engine violated the
/// reporting contract. The monitor state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressError {
    /// The monitor already requested termination for this search.
    AlreadyStopped,
    /// `elapsed_seconds` went backwards between two accepted reports.
    NonMonotonicTime { previous: f64, current: f64 },
    /// `elapsed_seconds` was negative or not finite.
    InvalidElapsed(f64),
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyStopped => {
                write!(f, "Progress reported after termination was requested")
            }
            Self::NonMonotonicTime { previous, current } => write!(
                f,
                "Elapsed time went backwards from {:.3}s to {:.3}s",
                previous, current
            ),
            Self::InvalidElapsed(v) => {
                write!(f, "Elapsed time must be finite and non-negative, got {}", v)
            }
        }
    }
}

impl std::error::Error for ProgressError {}

/// Returns `Ok(value)` if `value` is finite and non-negative.
#[inline]
pub(crate) fn non_negative_finite(value: f64) -> Result<f64, f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(value)
    }
}
