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

//! Errors raised while building a knapsack instance.

/// The error type for malformed knapsack instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceError {
    /// The instance has no items.
    Empty,
    /// `values` and `weights` have different lengths.
    LengthMismatch { values: usize, weights: usize },
    /// An item value is not a finite, strictly positive number.
    InvalidValue { index: usize, value: f64 },
    /// An item weight is not a finite, strictly positive number.
    InvalidWeight { index: usize, weight: f64 },
    /// The capacity is negative or not finite.
    InvalidCapacity(f64),
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Knapsack instance must contain at least one item"),
            Self::LengthMismatch { values, weights } => write!(
                f,
                "Number of values ({}) does not match number of weights ({})",
                values, weights
            ),
            Self::InvalidValue { index, value } => write!(
                f,
                "Value of item {} must be finite and positive, got {}",
                index, value
            ),
            Self::InvalidWeight { index, weight } => write!(
                f,
                "Weight of item {} must be finite and positive, got {}",
                index, weight
            ),
            Self::InvalidCapacity(capacity) => write!(
                f,
                "Capacity must be finite and non-negative, got {}",
                capacity
            ),
        }
    }
}

impl std::error::Error for InstanceError {}

#[cfg(test)]
mod tests {
    use super::InstanceError;

    #[test]
    fn test_display_names_offending_item() {
        let err = InstanceError::InvalidWeight {
            index: 3,
            weight: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Weight of item 3 must be finite and positive, got -1"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(InstanceError::Empty);
        assert!(err.to_string().contains("at least one item"));
    }
}
