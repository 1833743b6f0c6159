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

//! # Knapsack Instances
//!
//! A 0/1 knapsack instance: item values, item weights and a capacity.
//! Instances are validated on construction, so the solver can rely on
//! strictly positive, finite values and weights.
//!
//! `KnapsackInstance::generate` draws a reproducible random instance: values
//! uniform in `[1, 25)`, weights uniform in `[5, 100)` and a capacity of 70%
//! of the total weight. The same seed always yields the same instance.
//!
//! ```rust
//! use gapwatch_knapsack::instance::KnapsackInstance;
//!
//! let a = KnapsackInstance::generate(50, 42).unwrap();
//! let b = KnapsackInstance::generate(50, 42).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.num_items(), 50);
//! ```

use crate::{error::InstanceError, index::ItemIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackInstance {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
}

impl KnapsackInstance {
    /// Item values are drawn from this range by `generate`.
    pub const VALUE_RANGE: Range<f64> = 1.0..25.0;
    /// Item weights are drawn from this range by `generate`.
    pub const WEIGHT_RANGE: Range<f64> = 5.0..100.0;
    /// Fraction of the total weight that fits into a generated knapsack.
    pub const CAPACITY_RATIO: f64 = 0.7;

    /// Creates a validated instance.
    ///
    /// # Errors
    ///
    /// Returns an `InstanceError` if the instance is empty, the lengths of
    /// `values` and `weights` differ, any value or weight is not finite and
    /// strictly positive, or the capacity is negative or not finite.
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self, InstanceError> {
        if values.len() != weights.len() {
            return Err(InstanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if values.is_empty() {
            return Err(InstanceError::Empty);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(v.is_finite() && **v > 0.0))
        {
            return Err(InstanceError::InvalidValue { index, value });
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(InstanceError::InvalidWeight { index, weight });
        }
        if !(capacity.is_finite() && capacity >= 0.0) {
            return Err(InstanceError::InvalidCapacity(capacity));
        }

        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Generates a random instance with `num_items` items from `seed`.
    ///
    /// # Errors
    ///
    /// Returns `InstanceError::Empty` if `num_items` is zero.
    pub fn generate(num_items: usize, seed: u64) -> Result<Self, InstanceError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate_with_rng(num_items, &mut rng)
    }

    /// Generates a random instance drawing from `rng`.
    pub fn generate_with_rng<R>(num_items: usize, rng: &mut R) -> Result<Self, InstanceError>
    where
        R: Rng,
    {
        let values: Vec<f64> = (0..num_items)
            .map(|_| rng.random_range(Self::VALUE_RANGE))
            .collect();
        let weights: Vec<f64> = (0..num_items)
            .map(|_| rng.random_range(Self::WEIGHT_RANGE))
            .collect();
        let capacity = Self::CAPACITY_RATIO * weights.iter().sum::<f64>();

        log::debug!(
            "Generated knapsack instance with {} items and capacity {:.3}",
            num_items,
            capacity
        );

        Self::new(values, weights, capacity)
    }

    #[inline]
    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the value of `item`.
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of bounds.
    #[inline]
    pub fn value(&self, item: ItemIndex) -> f64 {
        self.values[item.get()]
    }

    /// Returns the weight of `item`.
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of bounds.
    #[inline]
    pub fn weight(&self, item: ItemIndex) -> f64 {
        self.weights[item.get()]
    }

    /// Value per unit of weight.
    #[inline]
    pub fn density(&self, item: ItemIndex) -> f64 {
        self.value(item) / self.weight(item)
    }

    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    #[inline]
    pub fn items(&self) -> impl Iterator<Item = ItemIndex> + use<> {
        (0..self.num_items()).map(ItemIndex::new)
    }
}

impl std::fmt::Display for KnapsackInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KnapsackInstance(items: {}, capacity: {:.3}, total weight: {:.3})",
            self.num_items(),
            self.capacity,
            self.total_weight()
        )
    }
}
