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

//! # Fractional Upper Bound
//!
//! The Dantzig bound of the 0/1 knapsack: with items sorted by value density
//! (value per unit of weight), fill the remaining capacity greedily and take
//! a fraction of the first item that no longer fits. This is the optimum of
//! the LP relaxation and therefore an upper bound for every completion of a
//! partial assignment.
//!
//! `DensityOrder` precomputes prefix sums over the sorted items, so a bound
//! for the suffix starting at some depth costs one binary search.

use crate::{index::ItemIndex, instance::KnapsackInstance};

#[derive(Debug, Clone, PartialEq)]
pub struct DensityOrder {
    order: Vec<ItemIndex>,
    /// `prefix_values[k]` is the value of the first `k` sorted items.
    prefix_values: Vec<f64>,
    /// `prefix_weights[k]` is the weight of the first `k` sorted items.
    prefix_weights: Vec<f64>,
    densities: Vec<f64>,
}

impl DensityOrder {
    /// Sorts the items of `instance` by decreasing density. Ties keep the
    /// original item order.
    pub fn new(instance: &KnapsackInstance) -> Self {
        let mut order: Vec<ItemIndex> = instance.items().collect();
        order.sort_by(|a, b| {
            instance
                .density(*b)
                .total_cmp(&instance.density(*a))
                .then(a.cmp(b))
        });

        let n = order.len();
        let mut prefix_values = Vec::with_capacity(n + 1);
        let mut prefix_weights = Vec::with_capacity(n + 1);
        prefix_values.push(0.0);
        prefix_weights.push(0.0);
        for (k, &item) in order.iter().enumerate() {
            prefix_values.push(prefix_values[k] + instance.value(item));
            prefix_weights.push(prefix_weights[k] + instance.weight(item));
        }
        let densities = order.iter().map(|&item| instance.density(item)).collect();

        Self {
            order,
            prefix_values,
            prefix_weights,
            densities,
        }
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The item at position `depth` of the sorted order.
    #[inline]
    pub fn item(&self, depth: usize) -> ItemIndex {
        self.order[depth]
    }

    #[inline]
    pub fn order(&self) -> &[ItemIndex] {
        &self.order
    }

    /// Upper bound for a node at `depth` whose fixed items are worth `value`
    /// and leave `remaining_capacity` free. Items at positions `depth..` are
    /// still open.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `depth > self.len()`.
    pub fn upper_bound(&self, depth: usize, value: f64, remaining_capacity: f64) -> f64 {
        debug_assert!(
            depth <= self.len(),
            "called `DensityOrder::upper_bound` with depth out of bounds: the len is {} but the depth is {}",
            self.len(),
            depth
        );

        let base_weight = self.prefix_weights[depth];
        let base_value = self.prefix_values[depth];

        // Number of prefix entries from `depth` on that still fit. The entry
        // at `depth` itself always fits, so `fitting >= 1`.
        let fitting = self.prefix_weights[depth..]
            .partition_point(|&w| w - base_weight <= remaining_capacity);
        let last_full = depth + fitting.max(1) - 1;

        let mut bound = value + (self.prefix_values[last_full] - base_value);
        if last_full < self.len() {
            let leftover = remaining_capacity - (self.prefix_weights[last_full] - base_weight);
            bound += leftover.max(0.0) * self.densities[last_full];
        }
        bound
    }
}
