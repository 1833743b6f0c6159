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

use crate::{index::ItemIndex, instance::KnapsackInstance};
use fixedbitset::FixedBitSet;

/// A feasible selection of items together with its objective and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution {
    selected: FixedBitSet,
    objective: f64,
    total_weight: f64,
    capacity: f64,
}

impl KnapsackSolution {
    /// Builds a solution from the selected items of `instance`.
    ///
    /// # Panics
    ///
    /// Panics if an item is out of bounds.
    pub fn from_items<I>(instance: &KnapsackInstance, items: I) -> Self
    where
        I: IntoIterator<Item = ItemIndex>,
    {
        let mut selected = FixedBitSet::with_capacity(instance.num_items());
        for item in items {
            selected.insert(item.get());
        }
        Self::from_bitset(instance, selected)
    }

    /// Builds a solution from a bit set indexed by `ItemIndex`.
    pub fn from_bitset(instance: &KnapsackInstance, selected: FixedBitSet) -> Self {
        let (objective, total_weight) = selected.ones().fold((0.0, 0.0), |(v, w), i| {
            let item = ItemIndex::new(i);
            (v + instance.value(item), w + instance.weight(item))
        });
        Self {
            selected,
            objective,
            total_weight,
            capacity: instance.capacity(),
        }
    }

    /// The empty selection. Always feasible.
    pub fn empty(instance: &KnapsackInstance) -> Self {
        Self::from_bitset(instance, FixedBitSet::with_capacity(instance.num_items()))
    }

    #[inline]
    pub fn objective(&self) -> f64 {
        self.objective
    }

    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Share of the capacity in use, `0` for a zero-capacity knapsack.
    #[inline]
    pub fn utilisation(&self) -> f64 {
        if self.capacity > 0.0 {
            self.total_weight / self.capacity
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_selected(&self, item: ItemIndex) -> bool {
        self.selected.contains(item.get())
    }

    #[inline]
    pub fn num_selected(&self) -> usize {
        self.selected.count_ones(..)
    }

    /// Selected items in increasing index order.
    #[inline]
    pub fn selected_items(&self) -> impl Iterator<Item = ItemIndex> + '_ {
        self.selected.ones().map(ItemIndex::new)
    }

    /// Returns `true` if the selection fits into the capacity.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.total_weight <= self.capacity * (1.0 + 1e-12)
    }
}

impl std::fmt::Display for KnapsackSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KnapsackSolution(objective: {:.3}, items: {}, weight: {:.3}/{:.3})",
            self.objective,
            self.num_selected(),
            self.total_weight,
            self.capacity
        )
    }
}
