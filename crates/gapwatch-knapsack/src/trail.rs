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

//! Undo log for the depth-first search.
//!
//! Each entry records an item taken at some depth together with the value
//! and weight of the partial selection *after* taking it. Backtracking
//! truncates the log, so the current value and weight are restored exactly
//! instead of being recomputed by subtraction.

use crate::index::ItemIndex;

#[derive(Debug, Copy, Clone, PartialEq)]
struct TrailEntry {
    depth: usize,
    item: ItemIndex,
    value: f64,
    weight: f64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SearchTrail {
    entries: Vec<TrailEntry>,
}

impl SearchTrail {
    #[inline]
    pub(crate) fn preallocated(num_items: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_items),
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Value of the items currently taken.
    #[inline]
    pub(crate) fn value(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.value)
    }

    /// Weight of the items currently taken.
    #[inline]
    pub(crate) fn weight(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.weight)
    }

    /// Records that `item` was taken at `depth`.
    #[inline]
    pub(crate) fn take(&mut self, depth: usize, item: ItemIndex, value: f64, weight: f64) {
        debug_assert!(
            self.entries.last().is_none_or(|e| e.depth < depth),
            "called `SearchTrail::take` with non-increasing depth {}",
            depth
        );
        let entry = TrailEntry {
            depth,
            item,
            value: self.value() + value,
            weight: self.weight() + weight,
        };
        self.entries.push(entry);
    }

    /// Undoes every decision made at `depth` or deeper.
    #[inline]
    pub(crate) fn backtrack_to(&mut self, depth: usize) {
        let keep = self.entries.partition_point(|e| e.depth < depth);
        self.entries.truncate(keep);
    }

    /// Items currently taken, in the order they were taken.
    #[inline]
    pub(crate) fn items(&self) -> impl Iterator<Item = ItemIndex> + '_ {
        self.entries.iter().map(|e| e.item)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_accumulates_value_and_weight() {
        let mut trail = SearchTrail::preallocated(4);
        trail.take(0, ItemIndex::new(3), 5.0, 2.0);
        trail.take(2, ItemIndex::new(1), 1.5, 4.0);
        assert_eq!(trail.value(), 6.5);
        assert_eq!(trail.weight(), 6.0);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_backtrack_restores_exact_state() {
        let mut trail = SearchTrail::default();
        trail.take(0, ItemIndex::new(0), 0.1, 0.2);
        trail.take(1, ItemIndex::new(1), 0.7, 0.3);
        trail.take(3, ItemIndex::new(2), 9.0, 9.0);

        trail.backtrack_to(2);
        assert_eq!(trail.value(), 0.1 + 0.7);
        let items: Vec<usize> = trail.items().map(|i| i.get()).collect();
        assert_eq!(items, vec![0, 1]);

        trail.backtrack_to(0);
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.value(), 0.0);
        assert_eq!(trail.weight(), 0.0);
    }

    #[test]
    fn test_clear_empties_trail() {
        let mut trail = SearchTrail::default();
        trail.take(0, ItemIndex::new(0), 1.0, 1.0);
        trail.clear();
        assert_eq!(trail.len(), 0);
    }
}
