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

//! # Gap Limit Monitor
//!
//! The classic fixed-tolerance stopping rule: terminate as soon as a
//! node-exploration snapshot with an incumbent reports a relative gap at or
//! below a target. This is what engines call `MIPGap`; the default target of
//! `1e-4` matches the usual engine default.
//!
//! Snapshots from other phases and snapshots without an incumbent are
//! ignored, the same acceptance rule the stagnation monitor applies.

use crate::{
    error::{ConfigError, non_negative_finite},
    gap::OptimalityGap,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverFloat,
    progress::SearchProgress,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GapLimitMonitor<T> {
    target: f64,
    reached: Option<OptimalityGap>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> GapLimitMonitor<T> {
    pub const DEFAULT_TARGET: f64 = 1e-4;

    /// Creates a monitor that stops once the gap is at most `target`
    /// (a fraction, `0.01` for one percent).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGapTarget` for negative or non-finite
    /// targets.
    #[inline]
    pub fn new(target: f64) -> Result<Self, ConfigError> {
        let target = non_negative_finite(target).map_err(ConfigError::InvalidGapTarget)?;
        Ok(Self {
            target,
            reached: None,
            _phantom: std::marker::PhantomData,
        })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The gap that satisfied the target, if any.
    #[inline]
    pub fn reached_gap(&self) -> Option<OptimalityGap> {
        self.reached
    }
}

impl<T> Default for GapLimitMonitor<T> {
    fn default() -> Self {
        Self {
            target: Self::DEFAULT_TARGET,
            reached: None,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for GapLimitMonitor<T>
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "GapLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.reached = None;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _objective: T) {}

    fn on_progress(&mut self, progress: &SearchProgress<T>) {
        if self.reached.is_some() || !progress.is_node_exploration() {
            return;
        }
        if let Some(gap) = progress.relative_gap() {
            let gap = OptimalityGap::new(gap.as_());
            if gap.is_within(self.target) {
                self.reached = Some(gap);
            }
        }
    }

    fn search_command(&self) -> SearchCommand {
        match self.reached {
            Some(gap) => SearchCommand::Terminate(format!(
                "optimality gap {} within target {}",
                gap,
                OptimalityGap::new(self.target)
            )),
            None => SearchCommand::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SearchPhase;

    #[test]
    fn test_rejects_invalid_target() {
        assert_eq!(
            GapLimitMonitor::<f64>::new(-0.5),
            Err(ConfigError::InvalidGapTarget(-0.5))
        );
        assert!(GapLimitMonitor::<f64>::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default_target() {
        assert_eq!(GapLimitMonitor::<f64>::default().target(), 1e-4);
    }

    #[test]
    fn test_terminates_once_gap_within_target() {
        let mut monitor = GapLimitMonitor::<f64>::new(0.05).unwrap();
        monitor.on_enter_search();

        monitor.on_progress(&SearchProgress::node_exploration(1.0, Some(100.0), 110.0, 1));
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_progress(&SearchProgress::node_exploration(2.0, Some(100.0), 105.0, 2));
        match monitor.search_command() {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "optimality gap 5.00% within target 5.00%");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_ignores_snapshots_without_incumbent_or_outside_tree_search() {
        let mut monitor = GapLimitMonitor::<f64>::new(0.5).unwrap();
        monitor.on_progress(&SearchProgress::node_exploration(1.0, Some(100.0), 100.0, 0));
        monitor.on_progress(&SearchProgress::new(
            SearchPhase::RootRelaxation,
            1.0,
            Some(100.0),
            100.0,
            1,
        ));
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_infinite_gap_never_satisfies_target() {
        let mut monitor = GapLimitMonitor::<f64>::new(1e6).unwrap();
        monitor.on_progress(&SearchProgress::node_exploration(1.0, Some(0.0), 3.0, 1));
        assert!(monitor.reached_gap().is_none());
    }

    #[test]
    fn test_enter_search_clears_reached_gap() {
        let mut monitor = GapLimitMonitor::<f64>::new(0.1).unwrap();
        monitor.on_progress(&SearchProgress::node_exploration(1.0, Some(10.0), 10.0, 1));
        assert!(monitor.search_command().is_terminate());
        monitor.on_enter_search();
        assert!(!monitor.search_command().is_terminate());
    }
}
