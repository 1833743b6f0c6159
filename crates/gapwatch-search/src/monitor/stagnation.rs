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

//! # Gap Stagnation Monitor
//!
//! Stops a branch-and-bound search once its relative optimality gap has not
//! changed by more than `gap_change_epsilon` for longer than
//! `stagnation_limit_seconds`.
//!
//! ## How a report is processed
//!
//! Only node-exploration snapshots with at least one feasible solution are
//! considered; everything else leaves the state untouched. For an accepted
//! snapshot:
//!
//! 1. The relative gap is computed with `gap::relative_gap` (near-zero
//!    incumbents normalize to `0` or `+inf`).
//! 2. If `|gap - last_gap| > gap_change_epsilon`, the gap and the time of
//!    the change are recorded. A fresh state starts from `last_gap = +inf`
//!    and `last_gap_change_time = -inf`, so any finite first gap counts as a
//!    change.
//! 3. If `elapsed - last_gap_change_time > stagnation_limit_seconds`, the
//!    monitor enters its terminal `Stopped` phase and asks for termination.
//!
//! Two consecutive infinite gaps compare as unchanged (`inf - inf` is `NaN`,
//! which is never greater than epsilon). A run whose first accepted gap is
//! infinite therefore has unbounded stagnation and stops on that report.
//!
//! ## Two layers
//!
//! - `StagnationState::on_progress` is a pure state transition:
//!   `(state, config, snapshot) -> (state', verdict)`. It never logs and
//!   never panics; contract violations by the engine come back as
//!   `ProgressError` with the state unchanged.
//! - `GapStagnationMonitor<T>` owns a state and a config, implements
//!   `SearchMonitor<T>`, logs the stop notice and turns the verdict into a
//!   `SearchCommand`.
//!
//! ## Usage
//!
//! ```rust
//! use gapwatch_search::monitor::stagnation::{GapStagnationMonitor, StagnationConfig};
//! use gapwatch_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use gapwatch_search::progress::SearchProgress;
//!
//! let config = StagnationConfig::builder()
//!     .gap_change_epsilon(1e-4)
//!     .stagnation_limit_seconds(15.0)
//!     .build()
//!     .unwrap();
//! let mut monitor = GapStagnationMonitor::<f64>::new(config);
//!
//! monitor.on_enter_search();
//! monitor.on_progress(&SearchProgress::node_exploration(0.0, Some(100.0), 110.0, 1));
//! assert_eq!(monitor.search_command(), SearchCommand::Continue);
//!
//! monitor.on_progress(&SearchProgress::node_exploration(16.0, Some(100.0), 110.0, 1));
//! assert!(monitor.search_command().is_terminate());
//! ```

use crate::{
    error::{ConfigError, ProgressError, non_negative_finite},
    gap::OptimalityGap,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverFloat,
    progress::SearchProgress,
};

/// Thresholds for the stagnation rule. Fixed for the lifetime of a monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationConfig {
    gap_change_epsilon: f64,
    stagnation_limit_seconds: f64,
}

impl StagnationConfig {
    /// Gap deltas at or below this value are not considered a change.
    pub const DEFAULT_GAP_CHANGE_EPSILON: f64 = 1e-4;
    /// Seconds without a significant gap change before stopping.
    pub const DEFAULT_STAGNATION_LIMIT_SECONDS: f64 = 15.0;

    /// Creates a validated configuration.
    #[inline]
    pub fn new(gap_change_epsilon: f64, stagnation_limit_seconds: f64) -> Result<Self, ConfigError> {
        let gap_change_epsilon = non_negative_finite(gap_change_epsilon)
            .map_err(ConfigError::InvalidGapChangeEpsilon)?;
        let stagnation_limit_seconds = non_negative_finite(stagnation_limit_seconds)
            .map_err(ConfigError::InvalidStagnationLimit)?;

        Ok(Self {
            gap_change_epsilon,
            stagnation_limit_seconds,
        })
    }

    /// Returns a builder starting from the defaults.
    #[inline]
    pub fn builder() -> StagnationConfigBuilder {
        StagnationConfigBuilder::new()
    }

    #[inline]
    pub fn gap_change_epsilon(&self) -> f64 {
        self.gap_change_epsilon
    }

    #[inline]
    pub fn stagnation_limit_seconds(&self) -> f64 {
        self.stagnation_limit_seconds
    }
}

impl Default for StagnationConfig {
    fn default() -> Self {
        Self {
            gap_change_epsilon: Self::DEFAULT_GAP_CHANGE_EPSILON,
            stagnation_limit_seconds: Self::DEFAULT_STAGNATION_LIMIT_SECONDS,
        }
    }
}

impl std::fmt::Display for StagnationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StagnationConfig(gap_change_epsilon: {}, stagnation_limit: {}s)",
            self.gap_change_epsilon, self.stagnation_limit_seconds
        )
    }
}

/// Builder for `StagnationConfig`. Values are validated in `build`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationConfigBuilder {
    gap_change_epsilon: f64,
    stagnation_limit_seconds: f64,
}

impl Default for StagnationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StagnationConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            gap_change_epsilon: StagnationConfig::DEFAULT_GAP_CHANGE_EPSILON,
            stagnation_limit_seconds: StagnationConfig::DEFAULT_STAGNATION_LIMIT_SECONDS,
        }
    }

    #[inline]
    pub fn gap_change_epsilon(mut self, gap_change_epsilon: f64) -> Self {
        self.gap_change_epsilon = gap_change_epsilon;
        self
    }

    #[inline]
    pub fn stagnation_limit_seconds(mut self, seconds: f64) -> Self {
        self.stagnation_limit_seconds = seconds;
        self
    }

    #[inline]
    pub fn stagnation_limit(self, limit: std::time::Duration) -> Self {
        self.stagnation_limit_seconds(limit.as_secs_f64())
    }

    #[inline]
    pub fn build(self) -> Result<StagnationConfig, ConfigError> {
        StagnationConfig::new(self.gap_change_epsilon, self.stagnation_limit_seconds)
    }
}

/// Lifecycle of one monitored search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonitorPhase {
    /// Accepting reports and tracking the gap.
    #[default]
    Active,
    /// Termination was requested. Terminal for the current search.
    Stopped,
}

/// What a single report amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StagnationVerdict {
    /// The report was outside tree search or had no incumbent.
    Ignored,
    /// The gap was tracked and the search may continue.
    Continue {
        gap: f64,
        stagnation_seconds: f64,
    },
    /// The gap stagnated for longer than the limit.
    Stop {
        gap: f64,
        stagnation_seconds: f64,
        elapsed_seconds: f64,
    },
}

impl StagnationVerdict {
    /// Returns `true` if the verdict requests termination.
    #[inline]
    pub fn should_stop(&self) -> bool {
        matches!(self, StagnationVerdict::Stop { .. })
    }
}

/// The gap trajectory of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationState {
    last_gap: f64,
    last_gap_change_time: f64,
    last_elapsed: f64,
    phase: MonitorPhase,
}

impl Default for StagnationState {
    fn default() -> Self {
        Self::new()
    }
}

impl StagnationState {
    /// Creates the state for a fresh search: no gap seen yet.
    #[inline]
    pub const fn new() -> Self {
        Self {
            last_gap: f64::INFINITY,
            last_gap_change_time: f64::NEG_INFINITY,
            last_elapsed: f64::NEG_INFINITY,
            phase: MonitorPhase::Active,
        }
    }

    /// The gap recorded at the last significant change.
    #[inline]
    pub fn last_gap(&self) -> f64 {
        self.last_gap
    }

    /// Engine time of the last significant gap change, `-inf` before the first.
    #[inline]
    pub fn last_gap_change_time(&self) -> f64 {
        self.last_gap_change_time
    }

    /// Engine time of the last accepted report, `-inf` before the first.
    #[inline]
    pub fn last_elapsed(&self) -> f64 {
        self.last_elapsed
    }

    #[inline]
    pub fn phase(&self) -> MonitorPhase {
        self.phase
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.phase == MonitorPhase::Stopped
    }

    /// Seconds since the last significant gap change as of `elapsed_seconds`.
    #[inline]
    pub fn stagnation_seconds(&self, elapsed_seconds: f64) -> f64 {
        elapsed_seconds - self.last_gap_change_time
    }

    /// Applies one progress report and returns the successor state together
    /// with the verdict.
    ///
    /// # Errors
    ///
    /// - `ProgressError::AlreadyStopped` if termination was already
    ///   requested for this search.
    /// - `ProgressError::InvalidElapsed` for a negative or non-finite
    ///   elapsed time on an otherwise accepted report.
    /// - `ProgressError::NonMonotonicTime` if the elapsed time is smaller
    ///   than that of the previous accepted report.
    ///
    /// The receiver is not modified in any of these cases.
    pub fn on_progress<T>(
        self,
        config: &StagnationConfig,
        progress: &SearchProgress<T>,
    ) -> Result<(Self, StagnationVerdict), ProgressError>
    where
        T: SolverFloat,
    {
        if self.is_stopped() {
            return Err(ProgressError::AlreadyStopped);
        }

        if !progress.is_node_exploration() {
            return Ok((self, StagnationVerdict::Ignored));
        }

        let gap: f64 = match progress.relative_gap() {
            Some(gap) => gap.as_(),
            None => return Ok((self, StagnationVerdict::Ignored)),
        };

        let elapsed = progress.elapsed_seconds();
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(ProgressError::InvalidElapsed(elapsed));
        }
        if elapsed < self.last_elapsed {
            return Err(ProgressError::NonMonotonicTime {
                previous: self.last_elapsed,
                current: elapsed,
            });
        }

        let mut next = self;
        next.last_elapsed = elapsed;

        // `inf - inf` is `NaN` and never exceeds epsilon.
        if (gap - self.last_gap).abs() > config.gap_change_epsilon {
            next.last_gap = gap;
            next.last_gap_change_time = elapsed;
        }

        let stagnation_seconds = next.stagnation_seconds(elapsed);
        if stagnation_seconds > config.stagnation_limit_seconds {
            next.phase = MonitorPhase::Stopped;
            return Ok((
                next,
                StagnationVerdict::Stop {
                    gap,
                    stagnation_seconds,
                    elapsed_seconds: elapsed,
                },
            ));
        }

        Ok((
            next,
            StagnationVerdict::Continue {
                gap,
                stagnation_seconds,
            },
        ))
    }
}

/// A `SearchMonitor` that terminates the search once the gap stagnates.
#[derive(Debug, Clone)]
pub struct GapStagnationMonitor<T> {
    config: StagnationConfig,
    state: StagnationState,
    stop_reason: Option<String>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> GapStagnationMonitor<T> {
    /// Creates a monitor with the given thresholds.
    #[inline]
    pub fn new(config: StagnationConfig) -> Self {
        Self {
            config,
            state: StagnationState::new(),
            stop_reason: None,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> &StagnationConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &StagnationState {
        &self.state
    }

    /// The termination reason, once the monitor has stopped the search.
    #[inline]
    pub fn stop_reason(&self) -> Option<&str> {
        self.stop_reason.as_deref()
    }
}

impl<T> Default for GapStagnationMonitor<T> {
    fn default() -> Self {
        Self::new(StagnationConfig::default())
    }
}

impl<T> std::fmt::Display for GapStagnationMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GapStagnationMonitor(epsilon: {}, limit: {}s, phase: {:?})",
            self.config.gap_change_epsilon,
            self.config.stagnation_limit_seconds,
            self.state.phase
        )
    }
}

impl<T> SearchMonitor<T> for GapStagnationMonitor<T>
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "GapStagnationMonitor"
    }

    fn on_enter_search(&mut self) {
        self.state = StagnationState::new();
        self.stop_reason = None;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _objective: T) {}

    fn on_progress(&mut self, progress: &SearchProgress<T>) {
        match self.state.on_progress(&self.config, progress) {
            Ok((next, verdict)) => {
                self.state = next;
                if let StagnationVerdict::Stop {
                    gap,
                    stagnation_seconds,
                    elapsed_seconds,
                } = verdict
                {
                    let gap = OptimalityGap::new(gap);
                    log::info!(
                        "Terminating at {:.1}s: no significant gap improvement for {:.1}s (limit {}s), current gap {}",
                        elapsed_seconds,
                        stagnation_seconds,
                        self.config.stagnation_limit_seconds,
                        gap
                    );
                    self.stop_reason = Some(format!(
                        "optimality gap {} stagnated for {:.1}s",
                        gap, stagnation_seconds
                    ));
                }
            }
            Err(e) => log::warn!("{}: ignoring progress report: {}", self.name(), e),
        }
    }

    fn search_command(&self) -> SearchCommand {
        match &self.stop_reason {
            Some(reason) => SearchCommand::Terminate(reason.clone()),
            None => SearchCommand::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SearchPhase;

    fn config() -> StagnationConfig {
        StagnationConfig::new(1e-4, 15.0).unwrap()
    }

    /// Snapshot with incumbent 100 and the bound chosen to produce `gap`.
    fn at(elapsed: f64, gap: f64) -> SearchProgress<f64> {
        SearchProgress::node_exploration(elapsed, Some(100.0), 100.0 + 100.0 * gap, 1)
    }

    fn step(state: StagnationState, progress: &SearchProgress<f64>) -> (StagnationState, bool) {
        let (next, verdict) = state.on_progress(&config(), progress).unwrap();
        (next, verdict.should_stop())
    }

    #[test]
    fn test_default_config_values() {
        let c = StagnationConfig::default();
        assert_eq!(c.gap_change_epsilon(), 1e-4);
        assert_eq!(c.stagnation_limit_seconds(), 15.0);
        assert_eq!(StagnationConfig::builder().build(), Ok(c));
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert_eq!(
            StagnationConfig::new(-1e-4, 15.0),
            Err(ConfigError::InvalidGapChangeEpsilon(-1e-4))
        );
        assert_eq!(
            StagnationConfig::new(1e-4, -1.0),
            Err(ConfigError::InvalidStagnationLimit(-1.0))
        );
        assert!(StagnationConfig::new(f64::NAN, 15.0).is_err());
        assert!(StagnationConfig::new(1e-4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_accepts_duration() {
        let c = StagnationConfig::builder()
            .stagnation_limit(std::time::Duration::from_millis(2500))
            .gap_change_epsilon(0.01)
            .build()
            .unwrap();
        assert_eq!(c.stagnation_limit_seconds(), 2.5);
        assert_eq!(c.gap_change_epsilon(), 0.01);
    }

    #[test]
    fn test_new_state_has_no_baseline() {
        let s = StagnationState::new();
        assert_eq!(s.last_gap(), f64::INFINITY);
        assert_eq!(s.last_gap_change_time(), f64::NEG_INFINITY);
        assert_eq!(s.phase(), MonitorPhase::Active);
    }

    #[test]
    fn test_stagnation_triggers_stop_after_limit() {
        let s = StagnationState::new();
        let (s, stop) = step(s, &at(0.0, 0.10));
        assert!(!stop);
        assert_eq!(s.last_gap_change_time(), 0.0);

        let (s, stop) = step(s, &at(5.0, 0.10));
        assert!(!stop);

        let (s14, stop) = step(s, &at(14.0, 0.10));
        assert!(!stop);
        assert_eq!(s14.last_gap_change_time(), 0.0);

        let (s16, stop) = step(s14, &at(16.0, 0.10));
        assert!(stop);
        assert!(s16.is_stopped());
    }

    #[test]
    fn test_stagnation_exactly_at_limit_does_not_stop() {
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (s, stop) = step(s, &at(15.0, 0.10));
        assert!(!stop);
        assert!(!s.is_stopped());
    }

    #[test]
    fn test_significant_change_resets_timer() {
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (s, _) = step(s, &at(5.0, 0.10));
        let (s, stop) = step(s, &at(10.0, 0.08));
        assert!(!stop);
        assert_eq!(s.last_gap_change_time(), 10.0);
        assert_eq!(s.last_gap(), 0.08);

        let (s24, stop) = step(s, &at(24.0, 0.08));
        assert!(!stop);
        let (_, stop) = step(s24, &at(26.0, 0.08));
        assert!(stop);
    }

    #[test]
    fn test_change_within_epsilon_does_not_reset_timer() {
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (s, _) = step(s, &at(10.0, 0.10005));
        assert_eq!(s.last_gap_change_time(), 0.0);
        let (_, stop) = step(s, &at(15.5, 0.10009));
        assert!(stop);
    }

    #[test]
    fn test_zero_solutions_are_ignored() {
        let s = StagnationState::new();
        let p = SearchProgress::node_exploration(1_000_000.0, None, 50.0_f64, 0);
        let (next, verdict) = s.on_progress(&config(), &p).unwrap();
        assert_eq!(verdict, StagnationVerdict::Ignored);
        assert_eq!(next, s);

        // A placeholder incumbent with a zero count is still ignored.
        let p = SearchProgress::node_exploration(2_000_000.0, Some(1.0_f64), 50.0, 0);
        let (next, verdict) = next.on_progress(&config(), &p).unwrap();
        assert_eq!(verdict, StagnationVerdict::Ignored);
        assert_eq!(next, s);
    }

    #[test]
    fn test_zero_solutions_ignored_mid_search() {
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let p = SearchProgress::node_exploration(100.0, None, 50.0_f64, 0);
        let (next, verdict) = s.on_progress(&config(), &p).unwrap();
        assert!(!verdict.should_stop());
        assert_eq!(next, s);
    }

    #[test]
    fn test_other_phases_are_ignored() {
        let s = StagnationState::new();
        for phase in [SearchPhase::Presolve, SearchPhase::RootRelaxation] {
            let p = SearchProgress::new(phase, 100.0, Some(100.0_f64), 110.0, 1);
            let (next, verdict) = s.on_progress(&config(), &p).unwrap();
            assert_eq!(verdict, StagnationVerdict::Ignored);
            assert_eq!(next, s);
        }
    }

    #[test]
    fn test_identical_gaps_never_move_change_time() {
        let (mut s, _) = step(StagnationState::new(), &at(0.0, 0.25));
        let mut previous_stagnation = 0.0;
        for t in 1..=15 {
            let (next, stop) = step(s, &at(t as f64, 0.25));
            assert!(!stop);
            assert_eq!(next.last_gap_change_time(), 0.0);
            let stagnation = next.stagnation_seconds(t as f64);
            assert!(stagnation > previous_stagnation);
            previous_stagnation = stagnation;
            s = next;
        }
    }

    #[test]
    fn test_stopped_state_rejects_further_reports_without_mutation() {
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (stopped, stop) = step(s, &at(16.0, 0.10));
        assert!(stop);

        let result = stopped.on_progress(&config(), &at(17.0, 0.01));
        assert_eq!(result, Err(ProgressError::AlreadyStopped));
        assert_eq!(stopped.last_gap(), 0.10_f64);
        assert_eq!(stopped.last_gap_change_time(), 0.0);
        assert_eq!(stopped.last_elapsed(), 16.0);
        assert!(stopped.is_stopped());

        // Even reports that would otherwise be ignored are rejected.
        let p = SearchProgress::node_exploration(18.0, None, 1.0_f64, 0);
        assert_eq!(
            stopped.on_progress(&config(), &p),
            Err(ProgressError::AlreadyStopped)
        );
    }

    #[test]
    fn test_time_going_backwards_is_rejected() {
        let (s, _) = step(StagnationState::new(), &at(10.0, 0.10));
        let result = s.on_progress(&config(), &at(9.0, 0.05));
        assert_eq!(
            result,
            Err(ProgressError::NonMonotonicTime {
                previous: 10.0,
                current: 9.0
            })
        );
    }

    #[test]
    fn test_invalid_elapsed_is_rejected() {
        let s = StagnationState::new();
        assert_eq!(
            s.on_progress(&config(), &at(-1.0, 0.1)),
            Err(ProgressError::InvalidElapsed(-1.0))
        );
        assert!(matches!(
            s.on_progress(&config(), &at(f64::NAN, 0.1)),
            Err(ProgressError::InvalidElapsed(_))
        ));
    }

    #[test]
    fn test_infinite_first_gap_stops_immediately() {
        let p = SearchProgress::node_exploration(3.0, Some(0.0_f64), 5.0, 1);
        let (s, verdict) = StagnationState::new().on_progress(&config(), &p).unwrap();

        assert!(verdict.should_stop());
        assert_eq!(s.phase(), MonitorPhase::Stopped);
        assert_eq!(s.last_gap(), f64::INFINITY);
        assert_eq!(s.last_gap_change_time(), f64::NEG_INFINITY);
        assert_eq!(s.last_elapsed(), 3.0);
        match verdict {
            StagnationVerdict::Stop {
                stagnation_seconds,
                elapsed_seconds,
                ..
            } => {
                assert_eq!(stagnation_seconds, f64::INFINITY);
                assert_eq!(elapsed_seconds, 3.0);
            }
            other => panic!("expected a stop, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_infinite_gap_is_not_a_change() {
        let inf = |t: f64| SearchProgress::node_exploration(t, Some(0.0_f64), 5.0, 1);
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (s, verdict) = s.on_progress(&config(), &inf(4.0)).unwrap();
        assert!(!verdict.should_stop());
        assert_eq!(s.last_gap(), f64::INFINITY);
        assert_eq!(s.last_gap_change_time(), 4.0);

        let (s, _) = s.on_progress(&config(), &inf(10.0)).unwrap();
        assert_eq!(s.last_gap_change_time(), 4.0);
        let (_, verdict) = s.on_progress(&config(), &inf(19.5)).unwrap();
        assert!(verdict.should_stop());
    }

    #[test]
    fn test_infinite_to_finite_gap_is_a_change() {
        let inf = SearchProgress::node_exploration(5.0, Some(0.0_f64), 5.0, 1);
        let (s, _) = step(StagnationState::new(), &at(0.0, 0.10));
        let (s, _) = s.on_progress(&config(), &inf).unwrap();
        assert_eq!(s.last_gap_change_time(), 5.0);
        let (s, _) = step(s, &at(12.0, 0.10));
        assert_eq!(s.last_gap_change_time(), 12.0);
        assert_eq!(s.last_gap(), 0.10_f64);
    }

    #[test]
    fn test_zero_limit_stops_on_first_advance_of_time() {
        let c = StagnationConfig::new(1e-4, 0.0).unwrap();
        let (s, v) = StagnationState::new().on_progress(&c, &at(1.0, 0.1)).unwrap();
        assert!(!v.should_stop());
        let (_, v) = s.on_progress(&c, &at(1.0, 0.1)).unwrap();
        assert!(!v.should_stop());
        let (_, v) = s.on_progress(&c, &at(1.001, 0.1)).unwrap();
        assert!(v.should_stop());
    }

    #[test]
    fn test_monitor_terminates_and_reports_reason() {
        let mut m = GapStagnationMonitor::<f64>::new(config());
        m.on_enter_search();
        m.on_progress(&at(0.0, 0.10));
        assert_eq!(m.search_command(), SearchCommand::Continue);
        m.on_progress(&at(16.0, 0.10));
        match m.search_command() {
            SearchCommand::Terminate(reason) => {
                assert!(reason.contains("stagnated"), "unexpected reason: {reason}");
                assert!(reason.contains("10.00%"), "unexpected reason: {reason}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
        assert!(m.stop_reason().is_some());
    }

    #[test]
    fn test_monitor_keeps_terminating_after_late_report() {
        let mut m = GapStagnationMonitor::<f64>::new(config());
        m.on_enter_search();
        m.on_progress(&at(0.0, 0.10));
        m.on_progress(&at(16.0, 0.10));
        let frozen = *m.state();

        m.on_progress(&at(30.0, 0.01));
        assert_eq!(*m.state(), frozen);
        assert!(m.search_command().is_terminate());
    }

    #[test]
    fn test_enter_search_resets_state() {
        let mut m = GapStagnationMonitor::<f64>::default();
        m.on_enter_search();
        m.on_progress(&at(0.0, 0.10));
        m.on_progress(&at(16.0, 0.10));
        assert!(m.search_command().is_terminate());

        m.on_enter_search();
        assert_eq!(*m.state(), StagnationState::new());
        assert_eq!(m.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_monitors_with_different_thresholds_are_independent() {
        let mut strict =
            GapStagnationMonitor::<f64>::new(StagnationConfig::new(1e-4, 5.0).unwrap());
        let mut lenient =
            GapStagnationMonitor::<f64>::new(StagnationConfig::new(1e-4, 60.0).unwrap());
        for m in [&mut strict, &mut lenient] {
            m.on_enter_search();
            m.on_progress(&at(0.0, 0.2));
            m.on_progress(&at(10.0, 0.2));
        }
        assert!(strict.search_command().is_terminate());
        assert!(!lenient.search_command().is_terminate());
    }

    #[test]
    fn test_f32_objectives() {
        let mut m = GapStagnationMonitor::<f32>::new(config());
        m.on_enter_search();
        m.on_progress(&SearchProgress::node_exploration(0.0, Some(50.0_f32), 60.0, 2));
        m.on_progress(&SearchProgress::node_exploration(20.0, Some(50.0_f32), 60.0, 2));
        assert!(m.search_command().is_terminate());
    }
}
