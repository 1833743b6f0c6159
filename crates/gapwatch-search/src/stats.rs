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

/// Statistics an engine reports alongside its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of branch-and-bound nodes processed.
    pub explored_nodes: u64,
    /// Number of improving feasible solutions found.
    pub solutions_found: u64,
    /// Number of progress snapshots delivered to the monitor.
    pub progress_reports: u64,
    /// Wall-clock duration of the search.
    pub runtime: std::time::Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        SearchStatisticsBuilder::new().build()
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Explored Nodes: {}", self.explored_nodes)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Progress Reports: {}", self.progress_reports)?;
        writeln!(f, "  Runtime (secs): {:.3}", self.runtime.as_secs_f64())
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    explored_nodes: u64,
    solutions_found: u64,
    progress_reports: u64,
    runtime: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a builder with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            explored_nodes: 0,
            solutions_found: 0,
            progress_reports: 0,
            runtime: std::time::Duration::ZERO,
        }
    }

    #[inline]
    pub fn explored_nodes(mut self, explored_nodes: u64) -> Self {
        self.explored_nodes = explored_nodes;
        self
    }

    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.solutions_found = solutions_found;
        self
    }

    #[inline]
    pub fn progress_reports(mut self, progress_reports: u64) -> Self {
        self.progress_reports = progress_reports;
        self
    }

    #[inline]
    pub fn runtime(mut self, runtime: std::time::Duration) -> Self {
        self.runtime = runtime;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            explored_nodes: self.explored_nodes,
            solutions_found: self.solutions_found,
            progress_reports: self.progress_reports,
            runtime: self.runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchStatistics, SearchStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SearchStatisticsBuilder::new()
            .explored_nodes(4096)
            .solutions_found(3)
            .progress_reports(5)
            .runtime(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.explored_nodes, 4096);
        assert_eq!(stats.solutions_found, 3);
        assert_eq!(stats.progress_reports, 5);
        assert_eq!(stats.runtime, Duration::from_millis(1234));
    }

    #[test]
    fn test_default_is_all_zero() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.explored_nodes, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.progress_reports, 0);
        assert_eq!(stats.runtime, Duration::ZERO);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SearchStatisticsBuilder::new()
            .explored_nodes(10)
            .solutions_found(2)
            .progress_reports(1)
            .runtime(Duration::from_millis(1500))
            .build();

        let rendered = stats.to_string();
        assert!(rendered.contains("Search Statistics:"));
        assert!(rendered.contains("Explored Nodes: 10"));
        assert!(rendered.contains("Solutions Found: 2"));
        assert!(rendered.contains("Progress Reports: 1"));
        assert!(rendered.contains("Runtime (secs): 1.500"));
    }
}
