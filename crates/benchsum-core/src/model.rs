// benchsum - Benchmark result summarizer and overhead analyzer
//
// Copyright (c) 2025 benchsum contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data model for benchmark run records and measured metrics.
//!
//! A [`RunRecord`] is one timed execution of a workload package under one
//! mode ("baseline" or "ebpf" by convention). Records are produced by the
//! loader and never mutated afterwards; every downstream table is derived
//! from them on each invocation.

use serde::Serialize;

/// Conventional mode label for uninstrumented runs.
pub const MODE_BASELINE: &str = "baseline";

/// Conventional mode label for instrumented runs.
pub const MODE_EBPF: &str = "ebpf";

/// A metric that participates in aggregation and overhead computation.
///
/// Only elapsed wall-clock time and perf's task-clock are aggregated; the
/// remaining perf counters are carried through [`RunRecord`] for the
/// cleaned-rows output but not summarized.
///
/// # Examples
///
/// ```
/// use benchsum_core::Metric;
///
/// assert_eq!(Metric::ElapsedSeconds.column(), "elapsed_s");
/// assert_eq!(Metric::TaskClockMs.selector(), "taskclock");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    /// Elapsed wall-clock time in seconds.
    ElapsedSeconds,
    /// Task-clock time in milliseconds (from `perf stat`).
    TaskClockMs,
}

impl Metric {
    /// All metrics, in the order they appear in summary output.
    pub const ALL: [Metric; 2] = [Metric::ElapsedSeconds, Metric::TaskClockMs];

    /// The input/output column name for this metric.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Metric::ElapsedSeconds => "elapsed_s",
            Metric::TaskClockMs => "task_clock_ms",
        }
    }

    /// The short name used in CLI selectors and output file names.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Metric::ElapsedSeconds => "elapsed",
            Metric::TaskClockMs => "taskclock",
        }
    }

    /// Human-readable axis label for charts.
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::ElapsedSeconds => "Seconds",
            Metric::TaskClockMs => "Task clock (ms)",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// One measurement row from a results file.
///
/// Numeric fields are `Option` throughout: a missing-value token or an
/// unparsable value loads as `None` and stays undefined through every
/// derived statistic, never defaulting to zero. `threads` is optional for
/// the same reason; rows without a parsable thread count cannot form a
/// group key and are skipped by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    /// Workload package name.
    pub pkg: String,
    /// Input label (e.g. "simsmall", "simlarge").
    pub input: String,
    /// Thread count the run was executed with.
    pub threads: Option<u32>,
    /// Measurement mode; "baseline" or "ebpf" by convention, not enforced.
    pub mode: String,
    /// Elapsed wall-clock seconds.
    pub elapsed_s: Option<f64>,
    /// Task-clock milliseconds from perf.
    pub task_clock_ms: Option<f64>,
    /// CPU cycles (perf counter).
    pub cycles: Option<f64>,
    /// Retired instructions (perf counter).
    pub instructions: Option<f64>,
    /// Branch instructions (perf counter).
    pub branches: Option<f64>,
    /// Branch misses (perf counter).
    pub branch_misses: Option<f64>,
    /// Context switches (perf counter).
    pub ctx: Option<f64>,
    /// CPU migrations (perf counter).
    pub cmigr: Option<f64>,
    /// Page faults (perf counter).
    pub pgfaults: Option<f64>,
    /// Index of the run within its repetition series.
    pub run_idx: Option<u32>,
    /// Process exit code; `None` is treated as success.
    pub exit_code: Option<i64>,
    /// Base name of the file this row was loaded from.
    pub source_file: String,
}

impl RunRecord {
    /// Whether this run completed successfully.
    ///
    /// A missing exit code counts as success; some measurement wrappers do
    /// not report one.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code.unwrap_or(0) == 0
    }

    /// The value of an aggregatable metric for this run, if measured.
    #[must_use]
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::ElapsedSeconds => self.elapsed_s,
            Metric::TaskClockMs => self.task_clock_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RunRecord {
        RunRecord {
            pkg: "blackscholes".to_string(),
            input: "simsmall".to_string(),
            threads: Some(4),
            mode: MODE_BASELINE.to_string(),
            elapsed_s: Some(1.5),
            task_clock_ms: None,
            cycles: None,
            instructions: None,
            branches: None,
            branch_misses: None,
            ctx: None,
            cmigr: None,
            pgfaults: None,
            run_idx: Some(0),
            exit_code: Some(0),
            source_file: "results_a.csv".to_string(),
        }
    }

    #[test]
    fn test_exit_code_zero_is_success() {
        assert!(record().is_success());
    }

    #[test]
    fn test_missing_exit_code_is_success() {
        let mut r = record();
        r.exit_code = None;
        assert!(r.is_success());
    }

    #[test]
    fn test_nonzero_exit_code_is_failure() {
        let mut r = record();
        r.exit_code = Some(7);
        assert!(!r.is_success());
    }

    #[test]
    fn test_metric_value_lookup() {
        let r = record();
        assert_eq!(r.metric_value(Metric::ElapsedSeconds), Some(1.5));
        assert_eq!(r.metric_value(Metric::TaskClockMs), None);
    }

    #[test]
    fn test_metric_display_uses_column_name() {
        assert_eq!(Metric::TaskClockMs.to_string(), "task_clock_ms");
    }
}
