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

//! Grouping and descriptive statistics over successful runs.
//!
//! Runs are filtered to exit code 0 (or missing, which counts as
//! success), grouped by (pkg, input, threads, mode), and reduced to
//! count/mean/std/min/median/max per metric. A group that has no
//! measurement for either metric is dropped entirely; a cell with count 0
//! is never materialized.

use crate::model::{Metric, RunRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Descriptive statistics over the non-missing samples of one metric in
/// one group.
///
/// `count` is always at least 1; empty sample sets produce no stats block
/// at all. `std` is the sample standard deviation and is undefined for a
/// single sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStats {
    /// Number of non-missing samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `None` when `count == 1`.
    pub std: Option<f64>,
    /// Smallest sample.
    pub min: f64,
    /// Median, interpolating between the middle two for even counts.
    pub median: f64,
    /// Largest sample.
    pub max: f64,
}

impl MetricStats {
    /// Compute statistics over a sample set; `None` when it is empty.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;

        let std = if count > 1 {
            let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            Some(var.sqrt())
        } else {
            None
        };

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            median,
            max: sorted[count - 1],
        })
    }
}

/// One aggregated cell: a (pkg, input, threads, mode) group with per-metric
/// statistics.
///
/// A metric with no samples in the group is `None`; downstream consumers
/// must treat that as absence, not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Workload package name.
    pub pkg: String,
    /// Input label.
    pub input: String,
    /// Thread count.
    pub threads: u32,
    /// Measurement mode.
    pub mode: String,
    /// Elapsed-seconds statistics.
    pub elapsed_s: Option<MetricStats>,
    /// Task-clock statistics.
    pub task_clock_ms: Option<MetricStats>,
}

impl SummaryRow {
    /// The statistics block for one metric, if present.
    #[must_use]
    pub fn stats(&self, metric: Metric) -> Option<&MetricStats> {
        match metric {
            Metric::ElapsedSeconds => self.elapsed_s.as_ref(),
            Metric::TaskClockMs => self.task_clock_ms.as_ref(),
        }
    }
}

/// The successful subset of the loaded runs, in load order.
///
/// This is the "cleaned rows" view the report layer writes out; a run with
/// a non-zero exit code never appears here.
#[must_use]
pub fn successful_runs(records: &[RunRecord]) -> Vec<RunRecord> {
    records.iter().filter(|r| r.is_success()).cloned().collect()
}

/// Aggregate successful runs into per-group statistics.
///
/// Rows with an unparsable thread count have no group key and are skipped,
/// mirroring how a missing key drops out of a group-by. Output is sorted by
/// (pkg, input, threads, mode).
///
/// # Examples
///
/// ```
/// use benchsum_core::{summarize, Metric, RunRecord};
///
/// # fn run(records: Vec<RunRecord>) {
/// let summary = summarize(&records);
/// for row in &summary {
///     if let Some(stats) = row.stats(Metric::ElapsedSeconds) {
///         assert!(stats.count >= 1);
///     }
/// }
/// # }
/// ```
#[must_use]
pub fn summarize(records: &[RunRecord]) -> Vec<SummaryRow> {
    type Key = (String, String, u32, String);
    let mut groups: BTreeMap<Key, [Vec<f64>; 2]> = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_success()) {
        let Some(threads) = record.threads else {
            continue;
        };
        let key = (
            record.pkg.clone(),
            record.input.clone(),
            threads,
            record.mode.clone(),
        );
        let samples = groups.entry(key).or_default();
        for (slot, metric) in samples.iter_mut().zip(Metric::ALL) {
            if let Some(value) = record.metric_value(metric) {
                slot.push(value);
            }
        }
    }

    groups
        .into_iter()
        .filter_map(|((pkg, input, threads, mode), [elapsed, task_clock])| {
            let elapsed_s = MetricStats::from_samples(&elapsed);
            let task_clock_ms = MetricStats::from_samples(&task_clock);
            // A group where neither metric was measured is not a cell.
            if elapsed_s.is_none() && task_clock_ms.is_none() {
                return None;
            }
            Some(SummaryRow {
                pkg,
                input,
                threads,
                mode,
                elapsed_s,
                task_clock_ms,
            })
        })
        .collect()
}
