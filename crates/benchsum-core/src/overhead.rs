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

//! Per-cell overhead of the instrumented mode versus baseline, and the
//! macro-average across cells.
//!
//! The aggregated table is pivoted by (pkg, input, threads) with mode as
//! the pivoted dimension. A cell with only one side present is preserved
//! as a partial row; its overhead stays undefined, which is distinct from
//! zero overhead.

use crate::aggregate::SummaryRow;
use crate::model::{Metric, MODE_BASELINE, MODE_EBPF};
use serde::Serialize;
use std::collections::BTreeMap;

/// One pivoted comparison cell for a single metric.
///
/// All mode-derived fields are `Option`: a side that was never measured
/// stays `None`, and `overhead_pct` exists only when both means do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverheadRow {
    /// Workload package name.
    pub pkg: String,
    /// Input label.
    pub input: String,
    /// Thread count.
    pub threads: u32,
    /// Baseline mean for the metric.
    pub baseline_mean: Option<f64>,
    /// Instrumented (ebpf) mean for the metric.
    pub ebpf_mean: Option<f64>,
    /// Overhead percentage, `(ebpf - baseline) / baseline * 100`.
    pub overhead_pct: Option<f64>,
    /// Baseline minimum.
    pub baseline_min: Option<f64>,
    /// Baseline maximum.
    pub baseline_max: Option<f64>,
    /// Instrumented minimum.
    pub ebpf_min: Option<f64>,
    /// Instrumented maximum.
    pub ebpf_max: Option<f64>,
}

impl OverheadRow {
    fn new(pkg: String, input: String, threads: u32) -> Self {
        Self {
            pkg,
            input,
            threads,
            baseline_mean: None,
            ebpf_mean: None,
            overhead_pct: None,
            baseline_min: None,
            baseline_max: None,
            ebpf_min: None,
            ebpf_max: None,
        }
    }
}

/// Macro-average overhead for one metric: the unweighted mean of the
/// defined per-cell overhead percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroOverhead {
    /// The metric the average was computed for.
    pub metric: Metric,
    /// Unweighted mean of the defined overhead percentages.
    pub macro_avg_overhead_pct: f64,
}

/// Pivot the aggregated table into per-cell overhead rows for one metric.
///
/// Returns an empty table when the metric was never aggregated; callers
/// must treat that as "not computable" and skip the metric's downstream
/// outputs. Every summary row carrying stats for the metric creates its
/// cell, but only the conventional "baseline" and "ebpf" modes populate
/// the mode fields; a cell seen under some other label yields a row with
/// no comparison data. Output is sorted by (pkg, input, threads).
///
/// # Examples
///
/// ```
/// use benchsum_core::{compute_overhead, Metric};
///
/// let rows = compute_overhead(&[], Metric::ElapsedSeconds);
/// assert!(rows.is_empty());
/// ```
#[must_use]
pub fn compute_overhead(summary: &[SummaryRow], metric: Metric) -> Vec<OverheadRow> {
    if summary.iter().all(|row| row.stats(metric).is_none()) {
        return Vec::new();
    }

    type Key = (String, String, u32);
    let mut cells: BTreeMap<Key, OverheadRow> = BTreeMap::new();

    for row in summary {
        let Some(stats) = row.stats(metric) else {
            continue;
        };
        let key = (row.pkg.clone(), row.input.clone(), row.threads);
        let cell = cells.entry(key).or_insert_with(|| {
            OverheadRow::new(row.pkg.clone(), row.input.clone(), row.threads)
        });
        match row.mode.as_str() {
            MODE_BASELINE => {
                cell.baseline_mean = Some(stats.mean);
                cell.baseline_min = Some(stats.min);
                cell.baseline_max = Some(stats.max);
            }
            MODE_EBPF => {
                cell.ebpf_mean = Some(stats.mean);
                cell.ebpf_min = Some(stats.min);
                cell.ebpf_max = Some(stats.max);
            }
            _ => {}
        }
    }

    let mut rows: Vec<OverheadRow> = cells.into_values().collect();
    for row in &mut rows {
        if let (Some(baseline), Some(ebpf)) = (row.baseline_mean, row.ebpf_mean) {
            row.overhead_pct = Some((ebpf - baseline) / baseline * 100.0);
        }
    }
    rows
}

/// Reduce an overhead table to its macro-average.
///
/// Cells with an undefined overhead (one-sided data, or a 0/0 baseline
/// producing NaN) are excluded from the mean, never treated as zero.
/// Returns `None` when no cell has a defined overhead; callers must treat
/// that as "insufficient paired data", not as zero overhead.
#[must_use]
pub fn macro_average(rows: &[OverheadRow], metric: Metric) -> Option<MacroOverhead> {
    let defined: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.overhead_pct)
        .filter(|pct| !pct.is_nan())
        .collect();
    if defined.is_empty() {
        return None;
    }
    Some(MacroOverhead {
        metric,
        macro_avg_overhead_pct: defined.iter().sum::<f64>() / defined.len() as f64,
    })
}
