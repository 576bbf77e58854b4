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

//! Row selection for the chart consumer.
//!
//! For each package, picks the aggregated row with the largest sample
//! count per mode (ties broken by smaller thread count), producing one
//! paired baseline/ebpf record per package. Packages missing either mode
//! are omitted rather than failing.

use crate::aggregate::SummaryRow;
use crate::error::{CoreError, Result};
use crate::model::{Metric, MODE_BASELINE, MODE_EBPF};

/// Mean and min/max range for one mode of one package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeStats {
    /// Mean of the selected aggregated row.
    pub mean: f64,
    /// Minimum of the selected aggregated row.
    pub min: f64,
    /// Maximum of the selected aggregated row.
    pub max: f64,
}

/// One paired baseline/ebpf record, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRecord {
    /// Workload package name.
    pub pkg: String,
    /// Baseline-side statistics.
    pub baseline: ModeStats,
    /// Instrumented-side statistics.
    pub ebpf: ModeStats,
}

/// Select one paired record per package for the given metric.
///
/// When `input_filter` is given, each package is narrowed to rows with
/// that input label; if the filter leaves nothing for a package, the
/// package's unfiltered rows are used instead (a deliberate recovery
/// policy, so a package measured under a different input is still
/// plotted). Per mode the row with the largest sample count wins, ties
/// going to the smaller thread count. Packages are emitted in sorted
/// order, and only when both modes yielded a row.
///
/// # Errors
///
/// Returns [`CoreError::MetricUnavailable`] when no aggregated row
/// carries statistics for the metric.
pub fn select_plot_rows(
    summary: &[SummaryRow],
    metric: Metric,
    input_filter: Option<&str>,
) -> Result<Vec<PlotRecord>> {
    if summary.iter().all(|row| row.stats(metric).is_none()) {
        return Err(CoreError::MetricUnavailable(metric.column()));
    }

    let mut packages: Vec<&str> = summary.iter().map(|row| row.pkg.as_str()).collect();
    packages.sort_unstable();
    packages.dedup();

    let mut records = Vec::new();
    for pkg in packages {
        let sub: Vec<&SummaryRow> = summary.iter().filter(|row| row.pkg == pkg).collect();
        let narrowed: Vec<&SummaryRow> = match input_filter {
            Some(label) => {
                let filtered: Vec<&SummaryRow> = sub
                    .iter()
                    .copied()
                    .filter(|row| row.input == label)
                    .collect();
                if filtered.is_empty() {
                    sub
                } else {
                    filtered
                }
            }
            None => sub,
        };

        let baseline = pick_mode(&narrowed, metric, MODE_BASELINE);
        let ebpf = pick_mode(&narrowed, metric, MODE_EBPF);
        if let (Some(baseline), Some(ebpf)) = (baseline, ebpf) {
            records.push(PlotRecord {
                pkg: pkg.to_string(),
                baseline,
                ebpf,
            });
        }
    }
    Ok(records)
}

/// Pick the best row for one mode: largest count, then smallest threads.
fn pick_mode(rows: &[&SummaryRow], metric: Metric, mode: &str) -> Option<ModeStats> {
    rows.iter()
        .filter(|row| row.mode == mode)
        .filter_map(|row| row.stats(metric).map(|stats| (row.threads, stats)))
        .max_by(|(threads_a, stats_a), (threads_b, stats_b)| {
            stats_a
                .count
                .cmp(&stats_b.count)
                .then(threads_b.cmp(threads_a))
        })
        .map(|(_, stats)| ModeStats {
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
        })
}
