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

//! CSV report writers.
//!
//! Each table computed by the core pipeline is written as its own CSV
//! file; missing values are written as empty fields so "no data" stays
//! distinguishable from zero in every output.

use crate::error::{CliError, Result};
use benchsum_core::{MacroOverhead, Metric, OverheadRow, RunRecord, SummaryRow};
use std::path::Path;

fn opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the cleaned (successful) run records.
pub fn write_run_records(path: &Path, records: &[RunRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| CliError::report(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| CliError::report(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| CliError::io(path, e))?;
    Ok(())
}

/// Write the per-group summary table, one (metric, statistic) column pair
/// per aggregated metric.
pub fn write_summary(path: &Path, summary: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| CliError::report(path, e))?;

    let mut header = vec![
        "pkg".to_string(),
        "input".to_string(),
        "threads".to_string(),
        "mode".to_string(),
    ];
    for metric in Metric::ALL {
        let col = metric.column();
        for stat in ["count", "mean", "std", "min", "median", "max"] {
            header.push(format!("{col}_{stat}"));
        }
    }
    writer
        .write_record(&header)
        .map_err(|e| CliError::report(path, e))?;

    for row in summary {
        let mut fields = vec![
            row.pkg.clone(),
            row.input.clone(),
            row.threads.to_string(),
            row.mode.clone(),
        ];
        for metric in Metric::ALL {
            match row.stats(metric) {
                Some(stats) => {
                    fields.push(stats.count.to_string());
                    fields.push(stats.mean.to_string());
                    fields.push(opt(stats.std));
                    fields.push(stats.min.to_string());
                    fields.push(stats.median.to_string());
                    fields.push(stats.max.to_string());
                }
                None => fields.extend(std::iter::repeat(String::new()).take(6)),
            }
        }
        writer
            .write_record(&fields)
            .map_err(|e| CliError::report(path, e))?;
    }
    writer.flush().map_err(|e| CliError::io(path, e))?;
    Ok(())
}

/// Write one metric's overhead table with metric-qualified column names.
pub fn write_overhead(path: &Path, rows: &[OverheadRow], metric: Metric) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| CliError::report(path, e))?;

    let col = metric.column();
    let header = [
        "pkg".to_string(),
        "input".to_string(),
        "threads".to_string(),
        format!("{col}_baseline_mean"),
        format!("{col}_ebpf_mean"),
        "overhead_pct".to_string(),
        format!("{col}_baseline_min"),
        format!("{col}_baseline_max"),
        format!("{col}_ebpf_min"),
        format!("{col}_ebpf_max"),
    ];
    writer
        .write_record(&header)
        .map_err(|e| CliError::report(path, e))?;

    for row in rows {
        writer
            .write_record(&[
                row.pkg.clone(),
                row.input.clone(),
                row.threads.to_string(),
                opt(row.baseline_mean),
                opt(row.ebpf_mean),
                opt(row.overhead_pct),
                opt(row.baseline_min),
                opt(row.baseline_max),
                opt(row.ebpf_min),
                opt(row.ebpf_max),
            ])
            .map_err(|e| CliError::report(path, e))?;
    }
    writer.flush().map_err(|e| CliError::io(path, e))?;
    Ok(())
}

/// Write the macro-average table, one row per metric.
pub fn write_macro(path: &Path, macros: &[MacroOverhead]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| CliError::report(path, e))?;
    writer
        .write_record(["metric", "macro_avg_overhead_pct"])
        .map_err(|e| CliError::report(path, e))?;
    for row in macros {
        writer
            .write_record(&[
                row.metric.column().to_string(),
                row.macro_avg_overhead_pct.to_string(),
            ])
            .map_err(|e| CliError::report(path, e))?;
    }
    writer.flush().map_err(|e| CliError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchsum_core::{compute_overhead, macro_average, summarize, MODE_BASELINE, MODE_EBPF};

    fn run(mode: &str, elapsed: f64) -> RunRecord {
        RunRecord {
            pkg: "p".to_string(),
            input: "in".to_string(),
            threads: Some(1),
            mode: mode.to_string(),
            elapsed_s: Some(elapsed),
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
    fn test_run_records_roundtrip_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_clean.csv");
        write_run_records(&path, &[run(MODE_BASELINE, 2.0)]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert!(header.starts_with("pkg,input,threads,mode,elapsed_s"));
        assert!(header.ends_with("run_idx,exit_code,source_file"));
        // Missing optional counters serialize as empty fields, not zeros.
        assert!(contents.lines().nth(1).unwrap().contains(",,"));
    }

    #[test]
    fn test_summary_header_has_stat_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let summary = summarize(&[run(MODE_BASELINE, 2.0), run(MODE_BASELINE, 2.2)]);
        write_summary(&path, &summary).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert!(header.contains("elapsed_s_count"));
        assert!(header.contains("elapsed_s_median"));
        assert!(header.contains("task_clock_ms_max"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_overhead_columns_are_metric_qualified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overhead_elapsed.csv");
        let summary = summarize(&[run(MODE_BASELINE, 2.0), run(MODE_EBPF, 2.4)]);
        let rows = compute_overhead(&summary, Metric::ElapsedSeconds);
        write_overhead(&path, &rows, Metric::ElapsedSeconds).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("elapsed_s_baseline_mean"));
        assert!(contents.contains("overhead_pct"));
        let data = contents.lines().nth(1).unwrap();
        let pct: f64 = data.split(',').nth(5).unwrap().parse().unwrap();
        assert!((pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macro_overhead.csv");
        let summary = summarize(&[run(MODE_BASELINE, 2.0), run(MODE_EBPF, 2.4)]);
        let rows = compute_overhead(&summary, Metric::ElapsedSeconds);
        let macros = vec![macro_average(&rows, Metric::ElapsedSeconds).unwrap()];
        write_macro(&path, &macros).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let data = contents.lines().nth(1).unwrap();
        assert!(data.starts_with("elapsed_s,"));
        let pct: f64 = data.split(',').nth(1).unwrap().parse().unwrap();
        assert!((pct - 20.0).abs() < 1e-9);
    }
}
