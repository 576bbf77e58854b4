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

//! Summarize command: run the full pipeline and write all report files.

use crate::error::{CliError, Result};
use crate::report;
use benchsum_core::{
    compute_overhead, load_results, macro_average, successful_runs, summarize as summarize_runs,
    Metric,
};
use colored::Colorize;
use std::path::Path;

/// Run the aggregation pipeline over the given file patterns and write
/// the cleaned-rows, summary, per-metric overhead and macro-average CSVs
/// under `out_dir`, printing a recap of everything written.
///
/// A metric whose overhead table is empty (never measured, or missing
/// from every file) is skipped rather than failing the run.
pub fn summarize(files: &[String], out_dir: &Path, tag: &str) -> Result<()> {
    let records = load_results(files)?;

    std::fs::create_dir_all(out_dir).map_err(|e| CliError::io(out_dir, e))?;
    let prefix = match tag.trim() {
        "" => String::new(),
        tag => format!("{tag}_"),
    };

    let clean = successful_runs(&records);
    let clean_path = out_dir.join(format!("{prefix}raw_clean.csv"));
    report::write_run_records(&clean_path, &clean)?;
    println!("{} Wrote: {}", "[OK]".green(), clean_path.display());

    let summary = summarize_runs(&records);
    let summary_path = out_dir.join(format!("{prefix}summary_by_pkg_mode.csv"));
    report::write_summary(&summary_path, &summary)?;
    println!("{} Wrote: {}", "[OK]".green(), summary_path.display());

    let mut macros = Vec::new();
    for metric in Metric::ALL {
        let overhead = compute_overhead(&summary, metric);
        if overhead.is_empty() {
            continue;
        }
        let path = out_dir.join(format!("{prefix}overhead_{}.csv", metric.selector()));
        report::write_overhead(&path, &overhead, metric)?;
        println!("{} Wrote: {}", "[OK]".green(), path.display());

        if let Some(macro_avg) = macro_average(&overhead, metric) {
            println!(
                "    Mean overhead ({}): {:.4} %",
                metric.column(),
                macro_avg.macro_avg_overhead_pct
            );
            macros.push(macro_avg);
        }
    }

    if !macros.is_empty() {
        let macro_path = out_dir.join(format!("{prefix}macro_overhead.csv"));
        report::write_macro(&macro_path, &macros)?;
        println!("{} Macro overhead snapshot:", "[OK]".green());
        for row in &macros {
            println!(
                "    {:<16} {:.4} %",
                row.metric.column(),
                row.macro_avg_overhead_pct
            );
        }
        println!("{} Wrote: {}", "[OK]".green(), macro_path.display());
    }

    Ok(())
}
