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

//! Result file loading.
//!
//! Resolves glob patterns to a sorted set of CSV result files and reads
//! them into a single list of [`RunRecord`]s. Files produced by different
//! measurement wrappers carry different subsets of the optional perf
//! counter columns; absent columns load as missing values so the combined
//! table is schema-uniform. The literal tokens `""`, `"NA"` and
//! `"<not supported>"` denote missing values, and any other unparsable
//! numeric field coerces to missing rather than failing the load.

use crate::error::{CoreError, Result};
use crate::model::RunRecord;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default file pattern when the caller supplies none.
pub const DEFAULT_PATTERN: &str = "results*_*.csv";

/// Tokens that denote a missing value in result files.
const MISSING_TOKENS: [&str; 3] = ["", "NA", "<not supported>"];

/// Load every result file matching the given glob patterns.
///
/// Patterns default to [`DEFAULT_PATTERN`] when the slice is empty. Matched
/// paths are deduplicated and processed in sorted order; row order within
/// each file is preserved, so the combined output is deterministic.
///
/// # Errors
///
/// Returns [`CoreError::NoInputFiles`] when nothing matches,
/// [`CoreError::InvalidPattern`] for an uncompilable pattern, and
/// [`CoreError::MissingColumn`] when a file's header lacks a required
/// column. I/O and CSV failures abort the load for the affected file.
///
/// # Examples
///
/// ```no_run
/// use benchsum_core::load_results;
///
/// let records = load_results(&["results_2024*_*.csv".to_string()])?;
/// println!("loaded {} runs", records.len());
/// # Ok::<(), benchsum_core::CoreError>(())
/// ```
pub fn load_results(patterns: &[String]) -> Result<Vec<RunRecord>> {
    let patterns: Vec<String> = if patterns.is_empty() {
        vec![DEFAULT_PATTERN.to_string()]
    } else {
        patterns.to_vec()
    };

    let mut paths = BTreeSet::new();
    for pattern in &patterns {
        let matches = glob::glob(pattern).map_err(|e| CoreError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        for entry in matches {
            let path = entry.map_err(|e| CoreError::Io {
                path: e.path().to_path_buf(),
                message: e.error().to_string(),
            })?;
            paths.insert(path);
        }
    }

    if paths.is_empty() {
        return Err(CoreError::NoInputFiles { patterns });
    }

    let mut records = Vec::new();
    for path in &paths {
        read_result_file(path, &mut records)?;
    }
    Ok(records)
}

/// Read one result file, appending its rows to `out`.
fn read_result_file(path: &Path, out: &mut Vec<RunRecord>) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CoreError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| CoreError::csv(path, e))?
        .clone();
    let columns = ColumnIndex::resolve(path, &headers)?;
    let source_file = base_name(path);

    for row in reader.records() {
        let row = row.map_err(|e| CoreError::csv(path, e))?;
        out.push(columns.record(&row, &source_file));
    }
    Ok(())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header positions for one result file.
///
/// Optional perf counter columns resolve to `None` when absent; every row
/// then loads the corresponding field as missing, which is what makes
/// concatenating files with disjoint optional columns safe.
struct ColumnIndex {
    pkg: usize,
    input: usize,
    threads: usize,
    mode: usize,
    elapsed_s: usize,
    run_idx: usize,
    exit_code: usize,
    task_clock_ms: Option<usize>,
    cycles: Option<usize>,
    instructions: Option<usize>,
    branches: Option<usize>,
    branch_misses: Option<usize>,
    ctx: Option<usize>,
    cmigr: Option<usize>,
    pgfaults: Option<usize>,
}

impl ColumnIndex {
    fn resolve(path: &Path, headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| CoreError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
        };

        Ok(Self {
            pkg: require("pkg")?,
            input: require("input")?,
            threads: require("threads")?,
            mode: require("mode")?,
            elapsed_s: require("elapsed_s")?,
            run_idx: require("run_idx")?,
            exit_code: require("exit_code")?,
            task_clock_ms: find("task_clock_ms"),
            cycles: find("cycles"),
            instructions: find("instructions"),
            branches: find("branches"),
            branch_misses: find("branch_misses"),
            ctx: find("ctx"),
            cmigr: find("cmigr"),
            pgfaults: find("pgfaults"),
        })
    }

    fn record(&self, row: &csv::StringRecord, source_file: &str) -> RunRecord {
        let text = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let opt_f64 = |idx: Option<usize>| idx.and_then(|i| parse_f64(row.get(i).unwrap_or("")));

        RunRecord {
            pkg: text(self.pkg),
            input: text(self.input),
            threads: parse_u32(row.get(self.threads).unwrap_or("")),
            mode: text(self.mode),
            elapsed_s: parse_f64(row.get(self.elapsed_s).unwrap_or("")),
            task_clock_ms: opt_f64(self.task_clock_ms),
            cycles: opt_f64(self.cycles),
            instructions: opt_f64(self.instructions),
            branches: opt_f64(self.branches),
            branch_misses: opt_f64(self.branch_misses),
            ctx: opt_f64(self.ctx),
            cmigr: opt_f64(self.cmigr),
            pgfaults: opt_f64(self.pgfaults),
            run_idx: parse_u32(row.get(self.run_idx).unwrap_or("")),
            exit_code: parse_i64(row.get(self.exit_code).unwrap_or("")),
            source_file: source_file.to_string(),
        }
    }
}

fn is_missing(field: &str) -> bool {
    MISSING_TOKENS.contains(&field)
}

fn parse_f64(field: &str) -> Option<f64> {
    if is_missing(field) {
        return None;
    }
    field.parse().ok()
}

fn parse_u32(field: &str) -> Option<u32> {
    if is_missing(field) {
        return None;
    }
    // Some writers emit integers as "4.0"; accept the float form too.
    field
        .parse::<u32>()
        .ok()
        .or_else(|| field.parse::<f64>().ok().filter(|v| v.fract() == 0.0).map(|v| v as u32))
}

fn parse_i64(field: &str) -> Option<i64> {
    if is_missing(field) {
        return None;
    }
    field
        .parse::<i64>()
        .ok()
        .or_else(|| field.parse::<f64>().ok().filter(|v| v.fract() == 0.0).map(|v| v as i64))
}
