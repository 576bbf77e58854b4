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

//! Aggregation and overhead analysis for benchmark result files.
//!
//! Benchmark harnesses emit one CSV row per timed run of a workload
//! package, executed under a "baseline" and an instrumented "ebpf" mode
//! across thread counts and input sizes. This crate turns those files
//! into comparison tables:
//!
//! 1. [`load_results`] globs and reads the result files into a uniform
//!    list of [`RunRecord`]s, coercing missing and unparsable values.
//! 2. [`summarize`] filters to successful runs and computes descriptive
//!    statistics per (pkg, input, threads, mode) cell.
//! 3. [`compute_overhead`] pivots the cells by mode and derives the
//!    percentage overhead of the instrumented mode over baseline.
//! 4. [`macro_average`] reduces an overhead table to a single unweighted
//!    mean percentage per metric.
//! 5. [`select_plot_rows`] picks one paired record per package for chart
//!    rendering.
//!
//! Everything is batch and in-memory: each invocation recomputes all
//! tables from the input files, and missing data propagates as `None`
//! rather than defaulting to zero anywhere in the pipeline.
//!
//! # Examples
//!
//! ```no_run
//! use benchsum_core::{compute_overhead, load_results, macro_average, summarize, Metric};
//!
//! let records = load_results(&[])?; // default results*_*.csv glob
//! let summary = summarize(&records);
//! let overhead = compute_overhead(&summary, Metric::ElapsedSeconds);
//! if let Some(macro_avg) = macro_average(&overhead, Metric::ElapsedSeconds) {
//!     println!("mean overhead: {:.4} %", macro_avg.macro_avg_overhead_pct);
//! }
//! # Ok::<(), benchsum_core::CoreError>(())
//! ```

mod aggregate;
mod error;
mod load;
mod model;
mod overhead;
mod select;

// Re-export public API
pub use aggregate::{successful_runs, summarize, MetricStats, SummaryRow};
pub use error::{CoreError, Result};
pub use load::{load_results, DEFAULT_PATTERN};
pub use model::{Metric, RunRecord, MODE_BASELINE, MODE_EBPF};
pub use overhead::{compute_overhead, macro_average, MacroOverhead, OverheadRow};
pub use select::{select_plot_rows, ModeStats, PlotRecord};
