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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::Result;
use benchsum_core::Metric;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Metric selector exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Elapsed wall-clock seconds.
    Elapsed,
    /// Task-clock milliseconds from perf.
    Taskclock,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Elapsed => Metric::ElapsedSeconds,
            MetricArg::Taskclock => Metric::TaskClockMs,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize result files and compute per-metric overheads.
    ///
    /// Writes the cleaned rows, the per-group summary, per-metric overhead
    /// tables and the macro-average table as CSV files under the output
    /// directory, then prints a recap.
    Summarize {
        /// CSV files or glob patterns (default: results*_*.csv).
        #[arg(long, num_args = 0..)]
        files: Vec<String>,

        /// Output directory for report files.
        #[arg(long, default_value = "reports")]
        out: PathBuf,

        /// Optional tag prefixed to report file names.
        #[arg(long, default_value = "")]
        tag: String,
    },

    /// Plot grouped bars with min/max whiskers (baseline vs eBPF).
    Plot {
        /// CSV files or glob patterns (default: results*_*.csv).
        #[arg(long, num_args = 0..)]
        files: Vec<String>,

        /// Metric to plot.
        #[arg(long, value_enum, default_value = "elapsed")]
        metric: MetricArg,

        /// Filter by input label (e.g. simlarge).
        #[arg(long)]
        input: Option<String>,

        /// Output image path; auto-named from metric and input if omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Summarize { files, out, tag } => {
                commands::summarize(&files, &out, &tag)
            }
            Commands::Plot {
                files,
                metric,
                input,
                out,
            } => commands::plot(&files, metric.into(), input.as_deref(), out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_arg_maps_to_metric() {
        assert_eq!(Metric::from(MetricArg::Elapsed), Metric::ElapsedSeconds);
        assert_eq!(Metric::from(MetricArg::Taskclock), Metric::TaskClockMs);
    }
}
