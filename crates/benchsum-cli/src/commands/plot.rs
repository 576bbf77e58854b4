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

//! Plot command: render the baseline-vs-eBPF comparison chart.

use crate::error::{CliError, Result};
use benchsum_core::{load_results, select_plot_rows, summarize, Metric};
use benchsum_plot::{render_grouped_bars, ChartConfig};
use colored::Colorize;
use std::path::PathBuf;

/// Load results, select one paired record per package and render the
/// grouped bar chart.
///
/// Without an explicit output path the image is auto-named
/// `figure_<metric>_minmax.png`, with the input label appended before the
/// extension when a filter is given.
pub fn plot(
    files: &[String],
    metric: Metric,
    input_filter: Option<&str>,
    out: Option<PathBuf>,
) -> Result<()> {
    let records = load_results(files)?;
    let summary = summarize(&records);
    let rows = select_plot_rows(&summary, metric, input_filter)?;
    if rows.is_empty() {
        return Err(CliError::NoPairedData);
    }

    let mut output =
        out.unwrap_or_else(|| PathBuf::from(format!("figure_{}_minmax.png", metric.selector())));
    let mut title = format!(
        "{}: mean with min/max (baseline vs eBPF)",
        metric.column()
    );
    if let Some(label) = input_filter {
        title.push_str(&format!(" - input={label}"));
        output = with_label(&output, label);
    }

    let config = ChartConfig::new(title, metric.axis_label(), output);
    render_grouped_bars(&rows, &config)?;
    println!("{} Figure written: {}", "[OK]".green(), config.output.display());
    Ok(())
}

/// Append `_label` to a path's file stem, keeping its extension.
fn with_label(path: &PathBuf, label: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{label}.{ext}"),
        None => format!("{stem}_{label}"),
    };
    path.with_file_name(name)
}
