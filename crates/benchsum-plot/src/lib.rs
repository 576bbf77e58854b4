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

//! Comparison chart rendering for benchmark summaries.
//!
//! Consumes the paired per-package records produced by
//! `benchsum_core::select_plot_rows` and renders a grouped bar chart:
//! baseline and instrumented bars side by side per package, bar heights at
//! the mode means, vertical whiskers spanning each mode's min..max range.
//!
//! # Examples
//!
//! ```no_run
//! use benchsum_core::{load_results, select_plot_rows, summarize, Metric};
//! use benchsum_plot::{render_grouped_bars, ChartConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = load_results(&[])?;
//! let summary = summarize(&records);
//! let rows = select_plot_rows(&summary, Metric::ElapsedSeconds, None)?;
//!
//! let config = ChartConfig::new(
//!     "Elapsed: mean with min/max (baseline vs eBPF)",
//!     Metric::ElapsedSeconds.axis_label(),
//!     "figure_elapsed_minmax.png",
//! );
//! render_grouped_bars(&rows, &config)?;
//! # Ok(())
//! # }
//! ```

mod chart;
mod error;

// Re-export public API
pub use chart::{render_grouped_bars, ChartConfig};
pub use error::{PlotError, Result};
