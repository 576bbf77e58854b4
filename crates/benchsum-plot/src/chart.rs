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

//! Grouped bar chart with min/max whiskers.
//!
//! One category position per package, two bars (baseline, ebpf) offset
//! around it, each bar's height the mode's mean with a vertical line
//! spanning min to max as the uncertainty indicator.

use crate::error::{PlotError, Result};
use benchsum_core::PlotRecord;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;

const TITLE_FONT_SIZE: u32 = 28;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;

/// Half the category width taken by each mode's bar.
const BAR_WIDTH: f64 = 0.38;

const BASELINE_COLOR: RGBColor = RGBColor(66, 133, 244);
const EBPF_COLOR: RGBColor = RGBColor(219, 68, 55);

/// Chart appearance and output destination.
///
/// The output extension picks the backend: `.svg` renders a vector image,
/// anything else rasterizes through the bitmap backend (PNG by default).
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart title drawn above the plot area.
    pub title: String,
    /// Y-axis description (e.g. "Seconds").
    pub y_label: String,
    /// Output image path.
    pub output: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl ChartConfig {
    /// Create a config with the default 1000x500 canvas.
    pub fn new(
        title: impl Into<String>,
        y_label: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            output: output.into(),
            width: 1000,
            height: 500,
        }
    }
}

/// Render the paired records as grouped bars with min/max whiskers.
///
/// # Errors
///
/// Returns [`PlotError::NoData`] for an empty record set and
/// [`PlotError::Render`] when the drawing backend fails (including an
/// unwritable output path).
pub fn render_grouped_bars(records: &[PlotRecord], config: &ChartConfig) -> Result<()> {
    if records.is_empty() {
        return Err(PlotError::NoData);
    }

    let size = (config.width, config.height);
    match config.output.extension().and_then(|e| e.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(&config.output, size).into_drawing_area();
            draw(&root, records, config)
        }
        _ => {
            let root = BitMapBackend::new(&config.output, size).into_drawing_area();
            draw(&root, records, config)
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    records: &[PlotRecord],
    config: &ChartConfig,
) -> Result<()> {
    let err = |e: &dyn std::fmt::Display| PlotError::render(&config.output, e);

    root.fill(&WHITE).map_err(|e| err(&e))?;

    let packages: Vec<String> = records.iter().map(|r| r.pkg.clone()).collect();
    let n = packages.len();
    let y_max = records
        .iter()
        .map(|r| r.baseline.max.max(r.ebpf.max))
        .fold(0.0_f64, f64::max)
        * 1.15;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_max.max(f64::MIN_POSITIVE))
        .map_err(|e| err(&e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < n && (x - idx as f64).abs() < 0.3 {
                packages[idx].clone()
            } else {
                String::new()
            }
        })
        .y_desc(config.y_label.clone())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .draw()
        .map_err(|e| err(&e))?;

    // Baseline bars, centered left of each category position.
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            bar(i as f64 - BAR_WIDTH / 2.0, r.baseline.mean, BASELINE_COLOR)
        }))
        .map_err(|e| err(&e))?
        .label("Baseline")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], BASELINE_COLOR.filled())
        });

    // Instrumented bars, centered right.
    chart
        .draw_series(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| bar(i as f64 + BAR_WIDTH / 2.0, r.ebpf.mean, EBPF_COLOR)),
        )
        .map_err(|e| err(&e))?
        .label("eBPF")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], EBPF_COLOR.filled()));

    // Min..max whiskers over both bars.
    chart
        .draw_series(records.iter().enumerate().flat_map(|(i, r)| {
            let x = i as f64;
            [
                whisker(x - BAR_WIDTH / 2.0, r.baseline.min, r.baseline.max),
                whisker(x + BAR_WIDTH / 2.0, r.ebpf.min, r.ebpf.max),
            ]
        }))
        .map_err(|e| err(&e))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// One mode's bar at the given category center.
fn bar(center: f64, mean: f64, color: RGBColor) -> Rectangle<(f64, f64)> {
    let half = BAR_WIDTH / 2.0 - 0.02;
    Rectangle::new([(center - half, 0.0), (center + half, mean)], color.filled())
}

/// Vertical min..max line at the given bar center.
fn whisker(center: f64, min: f64, max: f64) -> PathElement<(f64, f64)> {
    PathElement::new(vec![(center, min), (center, max)], BLACK.stroke_width(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchsum_core::ModeStats;

    fn record(pkg: &str) -> PlotRecord {
        PlotRecord {
            pkg: pkg.to_string(),
            baseline: ModeStats {
                mean: 2.0,
                min: 1.8,
                max: 2.2,
            },
            ebpf: ModeStats {
                mean: 2.4,
                min: 2.3,
                max: 2.5,
            },
        }
    }

    #[test]
    fn test_empty_records_is_an_error() {
        let config = ChartConfig::new("t", "Seconds", "out.png");
        let err = render_grouped_bars(&[], &config).unwrap_err();
        assert!(matches!(err, PlotError::NoData));
    }

    #[test]
    fn test_config_defaults() {
        let config = ChartConfig::new("t", "Seconds", "out.png");
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 500);
    }

    #[test]
    fn test_unwritable_output_path_is_render_error() {
        let config = ChartConfig::new(
            "t",
            "Seconds",
            "/nonexistent-dir/definitely/missing/out.svg",
        );
        let err = render_grouped_bars(&[record("p")], &config).unwrap_err();
        assert!(matches!(err, PlotError::Render { .. }));
    }
}
