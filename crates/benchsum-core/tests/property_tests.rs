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

//! Property tests for the aggregation invariants.

use benchsum_core::{
    compute_overhead, macro_average, summarize, Metric, MetricStats, RunRecord, MODE_BASELINE,
    MODE_EBPF,
};
use proptest::prelude::*;

fn record(pkg: &str, threads: u32, mode: &str, elapsed: Option<f64>, exit: i64) -> RunRecord {
    RunRecord {
        pkg: pkg.to_string(),
        input: "in".to_string(),
        threads: Some(threads),
        mode: mode.to_string(),
        elapsed_s: elapsed,
        task_clock_ms: None,
        cycles: None,
        instructions: None,
        branches: None,
        branch_misses: None,
        ctx: None,
        cmigr: None,
        pgfaults: None,
        run_idx: Some(0),
        exit_code: Some(exit),
        source_file: "results_a.csv".to_string(),
    }
}

proptest! {
    #[test]
    fn stats_are_ordered_and_bounded(samples in prop::collection::vec(0.001f64..1e6, 1..50)) {
        let stats = MetricStats::from_samples(&samples).unwrap();
        prop_assert_eq!(stats.count, samples.len());
        prop_assert!(stats.min <= stats.median);
        prop_assert!(stats.median <= stats.max);
        prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        if stats.count == 1 {
            prop_assert!(stats.std.is_none());
        } else {
            prop_assert!(stats.std.unwrap() >= 0.0);
        }
    }

    #[test]
    fn no_aggregated_cell_has_count_zero(
        elapsed in prop::collection::vec(prop::option::of(0.001f64..1e3), 1..40),
        exits in prop::collection::vec(0i64..3, 1..40),
    ) {
        let records: Vec<RunRecord> = elapsed
            .iter()
            .zip(exits.iter().cycle())
            .enumerate()
            .map(|(i, (e, exit))| {
                let mode = if i % 2 == 0 { MODE_BASELINE } else { MODE_EBPF };
                record("pkg", (i % 3) as u32 + 1, mode, *e, *exit)
            })
            .collect();
        for row in summarize(&records) {
            let has_data = Metric::ALL
                .iter()
                .any(|m| row.stats(*m).is_some());
            prop_assert!(has_data, "cell materialized without data");
            for metric in Metric::ALL {
                if let Some(stats) = row.stats(metric) {
                    prop_assert!(stats.count >= 1);
                }
            }
        }
    }

    #[test]
    fn overhead_matches_formula(baseline in 0.001f64..1e3, ebpf in 0.001f64..1e3) {
        let records = vec![
            record("pkg", 1, MODE_BASELINE, Some(baseline), 0),
            record("pkg", 1, MODE_EBPF, Some(ebpf), 0),
        ];
        let summary = summarize(&records);
        let overhead = compute_overhead(&summary, Metric::ElapsedSeconds);
        prop_assert_eq!(overhead.len(), 1);
        let expected = (ebpf - baseline) / baseline * 100.0;
        prop_assert_eq!(overhead[0].overhead_pct.unwrap(), expected);
    }

    #[test]
    fn macro_average_is_bounded_by_defined_overheads(
        pairs in prop::collection::vec((0.001f64..1e3, 0.001f64..1e3), 1..10),
    ) {
        let mut records = Vec::new();
        for (i, (baseline, ebpf)) in pairs.iter().enumerate() {
            let pkg = format!("pkg{i}");
            records.push(record(&pkg, 1, MODE_BASELINE, Some(*baseline), 0));
            records.push(record(&pkg, 1, MODE_EBPF, Some(*ebpf), 0));
        }
        let summary = summarize(&records);
        let overhead = compute_overhead(&summary, Metric::ElapsedSeconds);
        let defined: Vec<f64> = overhead.iter().filter_map(|r| r.overhead_pct).collect();
        let macro_avg = macro_average(&overhead, Metric::ElapsedSeconds).unwrap();
        let lo = defined.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = defined.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(macro_avg.macro_avg_overhead_pct >= lo - 1e-9);
        prop_assert!(macro_avg.macro_avg_overhead_pct <= hi + 1e-9);
    }
}
