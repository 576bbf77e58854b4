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

//! End-to-end CLI tests for the benchsum binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::Path;

fn benchsum() -> Command {
    Command::cargo_bin("benchsum").unwrap()
}

fn write_file(dir: &Path, name: &str, contents: &str) {
    let mut f = std::fs::File::create(dir.join(name)).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn summarize_writes_all_reports() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "results_a.csv",
        "pkg,input,threads,mode,elapsed_s,exit_code,run_idx,task_clock_ms\n\
         pkgX,in1,1,baseline,2.0,0,0,2000\n\
         pkgX,in1,1,baseline,666.0,1,1,9999\n",
    );
    write_file(
        dir.path(),
        "results_b.csv",
        "pkg,input,threads,mode,elapsed_s,exit_code,run_idx,cycles\n\
         pkgX,in1,1,ebpf,2.4,0,0,8e9\n",
    );

    let out_dir = dir.path().join("reports");
    let pattern = dir.path().join("results_*.csv").display().to_string();

    benchsum()
        .args(["summarize", "--files", &pattern, "--tag", "run1", "--out"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote:"))
        .stdout(predicate::str::contains("Mean overhead (elapsed_s):"));

    let clean = std::fs::read_to_string(out_dir.join("run1_raw_clean.csv")).unwrap();
    // The exit_code=1 row never reaches the cleaned output.
    assert!(!clean.contains("666"));
    assert_eq!(clean.lines().count(), 3); // header + 2 successful runs

    let summary = std::fs::read_to_string(out_dir.join("run1_summary_by_pkg_mode.csv")).unwrap();
    assert!(summary.contains("elapsed_s_mean"));

    let overhead = std::fs::read_to_string(out_dir.join("run1_overhead_elapsed.csv")).unwrap();
    let pct: f64 = overhead
        .lines()
        .nth(1)
        .unwrap()
        .split(',')
        .nth(5)
        .unwrap()
        .parse()
        .unwrap();
    assert!((pct - 20.0).abs() < 1e-9);

    // task_clock_ms only has baseline data: the overhead table exists but
    // carries no macro row for that metric.
    let taskclock = std::fs::read_to_string(out_dir.join("run1_overhead_taskclock.csv")).unwrap();
    let fields: Vec<&str> = taskclock.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(fields[4], ""); // no ebpf mean
    assert_eq!(fields[5], ""); // overhead undefined

    let macro_table = std::fs::read_to_string(out_dir.join("run1_macro_overhead.csv")).unwrap();
    assert_eq!(macro_table.lines().count(), 2);
    assert!(macro_table.contains("elapsed_s"));
    assert!(!macro_table.contains("task_clock_ms"));
}

#[test]
fn summarize_without_tag_uses_plain_names() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "results_a.csv",
        "pkg,input,threads,mode,elapsed_s,exit_code,run_idx\n\
         pkgX,in1,1,baseline,2.0,0,0\n",
    );
    let out_dir = dir.path().join("reports");
    let pattern = dir.path().join("results_*.csv").display().to_string();

    benchsum()
        .args(["summarize", "--files", &pattern, "--out"])
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("raw_clean.csv").exists());
    assert!(out_dir.join("summary_by_pkg_mode.csv").exists());
    // Only baseline data: the overhead table still exists (partial rows
    // are preserved) but no macro table is written.
    assert!(out_dir.join("overhead_elapsed.csv").exists());
    assert!(!out_dir.join("macro_overhead.csv").exists());
}

#[test]
fn summarize_fails_when_no_files_match() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("results_*.csv").display().to_string();

    benchsum()
        .args(["summarize", "--files", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no result files matched"));
}

#[test]
fn summarize_fails_on_missing_required_column() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "results_a.csv",
        "pkg,input,threads,mode,elapsed_s,run_idx\npkgX,in1,1,baseline,2.0,0\n",
    );
    let pattern = dir.path().join("results_*.csv").display().to_string();

    benchsum()
        .args(["summarize", "--files", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit_code"));
}

#[test]
fn plot_fails_without_paired_data() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "results_a.csv",
        "pkg,input,threads,mode,elapsed_s,exit_code,run_idx\n\
         pkgX,in1,1,baseline,2.0,0,0\n",
    );
    let pattern = dir.path().join("results_*.csv").display().to_string();

    benchsum()
        .args(["plot", "--files", &pattern, "--metric", "elapsed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no paired"));
}

#[test]
fn plot_rejects_unknown_metric_selector() {
    benchsum()
        .args(["plot", "--metric", "cycles"])
        .assert()
        .failure();
}

#[test]
fn help_lists_both_commands() {
    benchsum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("plot"));
}
