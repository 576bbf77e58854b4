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

//! benchsum command line entry point.

use benchsum_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;

/// Summarize benchmark results and compare eBPF overhead against baseline.
///
/// # Examples
///
/// ```bash
/// # Aggregate all result files and write report CSVs
/// benchsum summarize --files 'results*_*.csv' --out reports
///
/// # Plot elapsed-time comparison for the simlarge input
/// benchsum plot --metric elapsed --input simlarge
/// ```
#[derive(Parser)]
#[command(name = "benchsum")]
#[command(author, version, about = "Summarize benchmark results and compute eBPF overhead", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
