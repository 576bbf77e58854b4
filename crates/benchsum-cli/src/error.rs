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

//! Structured error types for the benchsum CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// The main error type for CLI command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or aggregation failed.
    #[error(transparent)]
    Core(#[from] benchsum_core::CoreError),

    /// Chart rendering failed.
    #[error(transparent)]
    Plot(#[from] benchsum_plot::PlotError),

    /// I/O failure while writing a report file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// CSV serialization failure while writing a report file.
    #[error("failed to write '{path}': {message}")]
    Report {
        /// The report file being written.
        path: PathBuf,
        /// The underlying CSV error message.
        message: String,
    },

    /// No package has both modes for the selected metric/input.
    #[error("no paired (baseline & ebpf) data found for the selected metric/input")]
    NoPairedData,
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a report-writing error with path context.
    pub fn report(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Report {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
