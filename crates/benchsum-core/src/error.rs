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

//! Error types for result loading and aggregation.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by the loading and aggregation pipeline.
///
/// Data sparsity (a group with only one mode, a metric with no samples) is
/// never an error; those conditions surface as empty results or `None`
/// fields instead.
///
/// # Examples
///
/// ```
/// use benchsum_core::CoreError;
///
/// let err = CoreError::NoInputFiles {
///     patterns: vec!["results*_*.csv".to_string()],
/// };
/// assert!(err.to_string().contains("no result files"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// No file matched any of the given glob patterns.
    #[error("no result files matched {patterns:?}")]
    NoInputFiles {
        /// The patterns that were searched.
        patterns: Vec<String>,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error message.
        message: String,
    },

    /// I/O failure while resolving or reading a result file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// CSV-level failure while reading a result file.
    #[error("CSV error in '{path}': {message}")]
    Csv {
        /// The file being read.
        path: PathBuf,
        /// The underlying CSV error message.
        message: String,
    },

    /// A required column is missing from a result file's header.
    #[error("missing required column '{column}' in '{path}'")]
    MissingColumn {
        /// The file with the incomplete header.
        path: PathBuf,
        /// The required column name.
        column: &'static str,
    },

    /// The aggregated table carries no data for the requested metric.
    #[error("no aggregated data for metric '{0}'")]
    MetricUnavailable(&'static str),
}

impl CoreError {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a CSV error with file path context.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
