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

//! Error types for chart rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Chart rendering error types.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The paired record set was empty; there is nothing to draw.
    #[error("nothing to plot: no paired baseline/ebpf records")]
    NoData,

    /// The drawing backend failed.
    #[error("chart rendering failed for '{path}': {message}")]
    Render {
        /// The output path being written.
        path: PathBuf,
        /// The backend error message.
        message: String,
    },
}

impl PlotError {
    /// Create a render error with output path context.
    pub fn render(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_display() {
        assert!(PlotError::NoData.to_string().contains("nothing to plot"));
    }

    #[test]
    fn test_render_error_carries_path() {
        let err = PlotError::render("figure_elapsed_minmax.png", "backend unavailable");
        let msg = err.to_string();
        assert!(msg.contains("figure_elapsed_minmax.png"));
        assert!(msg.contains("backend unavailable"));
    }
}
