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

//! benchsum command-line interface library.
//!
//! The `benchsum` binary summarizes per-run benchmark result CSVs into
//! statistical tables and overhead comparisons (`summarize`) and renders
//! baseline-vs-eBPF comparison charts (`plot`). This library exposes the
//! command definitions and implementations so they can be integration
//! tested.

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;

pub use error::{CliError, Result};
