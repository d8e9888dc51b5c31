// Tilefile - Declarative Tile UI Description Format
//
// Copyright (c) 2025 the Tilefile contributors.
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

//! Tile file CLI library: command parsing and execution.
//!
//! # Commands
//!
//! - **validate**: parse tile files and report syntax errors with line,
//!   column, and a snippet of the offending text
//! - **to-json**: convert a tile file to the JSON shapes the instantiation
//!   layer consumes

pub mod cli;
pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};
