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

//! CLI command implementations.

mod convert;
mod validate;

pub use convert::to_json;
pub use validate::validate;

use crate::error::{CliError, CliResult};
use std::fs;

/// Read a file into a string, wrapping failures with the path.
pub(crate) fn read_file(path: &str) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}
