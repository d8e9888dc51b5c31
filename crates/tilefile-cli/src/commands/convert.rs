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

//! To-json command - parse a tile file and emit consumer-shaped JSON.
//!
//! Items flatten into objects with a reserved `"type"` key, embedded
//! expressions become `{"expression": "..."}`, paths `{"path": "..."}`, and
//! `let` bindings collect under `"variables"` — the shapes the downstream
//! instantiation layer expects.

use super::read_file;
use crate::error::{CliError, CliResult};

/// Parse a tile file and print its JSON form to stdout.
pub fn to_json(file: &str, pretty: bool) -> CliResult<()> {
    let content = read_file(file)?;
    let entity = tilefile::parse(&content).map_err(|e| CliError::parse(file, e))?;
    let out = if pretty {
        serde_json::to_string_pretty(&entity)?
    } else {
        serde_json::to_string(&entity)?
    };
    println!("{}", out);
    Ok(())
}
