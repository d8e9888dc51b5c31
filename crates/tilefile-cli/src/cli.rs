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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliResult;
use clap::Subcommand;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate tile files for syntax errors
    Validate {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Parse a tile file and print it as JSON
    ToJson {
        /// File to convert
        file: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> CliResult<()> {
        match self {
            Commands::Validate { files } => commands::validate(&files),
            Commands::ToJson { file, pretty } => commands::to_json(&file, pretty),
        }
    }
}
