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

//! Tile file command line interface.

use clap::Parser;
use std::process::ExitCode;
use tilefile_cli::cli::Commands;

/// Tile file toolkit
///
/// Validate tile files and convert them to JSON.
///
/// # Examples
///
/// ```bash
/// # Validate tile files
/// tilefile validate panel.tile overlay.tile
///
/// # Convert a tile file to JSON
/// tilefile to-json panel.tile --pretty
/// ```
#[derive(Parser)]
#[command(name = "tilefile")]
#[command(author, version, about = "Tile file toolkit", long_about = None)]
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
