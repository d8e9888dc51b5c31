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

//! Validate command - tile file syntax validation.

use super::read_file;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use tilefile::Entity;

/// Validate tile files and report a per-file status line.
///
/// Prints `✓ <file>` for each file that parses and `✗ <file>` for the first
/// one that does not; the parse error (with line, column and a snippet of
/// the offending text) is returned so the caller can report it and exit
/// non-zero.
pub fn validate(files: &[String]) -> CliResult<()> {
    for file in files {
        let content = read_file(file)?;
        match tilefile::parse(&content) {
            Ok(entity) => {
                println!("{} {}", "✓".green().bold(), file);
                println!("  Top-level: {}", describe(&entity));
            }
            Err(e) => {
                println!("{} {}", "✗".red().bold(), file);
                return Err(CliError::parse(file.as_str(), e));
            }
        }
    }
    Ok(())
}

fn describe(entity: &Entity) -> String {
    match entity {
        Entity::Value(v) => format!("value ({})", v),
        Entity::Item(item) if item.template => format!("template {}", item.type_name),
        Entity::Item(item) => format!("item {}", item.type_name),
        Entity::Assignment(a) => format!("let {}", a.name),
        Entity::Expression(_) => "expression".to_string(),
        Entity::Path(p) => format!("path {}", p.source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_forms() {
        let entity = tilefile::parse("item text { x: 1 }").unwrap();
        assert_eq!(describe(&entity), "item text");

        let entity = tilefile::parse("template t { x: 1 }").unwrap();
        assert_eq!(describe(&entity), "template t");

        let entity = tilefile::parse("let a = 1 + 2").unwrap();
        assert_eq!(describe(&entity), "let a");

        let entity = tilefile::parse("42").unwrap();
        assert_eq!(describe(&entity), "value (42)");
    }
}
