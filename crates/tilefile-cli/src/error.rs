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

//! Structured error types for the tile file CLI.

use thiserror::Error;
use tilefile::TileError;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// Tile file parsing failed.
    #[error("{path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: String,
        /// The parser error, with line/column/snippet context.
        source: TileError,
    },

    /// JSON serialization failed.
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wrap an I/O error with its file path.
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a parse error with its file path.
    pub fn parse(path: impl Into<String>, source: TileError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io(
            "missing.tile",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let shown = format!("{}", err);
        assert!(shown.contains("missing.tile"));
        assert!(shown.contains("no such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = tilefile::parse("{").unwrap_err();
        let err = CliError::parse("bad.tile", parse_err);
        let shown = format!("{}", err);
        assert!(shown.contains("bad.tile"));
        assert!(shown.contains("line 1"));
    }
}
