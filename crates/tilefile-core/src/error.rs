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

//! Error types for tile file parsing.
//!
//! Every failure surfaces as one [`TileError`] carrying a message, the
//! 1-based line and column of the failure, and a short excerpt of the source
//! at that point. The finer-grained taxonomy (unclosed string, unknown
//! escape, missing separator, ...) lives in the message; [`TileErrorKind`]
//! splits the family only where callers plausibly branch: plain syntax,
//! embedded-expression validation, path compilation, and security limits.

use crate::lex::coords;
use std::fmt;
use thiserror::Error;

/// How many characters of source to quote after the failure point.
const SNIPPET_LEN: usize = 10;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileErrorKind {
    /// Lexical or structural violation in the tile file itself.
    Syntax,
    /// An embedded host expression failed syntax validation.
    Expression,
    /// An embedded path expression failed to compile.
    Path,
    /// A parser resource limit was exceeded.
    Security,
}

impl fmt::Display for TileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Expression => write!(f, "ExpressionError"),
            Self::Path => write!(f, "PathError"),
            Self::Security => write!(f, "SecurityError"),
        }
    }
}

/// An error raised while parsing a tile file.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}, column {column}: {message}, near {snippet:?}")]
pub struct TileError {
    /// The kind of error.
    pub kind: TileErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// A short excerpt of the source at the failure point (empty at end of
    /// input).
    pub snippet: String,
}

impl TileError {
    /// Create an error positioned at a byte offset into the source text.
    ///
    /// The line/column pair and the snippet are derived from the offset at
    /// construction time, matching how positions are reported to users.
    pub fn at(kind: TileErrorKind, message: impl Into<String>, text: &str, offset: usize) -> Self {
        let pos = coords(text, offset);
        let snippet = text[offset.min(text.len())..]
            .chars()
            .take(SNIPPET_LEN)
            .collect();
        Self {
            kind,
            message: message.into(),
            line: pos.line(),
            column: pos.column(),
            snippet,
        }
    }

    // Convenience constructors for each error kind

    pub fn syntax(message: impl Into<String>, text: &str, offset: usize) -> Self {
        Self::at(TileErrorKind::Syntax, message, text, offset)
    }

    pub fn expression(message: impl Into<String>, text: &str, offset: usize) -> Self {
        Self::at(TileErrorKind::Expression, message, text, offset)
    }

    pub fn path(message: impl Into<String>, text: &str, offset: usize) -> Self {
        Self::at(TileErrorKind::Path, message, text, offset)
    }

    pub fn security(message: impl Into<String>, text: &str, offset: usize) -> Self {
        Self::at(TileErrorKind::Security, message, text, offset)
    }
}

/// Result type for tile file operations.
pub type TileResult<T> = Result<T, TileError>;
