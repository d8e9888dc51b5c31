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

//! Lexical analysis for tile files.
//!
//! Every scanner takes the full source text and a byte offset and returns
//! the scanned token together with the offset just past it — offsets are
//! half-open cursors into the original text, which is never copied except to
//! materialize decoded string content.
//!
//! - [`lex_bare_name`], [`lex_number`], [`lex_symbol`]: leaf token scanners
//! - [`lex_string_literal`]: quoted and triple-quoted strings with escapes
//! - [`skip_ws`]: whitespace and `#` line comments, skipped together
//! - [`coords`]: byte offset to 1-based line/column for error reporting

mod pos;
mod scan;
mod strings;

pub use pos::{coords, SourcePos};
pub use scan::{lex_bare_name, lex_number, lex_symbol, Number, Symbol, SYMBOLS};
pub use strings::lex_string_literal;

use memchr::memchr2;

/// Skip whitespace and `#` line comments starting at `pos`.
///
/// Comments run to, but do not include, the line terminator, so they behave
/// exactly like a run of spaces ending at the newline. Stops at end of
/// input; callers that require more input check the returned offset.
pub fn skip_ws(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut cur = pos;
    while cur < bytes.len() {
        let b = bytes[cur];
        if b == b'#' {
            cur = skip_line_comment(text, cur);
        } else if b.is_ascii_whitespace() {
            cur += 1;
        } else {
            break;
        }
    }
    cur
}

/// Skip spaces and tabs only.
pub fn skip_inline_ws(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut cur = pos;
    while matches!(bytes.get(cur).copied(), Some(b' ') | Some(b'\t')) {
        cur += 1;
    }
    cur
}

/// Skip a `#` line comment; returns the offset of the terminator (or end of
/// input). The terminator itself is not consumed.
pub(crate) fn skip_line_comment(text: &str, pos: usize) -> usize {
    debug_assert_eq!(text.as_bytes()[pos], b'#');
    match memchr2(b'\r', b'\n', &text.as_bytes()[pos..]) {
        Some(i) => pos + i,
        None => text.len(),
    }
}

/// Match the newline-based entry separator: inline whitespace, an optional
/// comma, more inline whitespace, an optional line comment, then exactly one
/// line terminator. Returns the offset past the terminator, or `None` if the
/// shape does not match here.
pub(crate) fn match_sep_newline(text: &str, pos: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut cur = skip_inline_ws(text, pos);
    if bytes.get(cur) == Some(&b',') {
        cur += 1;
        cur = skip_inline_ws(text, cur);
    }
    if bytes.get(cur) == Some(&b'#') {
        cur = skip_line_comment(text, cur);
    }
    match bytes.get(cur).copied() {
        Some(b'\r') => {
            if bytes.get(cur + 1) == Some(&b'\n') {
                Some(cur + 2)
            } else {
                Some(cur + 1)
            }
        }
        Some(b'\n') => Some(cur + 1),
        _ => None,
    }
}
