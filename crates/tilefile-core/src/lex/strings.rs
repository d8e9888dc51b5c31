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

//! String literal scanning.
//!
//! Four quote styles are supported: `'...'`, `"..."`, and the triple-quoted
//! multi-line forms `'''...'''` and `"""..."""`. Only the triple-quoted
//! forms may contain literal line breaks. Backslash escapes cover the common
//! control characters plus `\xHH` and `\uHHHH` numeric escapes; decoded
//! content is accumulated chunk-wise so unescaped spans are copied at most
//! once.

use crate::error::{TileError, TileResult};

/// Single-character escapes. Adding an escape is a one-line table edit.
const ESCAPES: &[(u8, char)] = &[
    (b'"', '"'),
    (b'\'', '\''),
    (b'\\', '\\'),
    (b'b', '\u{0008}'),
    (b'f', '\u{000C}'),
    (b'n', '\n'),
    (b'r', '\r'),
    (b't', '\t'),
];

/// Scan a string literal starting at `pos` (which must point at a quote).
///
/// Returns the decoded content and the offset just past the closing quote.
/// With `allow_multiline` false the triple-quoted forms are rejected, which
/// callers use in key position where a multi-line key makes no sense.
pub fn lex_string_literal(
    text: &str,
    pos: usize,
    allow_multiline: bool,
) -> TileResult<(String, usize)> {
    let rest = &text[pos..];
    let (close, multiline) = if rest.starts_with("\"\"\"") {
        ("\"\"\"", true)
    } else if rest.starts_with("'''") {
        ("'''", true)
    } else if rest.starts_with('"') {
        ("\"", false)
    } else if rest.starts_with('\'') {
        ("'", false)
    } else {
        return Err(TileError::syntax("expected string literal", text, pos));
    };

    if multiline && !allow_multiline {
        return Err(TileError::syntax(
            "multi-line string not allowed here",
            text,
            pos,
        ));
    }

    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut cur = pos + close.len();
    // Start of the pending undecoded chunk.
    let mut prev = cur;

    while cur < bytes.len() {
        let b = bytes[cur];
        if !multiline && (b == b'\r' || b == b'\n') {
            return Err(TileError::syntax("unclosed string", text, cur));
        }
        if text[cur..].starts_with(close) {
            out.push_str(&text[prev..cur]);
            return Ok((out, cur + close.len()));
        }
        if b == b'\\' {
            out.push_str(&text[prev..cur]);
            cur = decode_escape(text, cur, &mut out)?;
            prev = cur;
        } else {
            cur += text[cur..].chars().next().map_or(1, char::len_utf8);
        }
    }

    Err(TileError::syntax("unclosed string", text, text.len()))
}

/// Decode one backslash escape starting at `pos`; returns the offset past it.
fn decode_escape(text: &str, pos: usize, out: &mut String) -> TileResult<usize> {
    match text.as_bytes().get(pos + 1).copied() {
        Some(b'x') => {
            let code = hex_digits(text, pos + 2, 2)
                .ok_or_else(|| TileError::syntax("invalid hex escape", text, pos))?;
            // Always valid: two hex digits cannot exceed U+00FF.
            out.push(char::from_u32(code).unwrap());
            Ok(pos + 4)
        }
        Some(b'u') => {
            let code = hex_digits(text, pos + 2, 4)
                .ok_or_else(|| TileError::syntax("invalid hex escape", text, pos))?;
            let ch = char::from_u32(code).ok_or_else(|| {
                TileError::syntax("escape does not encode a valid character", text, pos)
            })?;
            out.push(ch);
            Ok(pos + 6)
        }
        Some(b) => {
            if let Some((_, decoded)) = ESCAPES.iter().find(|(c, _)| *c == b) {
                out.push(*decoded);
                Ok(pos + 2)
            } else {
                let escaped = text[pos + 1..].chars().next().unwrap();
                Err(TileError::syntax(
                    format!("unknown escape char {:?}", escaped),
                    text,
                    pos,
                ))
            }
        }
        None => Err(TileError::syntax("unclosed string", text, pos)),
    }
}

/// Read exactly `count` hex digits starting at `start`.
fn hex_digits(text: &str, start: usize, count: usize) -> Option<u32> {
    let digits = text.get(start..start + count)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
