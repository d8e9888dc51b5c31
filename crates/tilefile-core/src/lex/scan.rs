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

//! Scanners for bare names, numbers, and symbol keywords.

use crate::error::{TileError, TileResult};

/// Symbol keywords and their meanings. Adding a symbol is a one-line table
/// edit.
pub const SYMBOLS: &[(&str, Symbol)] = &[
    ("true", Symbol::True),
    ("false", Symbol::False),
    ("null", Symbol::Null),
];

/// A fixed keyword standing for a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    True,
    False,
    Null,
}

/// A scanned numeric literal, integer and floating forms distinguished at
/// lex time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// True for characters that end a bare name.
///
/// Bare names exclude the structural characters of the format (quotes,
/// braces, brackets, comma, backslash) plus whitespace, `:` and `=`, so that
/// keys, type names and identifiers all terminate where the surrounding
/// grammar resumes.
fn ends_bare_name(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\\' | '\'' | '"' | '{' | '}' | '[' | ']' | ',' | ':' | '='
        )
}

/// Scan a bare (unquoted) name at `pos`, skipping leading whitespace.
///
/// Fails if the run is empty.
pub fn lex_bare_name(text: &str, pos: usize) -> TileResult<(String, usize)> {
    let mut start = pos;
    for c in text[pos..].chars() {
        if c.is_whitespace() {
            start += c.len_utf8();
        } else {
            break;
        }
    }
    let mut end = start;
    for c in text[start..].chars() {
        if ends_bare_name(c) {
            break;
        }
        end += c.len_utf8();
    }
    if end == start {
        return Err(TileError::syntax("expected name", text, start));
    }
    Ok((text[start..end].to_string(), end))
}

/// Try to scan a numeric literal at `pos`.
///
/// Accepts an optional sign, an integer part, an optional fraction, and an
/// optional exponent. Returns `None` when `pos` does not start a number; the
/// caller decides whether that is an error.
pub fn lex_number(text: &str, pos: usize) -> Option<(Number, usize)> {
    let bytes = text.as_bytes();
    let mut end = pos;
    if matches!(bytes.get(end).copied(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while matches!(bytes.get(end), Some(b) if b.is_ascii_digit()) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut is_float = false;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while matches!(bytes.get(frac_end), Some(b) if b.is_ascii_digit()) {
            frac_end += 1;
        }
        if int_digits == 0 && frac_end == frac_start {
            // A lone "." (or "-.") is not a number.
            return None;
        }
        is_float = true;
        end = frac_end;
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end).copied(), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end).copied(), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b) if b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            is_float = true;
            end = exp_end;
        }
        // A bare "e" with no digits is left for the caller to reject.
    }

    let literal = &text[pos..end];
    if is_float {
        literal.parse::<f64>().ok().map(|v| (Number::Float(v), end))
    } else {
        match literal.parse::<i64>() {
            Ok(v) => Some((Number::Int(v), end)),
            // Integers beyond i64 degrade to floating point.
            Err(_) => literal.parse::<f64>().ok().map(|v| (Number::Float(v), end)),
        }
    }
}

/// Try to match a symbol keyword (`true`, `false`, `null`) at `pos`.
///
/// The keyword must end at a non-name character so that `trueish` scans as a
/// bare name rather than a symbol.
pub fn lex_symbol(text: &str, pos: usize) -> Option<(Symbol, usize)> {
    for (keyword, symbol) in SYMBOLS {
        if text[pos..].starts_with(keyword) {
            let end = pos + keyword.len();
            let at_boundary = text[end..]
                .chars()
                .next()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            if at_boundary {
                return Some((*symbol, end));
            }
        }
    }
    None
}
