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

//! Expression-span extraction and validation.
//!
//! Embedded expressions are not parsed into an AST here; [`parse_expression`]
//! only finds where an expression *ends*, honoring nested brackets and
//! string literals so that an expression may contain commas, braces and line
//! breaks whenever they are enclosed. The extracted source is then handed to
//! [`check_expression`], which validates token-level syntax eagerly and
//! discards the result — evaluation belongs to a downstream engine.

use crate::error::{TileError, TileResult};
use crate::lex::{lex_number, lex_string_literal, skip_line_comment};
use thiserror::Error;

const BRACKETS: &[(u8, u8)] = &[(b'(', b')'), (b'[', b']'), (b'{', b'}')];

fn closer_for(open: u8) -> Option<u8> {
    BRACKETS.iter().find(|(o, _)| *o == open).map(|(_, c)| *c)
}

fn is_closer(b: u8) -> bool {
    BRACKETS.iter().any(|(_, c)| *c == b)
}

/// Extract a raw expression span starting at `pos`.
///
/// Scanning stops at the first character in `enders` seen outside any
/// bracket. Open brackets push their expected closer onto a stack; a closing
/// bracket that does not match the top of the stack is an error at that
/// position, and a bracket still open at end of input is an error at the
/// *opening* bracket's position. Line comments are skipped; string literals
/// are consumed without inspecting their interior.
///
/// Returns the span trimmed of surrounding whitespace, plus the offset where
/// scanning stopped. An empty trimmed span is an error.
pub fn parse_expression(
    text: &str,
    pos: usize,
    enders: &str,
    allow_multiline_strings: bool,
) -> TileResult<(String, usize)> {
    let bytes = text.as_bytes();
    let start = pos;
    let mut cur = pos;
    // Stack of (opening bracket, its offset).
    let mut stack: Vec<(u8, usize)> = Vec::new();

    while cur < bytes.len() {
        let b = bytes[cur];
        if stack.is_empty() && enders.as_bytes().contains(&b) {
            break;
        }
        if closer_for(b).is_some() {
            stack.push((b, cur));
            cur += 1;
        } else if matches!(stack.last(), Some((open, _)) if closer_for(*open) == Some(b)) {
            stack.pop();
            cur += 1;
        } else if is_closer(b) {
            return Err(TileError::syntax(
                format!("unexpected {:?}", b as char),
                text,
                cur,
            ));
        } else if b == b'#' {
            cur = skip_line_comment(text, cur);
        } else if b == b'"' || b == b'\'' {
            let (_, next) = lex_string_literal(text, cur, allow_multiline_strings)?;
            cur = next;
        } else {
            cur += text[cur..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if let Some(&(open, open_pos)) = stack.last() {
        return Err(TileError::syntax(
            format!("unmatched {:?}", open as char),
            text,
            open_pos,
        ));
    }

    let source = text[start..cur].trim();
    if source.is_empty() {
        return Err(TileError::syntax("empty expression", text, start));
    }
    Ok((source.to_string(), cur))
}

/// A syntax failure reported by [`check_expression`].
///
/// The offset is relative to the expression source, not the enclosing
/// document; the caller re-anchors it when wrapping into a [`TileError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct ExprError {
    pub message: String,
    pub offset: usize,
}

impl ExprError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Characters accepted as operators between atoms.
const OPERATOR_CHARS: &[u8] = b"+-*/%<>=!&|^~.,:";

#[derive(Clone, Copy)]
enum Last {
    Atom,
    Operator,
    Open,
}

/// Eagerly validate the syntax of an embedded expression.
///
/// This is the compile-to-validate step: the expression is tokenized —
/// names, numbers, strings, brackets, operators, comments — and rejected if
/// it contains characters outside the expression language, unbalanced
/// brackets, an unterminated string, or ends on a dangling operator. Nothing
/// is kept; the downstream evaluator owns real parsing.
pub fn check_expression(source: &str) -> Result<(), ExprError> {
    let bytes = source.as_bytes();
    let mut stack: Vec<(u8, usize)> = Vec::new();
    let mut last: Option<Last> = None;
    let mut cur = 0;

    while cur < bytes.len() {
        let b = bytes[cur];
        if b.is_ascii_whitespace() {
            cur += 1;
            continue;
        }
        if b == b'#' {
            cur = skip_line_comment(source, cur);
            continue;
        }
        if b == b'"' || b == b'\'' {
            match lex_string_literal(source, cur, true) {
                Ok((_, next)) => cur = next,
                Err(e) => return Err(ExprError::new(e.message, cur)),
            }
            last = Some(Last::Atom);
            continue;
        }
        if let Some((_, next)) = lex_number(source, cur) {
            cur = next;
            last = Some(Last::Atom);
            continue;
        }
        let c = source[cur..].chars().next().unwrap();
        if c.is_alphanumeric() || c == '_' {
            let mut end = cur;
            for nc in source[cur..].chars() {
                if nc.is_alphanumeric() || nc == '_' {
                    end += nc.len_utf8();
                } else {
                    break;
                }
            }
            cur = end;
            last = Some(Last::Atom);
            continue;
        }
        if closer_for(b).is_some() {
            stack.push((b, cur));
            cur += 1;
            last = Some(Last::Open);
            continue;
        }
        if is_closer(b) {
            match stack.pop() {
                Some((open, _)) if closer_for(open) == Some(b) => {
                    cur += 1;
                    last = Some(Last::Atom);
                }
                _ => {
                    return Err(ExprError::new(
                        format!("unmatched {:?}", b as char),
                        cur,
                    ))
                }
            }
            continue;
        }
        if OPERATOR_CHARS.contains(&b) {
            cur += 1;
            last = Some(Last::Operator);
            continue;
        }
        return Err(ExprError::new(
            format!("invalid character {:?} in expression", c),
            cur,
        ));
    }

    if let Some(&(open, open_pos)) = stack.last() {
        return Err(ExprError::new(
            format!("unmatched {:?}", open as char),
            open_pos,
        ));
    }
    match last {
        None => Err(ExprError::new("empty expression", 0)),
        Some(Last::Operator) => Err(ExprError::new(
            "expression ends with an operator",
            source.len(),
        )),
        _ => Ok(()),
    }
}
