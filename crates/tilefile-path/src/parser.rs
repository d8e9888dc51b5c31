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

//! Hand-written scanner for path expressions.
//!
//! A path starts at an anchor (`$` for the document root, `@` for the current
//! item) and is followed by any number of steps:
//!
//! ```text
//! $.attrs.items()      anchor, key, call
//! @.name               anchor, key
//! $.rows[0]["id"]      anchor, key, index, quoted key
//! $..label             anchor, recursive descent
//! $.children[*]        anchor, key, wildcard
//! ```
//!
//! No whitespace is allowed between steps; surrounding whitespace is ignored.

use crate::error::{PathError, PathResult};
use crate::step::{Step, TilePath};

/// Compile a path expression into a [`TilePath`].
///
/// # Examples
///
/// ```
/// use tilefile_path::{parse, Step};
///
/// let path = parse("$.foo.bar").unwrap();
/// assert_eq!(path.steps().len(), 3);
/// assert_eq!(path.to_string(), "$.foo.bar");
///
/// assert!(parse("foo.bar").is_err());
/// ```
pub fn parse(source: &str) -> PathResult<TilePath> {
    let bytes = source.as_bytes();
    let mut pos = skip_leading_ws(bytes, 0);

    let mut steps = Vec::new();
    match bytes.get(pos).copied() {
        Some(b'$') => {
            steps.push(Step::Root);
            pos += 1;
        }
        Some(b'@') => {
            steps.push(Step::Current);
            pos += 1;
        }
        _ => return Err(PathError::new("path must start with '$' or '@'", pos)),
    }

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                let (step, next) = scan_dot_step(bytes, pos)?;
                steps.push(step);
                pos = next;
            }
            b'[' => {
                let (step, next) = scan_bracket_step(bytes, pos)?;
                steps.push(step);
                pos = next;
            }
            c if c.is_ascii_whitespace() => {
                // Only trailing whitespace is tolerated.
                let rest = skip_leading_ws(bytes, pos);
                if rest == bytes.len() {
                    pos = rest;
                } else {
                    return Err(PathError::new("whitespace inside path", pos));
                }
            }
            c => {
                return Err(PathError::new(
                    format!("unexpected character {:?}", c as char),
                    pos,
                ))
            }
        }
    }

    Ok(TilePath::new(steps))
}

fn skip_leading_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Scan a step starting at a `.`: key, call, wildcard, or recursive descent.
fn scan_dot_step(bytes: &[u8], pos: usize) -> PathResult<(Step, usize)> {
    debug_assert_eq!(bytes[pos], b'.');
    match bytes.get(pos + 1).copied() {
        Some(b'.') => {
            let (name, next) = scan_name(bytes, pos + 2)?;
            Ok((Step::Descend(name), next))
        }
        Some(b'*') => Ok((Step::Wildcard, pos + 2)),
        _ => {
            let (name, next) = scan_name(bytes, pos + 1)?;
            if bytes.get(next) == Some(&b'(') {
                if bytes.get(next + 1) == Some(&b')') {
                    Ok((Step::Call(name), next + 2))
                } else {
                    Err(PathError::new("expected ')' to close call", next + 1))
                }
            } else {
                Ok((Step::Key(name), next))
            }
        }
    }
}

/// Scan a bracketed step: `[*]`, `[int]`, `['key']`, or `["key"]`.
fn scan_bracket_step(bytes: &[u8], pos: usize) -> PathResult<(Step, usize)> {
    debug_assert_eq!(bytes[pos], b'[');
    let inner = pos + 1;
    let (step, after) = match bytes.get(inner).copied() {
        Some(b'*') => (Step::Wildcard, inner + 1),
        Some(b'\'') | Some(b'"') => {
            let (key, next) = scan_quoted(bytes, inner)?;
            (Step::Key(key), next)
        }
        Some(b'-') | Some(b'0'..=b'9') => {
            let (index, next) = scan_index(bytes, inner)?;
            (Step::Index(index), next)
        }
        _ => {
            return Err(PathError::new(
                "expected index, quoted key, or '*' after '['",
                inner,
            ))
        }
    };
    if bytes.get(after) == Some(&b']') {
        Ok((step, after + 1))
    } else {
        Err(PathError::new("expected ']'", after))
    }
}

/// Scan a bare name: ASCII letter or underscore, then letters/digits/underscores.
fn scan_name(bytes: &[u8], pos: usize) -> PathResult<(String, usize)> {
    match bytes.get(pos).copied() {
        Some(c) if c.is_ascii_alphabetic() || c == b'_' => {}
        _ => return Err(PathError::new("expected name", pos)),
    }
    let mut end = pos + 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    // Safe: the scanned range is all ASCII.
    let name = std::str::from_utf8(&bytes[pos..end]).unwrap().to_string();
    Ok((name, end))
}

/// Scan a quoted key inside brackets. Supports `\\`, `\'` and `\"` escapes.
fn scan_quoted(bytes: &[u8], pos: usize) -> PathResult<(String, usize)> {
    let quote = bytes[pos];
    let mut out = Vec::new();
    let mut cur = pos + 1;
    while cur < bytes.len() {
        match bytes[cur] {
            b'\\' => match bytes.get(cur + 1).copied() {
                Some(c @ (b'\\' | b'\'' | b'"')) => {
                    out.push(c);
                    cur += 2;
                }
                Some(c) => {
                    return Err(PathError::new(
                        format!("unknown escape {:?} in quoted key", c as char),
                        cur,
                    ))
                }
                None => return Err(PathError::new("unterminated quoted key", cur)),
            },
            c if c == quote => {
                let key = String::from_utf8(out)
                    .map_err(|_| PathError::new("quoted key is not valid UTF-8", pos))?;
                return Ok((key, cur + 1));
            }
            c => {
                out.push(c);
                cur += 1;
            }
        }
    }
    Err(PathError::new("unterminated quoted key", pos))
}

/// Scan a decimal integer index, optionally negative.
fn scan_index(bytes: &[u8], pos: usize) -> PathResult<(i64, usize)> {
    let mut end = pos;
    if bytes.get(end) == Some(&b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return Err(PathError::new("expected digits in index", pos));
    }
    let text = std::str::from_utf8(&bytes[pos..end]).unwrap();
    let index = text
        .parse::<i64>()
        .map_err(|_| PathError::new("index out of range", pos))?;
    Ok((index, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Anchors ====================

    #[test]
    fn test_root_anchor() {
        let path = parse("$").unwrap();
        assert_eq!(path.steps(), &[Step::Root]);
        assert!(path.is_rooted());
    }

    #[test]
    fn test_current_anchor() {
        let path = parse("@").unwrap();
        assert_eq!(path.steps(), &[Step::Current]);
        assert!(path.is_relative());
    }

    #[test]
    fn test_missing_anchor() {
        let err = parse("foo.bar").unwrap_err();
        assert!(err.message.contains("must start"));
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    // ==================== Dot steps ====================

    #[test]
    fn test_dotted_keys() {
        let path = parse("$.foo.bar").unwrap();
        assert_eq!(
            path.steps(),
            &[
                Step::Root,
                Step::Key("foo".into()),
                Step::Key("bar".into())
            ]
        );
    }

    #[test]
    fn test_current_key() {
        let path = parse("@.name").unwrap();
        assert_eq!(path.steps(), &[Step::Current, Step::Key("name".into())]);
    }

    #[test]
    fn test_call_step() {
        let path = parse("$.attrs.items()").unwrap();
        assert_eq!(
            path.steps(),
            &[
                Step::Root,
                Step::Key("attrs".into()),
                Step::Call("items".into())
            ]
        );
    }

    #[test]
    fn test_call_missing_close() {
        let err = parse("$.items(").unwrap_err();
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn test_descend() {
        let path = parse("$..label").unwrap();
        assert_eq!(path.steps(), &[Step::Root, Step::Descend("label".into())]);
    }

    #[test]
    fn test_dot_wildcard() {
        let path = parse("$.rows.*").unwrap();
        assert_eq!(
            path.steps(),
            &[Step::Root, Step::Key("rows".into()), Step::Wildcard]
        );
    }

    #[test]
    fn test_dot_without_name() {
        assert!(parse("$.").is_err());
        assert!(parse("$.123").is_err());
    }

    // ==================== Bracket steps ====================

    #[test]
    fn test_index() {
        let path = parse("$.rows[2]").unwrap();
        assert_eq!(
            path.steps(),
            &[Step::Root, Step::Key("rows".into()), Step::Index(2)]
        );
    }

    #[test]
    fn test_negative_index() {
        let path = parse("$[-1]").unwrap();
        assert_eq!(path.steps(), &[Step::Root, Step::Index(-1)]);
    }

    #[test]
    fn test_quoted_key_double() {
        let path = parse("$[\"not a name\"]").unwrap();
        assert_eq!(path.steps(), &[Step::Root, Step::Key("not a name".into())]);
    }

    #[test]
    fn test_quoted_key_single() {
        let path = parse("$['x y']").unwrap();
        assert_eq!(path.steps(), &[Step::Root, Step::Key("x y".into())]);
    }

    #[test]
    fn test_quoted_key_escapes() {
        let path = parse(r#"$["say \"hi\""]"#).unwrap();
        assert_eq!(path.steps(), &[Step::Root, Step::Key("say \"hi\"".into())]);
    }

    #[test]
    fn test_bracket_wildcard() {
        let path = parse("$.children[*]").unwrap();
        assert_eq!(
            path.steps(),
            &[Step::Root, Step::Key("children".into()), Step::Wildcard]
        );
    }

    #[test]
    fn test_bracket_errors() {
        assert!(parse("$[").is_err());
        assert!(parse("$[]").is_err());
        assert!(parse("$[abc]").is_err());
        assert!(parse("$[1").is_err());
        assert!(parse("$['oops").is_err());
    }

    // ==================== Whitespace and trailing input ====================

    #[test]
    fn test_surrounding_whitespace() {
        let path = parse("  $.a.b  ").unwrap();
        assert_eq!(path.to_string(), "$.a.b");
    }

    #[test]
    fn test_whitespace_inside_rejected() {
        let err = parse("$.a .b").unwrap_err();
        assert!(err.message.contains("whitespace"));
    }

    #[test]
    fn test_garbage_after_step() {
        let err = parse("$.a+1").unwrap_err();
        assert!(err.message.contains("unexpected character"));
    }

    // ==================== Round trips ====================

    #[test]
    fn test_display_round_trip() {
        for source in ["$.foo.bar", "@.name", "$.attrs.items()", "$.rows[0]", "$..label"] {
            let path = parse(source).unwrap();
            assert_eq!(path.to_string(), source);
            // Canonical form re-parses to the same path.
            assert_eq!(parse(&path.to_string()).unwrap(), path);
        }
    }
}
