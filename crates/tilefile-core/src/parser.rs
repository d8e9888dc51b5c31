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

//! Main parser for tile files.
//!
//! The grammar's top-level dispatch lives in [`Parser::parse_entity`]: a
//! reserved keyword (`let`, `path`, `expr`, `item`, `template`) routes to
//! that keyword's constructor, a bare word followed by `{` declares an
//! anonymous typed item, and anything else is a plain JSON-like value.
//! Inside braced bodies the same dispatch applies to entry values, with one
//! extension: a value that is neither a keyword form nor a JSON value is
//! taken as a host-expression span running to the first unbracketed comma,
//! line break, or closing delimiter.
//!
//! Entries in braced bodies may be separated by commas, newlines, or both,
//! with at most one trailing comma; two consecutive separators with nothing
//! between them are rejected.
//!
//! Parsing is all-or-nothing: the single top-level entity must consume the
//! entire input modulo trailing whitespace and comments, and no error is
//! recovered internally.

use crate::error::{TileError, TileResult};
use crate::expr::{check_expression, parse_expression};
use crate::lex::{
    self, lex_bare_name, lex_number, lex_string_literal, lex_symbol, skip_ws, Number, Symbol,
};
use crate::limits::Limits;
use crate::node::{Entity, GraphicItem, HostExpression, PathExpression, VariableAssignment};
use crate::value::{Dict, Value};

/// Entity keywords. Each must be followed by whitespace to dispatch.
const KEYWORDS: &[&str] = &["let", "path", "expr", "item", "template"];

/// Enders for an expression span in entry-value position: the span runs to
/// the first unbracketed comma, line break, or closing delimiter of the
/// enclosing body.
const VALUE_ENDERS: &str = ",\r\n}]";

/// Enders for keyword expression spans: end of line only.
const LINE_ENDERS: &str = "\r\n";

/// Parsing options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum input size in bytes.
    pub fn max_input_size(mut self, bytes: usize) -> Self {
        self.limits.max_input_size = bytes;
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_nest_depth(mut self, depth: usize) -> Self {
        self.limits.max_nest_depth = depth;
        self
    }

    /// Set the maximum number of entries per braced body.
    pub fn max_object_keys(mut self, keys: usize) -> Self {
        self.limits.max_object_keys = keys;
        self
    }

    /// Build the options.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse exactly one entity from `text`.
///
/// Trailing whitespace and comments are allowed after the entity; any other
/// trailing character is an error naming the character and its position.
pub fn parse(text: &str) -> TileResult<Entity> {
    parse_with_options(text, 0, &ParseOptions::default())
}

/// Parse exactly one entity starting at a byte offset, for grammars that
/// embed tile files inside a larger document.
pub fn parse_at(text: &str, offset: usize) -> TileResult<Entity> {
    parse_with_options(text, offset, &ParseOptions::default())
}

/// Parse with explicit options.
pub fn parse_with_options(text: &str, offset: usize, options: &ParseOptions) -> TileResult<Entity> {
    if text.len() > options.limits.max_input_size {
        return Err(TileError::security(
            format!("input exceeds {} bytes", options.limits.max_input_size),
            text,
            0,
        ));
    }
    let parser = Parser {
        text,
        limits: &options.limits,
    };
    let (entity, pos) = parser.parse_entity(offset, 0)?;
    let pos = skip_ws(text, pos);
    if pos < text.len() {
        let c = text[pos..].chars().next().unwrap();
        return Err(TileError::syntax(format!("unexpected {:?}", c), text, pos));
    }
    Ok(entity)
}

struct Parser<'a> {
    text: &'a str,
    limits: &'a Limits,
}

impl Parser<'_> {
    /// Top-level grammar dispatch. `depth` is the nesting level of the
    /// enclosing container, zero at the top.
    fn parse_entity(&self, pos: usize, depth: usize) -> TileResult<(Entity, usize)> {
        let pos = skip_ws(self.text, pos);
        if let Some((keyword, after)) = self.match_keyword(pos) {
            return match keyword {
                "let" => {
                    let (a, next) = self.parse_let(after)?;
                    Ok((Entity::Assignment(a), next))
                }
                "path" => {
                    let (p, next) = self.parse_path(after)?;
                    Ok((Entity::Path(p), next))
                }
                "expr" => {
                    let (e, next) = self.parse_expr(after)?;
                    Ok((Entity::Expression(e), next))
                }
                "item" => {
                    let (i, next) = self.parse_item(after, depth, false)?;
                    Ok((Entity::Item(i), next))
                }
                "template" => {
                    let (i, next) = self.parse_item(after, depth, true)?;
                    Ok((Entity::Item(i), next))
                }
                _ => unreachable!("keyword table out of sync"),
            };
        }
        if let Some((name, brace)) = self.match_item_head(pos) {
            let (params, next) = self.parse_dict(brace, depth + 1)?;
            let item = GraphicItem {
                type_name: name,
                template: false,
                params,
            };
            return Ok((Entity::Item(item), next));
        }
        let (value, next) = self.parse_value(pos, depth)?;
        Ok((Entity::Value(value), next))
    }

    /// Match `KEYWORD WHITESPACE` at `pos`; returns the keyword and the
    /// offset of the first character after the whitespace.
    fn match_keyword(&self, pos: usize) -> Option<(&'static str, usize)> {
        for keyword in KEYWORDS {
            if self.text[pos..].starts_with(keyword) {
                let end = pos + keyword.len();
                let followed_by_ws = self.text[end..]
                    .chars()
                    .next()
                    .is_some_and(char::is_whitespace);
                if followed_by_ws {
                    return Some((keyword, skip_ws(self.text, end)));
                }
            }
        }
        None
    }

    /// Match `IDENTIFIER { ` at `pos` without consuming the brace. The
    /// identifier is restricted to word characters so that expression-like
    /// values never read as item heads.
    fn match_item_head(&self, pos: usize) -> Option<(String, usize)> {
        let (name, after) = lex_bare_name(self.text, pos).ok()?;
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return None;
        }
        let brace = skip_ws(self.text, after);
        if self.text.as_bytes().get(brace) == Some(&b'{') {
            Some((name, brace))
        } else {
            None
        }
    }

    /// Parse a JSON-like value; fails if the next character cannot start
    /// one.
    fn parse_value(&self, pos: usize, depth: usize) -> TileResult<(Value, usize)> {
        let pos = skip_ws(self.text, pos);
        match self.try_value(pos, depth)? {
            Some(ok) => Ok(ok),
            None if pos >= self.text.len() => Err(TileError::syntax(
                "expected value but found end of input",
                self.text,
                pos,
            )),
            None => Err(TileError::syntax("expected a value", self.text, pos)),
        }
    }

    /// Try to parse a JSON-like value at `pos` (whitespace already
    /// skipped). `Ok(None)` means the next character cannot start a value;
    /// errors inside a recognized value propagate.
    fn try_value(&self, pos: usize, depth: usize) -> TileResult<Option<(Value, usize)>> {
        match self.text.as_bytes().get(pos).copied() {
            None => Ok(None),
            Some(b'{') => {
                let (dict, next) = self.parse_dict(pos, depth + 1)?;
                Ok(Some((Value::Dict(dict), next)))
            }
            Some(b'[') => {
                let (items, next) = self.parse_array(pos, depth + 1)?;
                Ok(Some((Value::List(items), next)))
            }
            Some(b'"') | Some(b'\'') => {
                let (s, next) = lex_string_literal(self.text, pos, true)?;
                Ok(Some((Value::String(s), next)))
            }
            Some(_) => {
                if let Some((symbol, next)) = lex_symbol(self.text, pos) {
                    let value = match symbol {
                        Symbol::True => Value::Bool(true),
                        Symbol::False => Value::Bool(false),
                        Symbol::Null => Value::Null,
                    };
                    return Ok(Some((value, next)));
                }
                if let Some((number, next)) = lex_number(self.text, pos) {
                    let value = match number {
                        Number::Int(n) => Value::Int(n),
                        Number::Float(n) => Value::Float(n),
                    };
                    return Ok(Some((value, next)));
                }
                Ok(None)
            }
        }
    }

    /// Parse a value in entry position: keyword forms and anonymous items
    /// dispatch as entities, JSON values parse plainly, and anything else is
    /// taken as a host-expression span.
    fn parse_entry_value(&self, pos: usize, depth: usize) -> TileResult<(Value, usize)> {
        let pos = skip_ws(self.text, pos);
        if let Some((keyword, after)) = self.match_keyword(pos) {
            return match keyword {
                "let" => Err(TileError::syntax(
                    "variable assignment cannot be used as a value",
                    self.text,
                    pos,
                )),
                "path" => {
                    let (p, next) = self.parse_path(after)?;
                    Ok((Value::Path(p), next))
                }
                "expr" => {
                    let (e, next) = self.parse_expr(after)?;
                    Ok((Value::Expression(e), next))
                }
                "item" => {
                    let (i, next) = self.parse_item(after, depth, false)?;
                    Ok((Value::Item(Box::new(i)), next))
                }
                "template" => {
                    let (i, next) = self.parse_item(after, depth, true)?;
                    Ok((Value::Item(Box::new(i)), next))
                }
                _ => unreachable!("keyword table out of sync"),
            };
        }
        if let Some((name, brace)) = self.match_item_head(pos) {
            let (params, next) = self.parse_dict(brace, depth + 1)?;
            let item = GraphicItem {
                type_name: name,
                template: false,
                params,
            };
            return Ok((Value::Item(Box::new(item)), next));
        }
        if let Some((value, next)) = self.try_value(pos, depth)? {
            return Ok((value, next));
        }
        let (source, next) = parse_expression(self.text, pos, VALUE_ENDERS, true)?;
        self.validate_expression(&source, pos)?;
        Ok((Value::Expression(HostExpression::new(source)), next))
    }

    /// Parse a `{ ... }` body.
    fn parse_dict(&self, pos: usize, depth: usize) -> TileResult<(Dict, usize)> {
        self.check_depth(depth, pos)?;
        let text = self.text;
        let bytes = text.as_bytes();
        if bytes.get(pos) != Some(&b'{') {
            return Err(TileError::syntax("expected '{'", text, pos));
        }

        let mut dict = Dict::new();
        let mut pos = pos + 1;
        while pos < text.len() {
            let start = pos;
            pos = skip_ws(text, pos);
            match bytes.get(pos).copied() {
                None => break,
                Some(b'}') => return Ok((dict, pos + 1)),
                _ => {}
            }

            // `let` in entry position declares a binding instead of an
            // entry.
            if let Some(("let", after)) = self.match_keyword(pos) {
                let (assignment, next) = self.parse_let(after)?;
                dict.insert_variable(assignment);
                pos = self.parse_sep(next, b'}')?;
                assert!(pos > start, "dict parser did not advance");
                continue;
            }

            let key = match bytes.get(pos).copied() {
                Some(b'"') | Some(b'\'') => {
                    let (k, next) = lex_string_literal(text, pos, false)?;
                    pos = next;
                    k
                }
                _ => match lex_bare_name(text, pos) {
                    Ok((k, next)) => {
                        pos = next;
                        k
                    }
                    Err(_) => return Err(TileError::syntax("expected key", text, pos)),
                },
            };

            pos = skip_ws(text, pos);
            match bytes.get(pos).copied() {
                Some(b':') => pos += 1,
                Some(_) => {
                    let c = text[pos..].chars().next().unwrap();
                    return Err(TileError::syntax(
                        format!("expected ':' but found {:?}", c),
                        text,
                        pos,
                    ));
                }
                None => {
                    return Err(TileError::syntax(
                        "expected ':' but found end of input",
                        text,
                        pos,
                    ))
                }
            }

            pos = skip_ws(text, pos);
            if pos >= text.len() {
                return Err(TileError::syntax(
                    "expected value but found end of input",
                    text,
                    pos,
                ));
            }
            let (value, next) = self.parse_entry_value(pos, depth)?;
            if dict.len() >= self.limits.max_object_keys {
                return Err(TileError::security("too many keys in object", text, pos));
            }
            dict.insert_entry(key, value);

            pos = self.parse_sep(next, b'}')?;
            assert!(pos > start, "dict parser did not advance");
        }
        Err(TileError::syntax(
            "expected '}' but found end of input",
            text,
            text.len(),
        ))
    }

    /// Parse a `[ ... ]` sequence with the same separator tolerance as
    /// braced bodies.
    fn parse_array(&self, pos: usize, depth: usize) -> TileResult<(Vec<Value>, usize)> {
        self.check_depth(depth, pos)?;
        let text = self.text;
        if text.as_bytes().get(pos) != Some(&b'[') {
            return Err(TileError::syntax("expected '['", text, pos));
        }

        let mut items = Vec::new();
        let mut pos = pos + 1;
        while pos < text.len() {
            let start = pos;
            pos = skip_ws(text, pos);
            match text.as_bytes().get(pos).copied() {
                None => break,
                Some(b']') => return Ok((items, pos + 1)),
                _ => {}
            }
            let (value, next) = self.parse_entry_value(pos, depth)?;
            items.push(value);
            pos = self.parse_sep(next, b']')?;
            assert!(pos > start, "array parser did not advance");
        }
        Err(TileError::syntax(
            "expected ']' but found end of input",
            text,
            text.len(),
        ))
    }

    /// Consume the separator between two entries: either the newline form
    /// (optional comma before a line terminator) or a literal comma, or
    /// nothing if the closing delimiter is next.
    fn parse_sep(&self, pos: usize, end: u8) -> TileResult<usize> {
        if let Some(next) = lex::match_sep_newline(self.text, pos) {
            return Ok(next);
        }
        let pos = skip_ws(self.text, pos);
        match self.text.as_bytes().get(pos).copied() {
            Some(b',') => Ok(pos + 1),
            Some(c) if c == end => Ok(pos),
            Some(_) => Err(TileError::syntax("expected ','", self.text, pos)),
            None => Err(TileError::syntax(
                "expected ',' but found end of input",
                self.text,
                pos,
            )),
        }
    }

    /// `let NAME = EXPR`, the expression validated eagerly.
    fn parse_let(&self, pos: usize) -> TileResult<(VariableAssignment, usize)> {
        let (name, pos) = lex_bare_name(self.text, pos)?;
        let pos = lex::skip_inline_ws(self.text, pos);
        let pos = match self.text.as_bytes().get(pos).copied() {
            Some(b'=') => lex::skip_inline_ws(self.text, pos + 1),
            _ => return Err(TileError::syntax("expected '='", self.text, pos)),
        };
        let (source, next) = parse_expression(self.text, pos, LINE_ENDERS, true)?;
        self.validate_expression(&source, pos)?;
        Ok((VariableAssignment::new(name, source), next))
    }

    /// `expr EXPR`, validated and kept as raw source.
    fn parse_expr(&self, pos: usize) -> TileResult<(HostExpression, usize)> {
        let (source, next) = parse_expression(self.text, pos, LINE_ENDERS, true)?;
        self.validate_expression(&source, pos)?;
        Ok((HostExpression::new(source), next))
    }

    /// `path PATH`, compiled eagerly through the path compiler. Compile
    /// failures carry the path compiler's message verbatim.
    fn parse_path(&self, pos: usize) -> TileResult<(PathExpression, usize)> {
        let (source, next) = parse_expression(self.text, pos, LINE_ENDERS, true)?;
        let path = tilefile_path::parse(&source)
            .map_err(|e| TileError::path(e.to_string(), self.text, pos))?;
        Ok((PathExpression::new(source, path), next))
    }

    /// `item NAME { ... }` / `template NAME { ... }`; the two share one
    /// constructor.
    fn parse_item(
        &self,
        pos: usize,
        depth: usize,
        template: bool,
    ) -> TileResult<(GraphicItem, usize)> {
        let (name, pos) = lex_bare_name(self.text, pos)?;
        let brace = skip_ws(self.text, pos);
        let (params, next) = self.parse_dict(brace, depth + 1)?;
        Ok((
            GraphicItem {
                type_name: name,
                template,
                params,
            },
            next,
        ))
    }

    fn validate_expression(&self, source: &str, offset: usize) -> TileResult<()> {
        check_expression(source).map_err(|e| {
            TileError::expression(
                format!("error compiling expression: {}", e),
                self.text,
                offset,
            )
        })
    }

    fn check_depth(&self, depth: usize, pos: usize) -> TileResult<()> {
        if depth > self.limits.max_nest_depth {
            return Err(TileError::security("nesting too deep", self.text, pos));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileErrorKind;

    fn parsed_value(text: &str) -> Value {
        match parse(text).unwrap() {
            Entity::Value(v) => v,
            other => panic!("expected value, got {:?}", other),
        }
    }

    fn parsed_item(text: &str) -> GraphicItem {
        match parse(text).unwrap() {
            Entity::Item(item) => item,
            other => panic!("expected item, got {:?}", other),
        }
    }

    // ==================== Literals ====================

    #[test]
    fn test_parse_literals() {
        assert_eq!(parsed_value("100"), Value::Int(100));
        assert_eq!(parsed_value("  -12.455\n\n  "), Value::Float(-12.455));
        assert_eq!(parsed_value("true"), Value::Bool(true));
        assert_eq!(parsed_value("\n false \n "), Value::Bool(false));
        assert_eq!(parsed_value(" null"), Value::Null);
        assert_eq!(parsed_value("'hi'"), Value::String("hi".into()));
    }

    // ==================== Keyword dispatch ====================

    #[test]
    fn test_top_level_let() {
        let entity = parse("let foo = env.x + 10").unwrap();
        let assignment = entity.as_assignment().unwrap();
        assert_eq!(assignment.name, "foo");
        assert_eq!(assignment.source, "env.x + 10");
    }

    #[test]
    fn test_top_level_expr() {
        let entity = parse("expr x + 5").unwrap();
        assert_eq!(entity.as_expression().unwrap().source, "x + 5");
    }

    #[test]
    fn test_top_level_path() {
        let entity = parse("path $.foo.bar").unwrap();
        let path = entity.as_path().unwrap();
        assert_eq!(path.source, "$.foo.bar");
        assert_eq!(path.path.to_string(), "$.foo.bar");
    }

    #[test]
    fn test_item_and_template_keywords() {
        let item = parsed_item("item text { x: 1 }");
        assert_eq!(item.type_name, "text");
        assert!(!item.template);

        let tpl = parsed_item("template anchors { x: 10 }");
        assert_eq!(tpl.type_name, "anchors");
        assert!(tpl.template);
    }

    #[test]
    fn test_template_requires_name() {
        let err = parse("template {\n x: 10\n}").unwrap_err();
        assert_eq!(err.kind, TileErrorKind::Syntax);
        assert!(err.message.contains("expected name"));
    }

    #[test]
    fn test_anonymous_item() {
        let item = parsed_item("root { foo: 20 }");
        assert_eq!(item.type_name, "root");
        assert_eq!(item.get("foo"), Some(&Value::Int(20)));
    }

    #[test]
    fn test_keyword_needs_trailing_whitespace() {
        // "lettuce" must not dispatch as `let`.
        let item = parsed_item("lettuce { x: 1 }");
        assert_eq!(item.type_name, "lettuce");
    }

    // ==================== Entry values ====================

    #[test]
    fn test_entry_value_expression_fallback() {
        let item = parsed_item("root {\n bar: (y / 2)\n}");
        assert_eq!(
            item.get("bar").unwrap().as_expression().unwrap().source,
            "(y / 2)"
        );
    }

    #[test]
    fn test_entry_value_expression_stops_at_comma() {
        let item = parsed_item("root {\n a: x + 10, b: 2\n}");
        assert_eq!(item.get("a").unwrap().as_expression().unwrap().source, "x + 10");
        assert_eq!(item.get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_entry_value_single_line_body() {
        let item = parsed_item("root {x: y}");
        assert_eq!(item.get("x").unwrap().as_expression().unwrap().source, "y");
    }

    #[test]
    fn test_let_not_allowed_as_value() {
        let err = parse("root {\n a: let b = 1\n}").unwrap_err();
        assert!(err.message.contains("cannot be used as a value"));
    }

    #[test]
    fn test_invalid_entry_expression_is_rejected() {
        let err = parse("root {\n a: q $ z\n}").unwrap_err();
        assert_eq!(err.kind, TileErrorKind::Expression);
        assert!(err.message.contains("error compiling expression"));
    }

    // ==================== Options and limits ====================

    #[test]
    fn test_builder() {
        let options = ParseOptions::builder()
            .max_input_size(10)
            .max_nest_depth(3)
            .max_object_keys(5)
            .build();
        assert_eq!(options.limits.max_input_size, 10);
        assert_eq!(options.limits.max_nest_depth, 3);
        assert_eq!(options.limits.max_object_keys, 5);
    }

    #[test]
    fn test_input_size_limit() {
        let options = ParseOptions::builder().max_input_size(4).build();
        let err = parse_with_options("12345", 0, &options).unwrap_err();
        assert_eq!(err.kind, TileErrorKind::Security);
    }

    #[test]
    fn test_nest_depth_limit() {
        let options = ParseOptions::builder().max_nest_depth(3).build();
        let err = parse_with_options("[[[[1]]]]", 0, &options).unwrap_err();
        assert_eq!(err.kind, TileErrorKind::Security);
        assert!(err.message.contains("nesting too deep"));

        assert!(parse_with_options("[[[1]]]", 0, &options).is_ok());
    }

    #[test]
    fn test_object_keys_limit() {
        let options = ParseOptions::builder().max_object_keys(2).build();
        let err = parse_with_options("{a: 1, b: 2, c: 3}", 0, &options).unwrap_err();
        assert_eq!(err.kind, TileErrorKind::Security);
    }

    // ==================== Offsets and trailing input ====================

    #[test]
    fn test_parse_at_offset() {
        let text = "ignored 100";
        let entity = parse_at(text, 7).unwrap();
        assert_eq!(entity.as_value(), Some(&Value::Int(100)));
    }

    #[test]
    fn test_trailing_character_is_error() {
        let err = parse("100 abc").unwrap_err();
        assert!(err.message.contains("unexpected 'a'"));
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_trailing_comments_allowed() {
        assert!(parse("100  # done\n# more\n").is_ok());
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(parse("").is_err());
        assert!(parse("  # just a comment\n").is_err());
    }
}
