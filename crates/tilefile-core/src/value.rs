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

//! Value types for tile file documents.

use crate::node::{GraphicItem, HostExpression, PathExpression, VariableAssignment};
use indexmap::IndexMap;
use std::fmt;

/// A braced body: ordered `key: value` entries plus any `let` bindings
/// declared alongside them.
///
/// Entries keep source order. The same structure backs both plain `{...}`
/// value dictionaries and the parameter blocks of graphic items; bindings
/// are kept apart from entries so consumers can aggregate them without
/// scanning for reserved keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict {
    /// Ordered `key: value` entries.
    pub entries: IndexMap<String, Value>,
    /// `let` bindings declared in this body, keyed by name.
    pub variables: IndexMap<String, VariableAssignment>,
}

impl Dict {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a `let` binding by name.
    pub fn get_variable(&self, name: &str) -> Option<&VariableAssignment> {
        self.variables.get(name)
    }

    /// Number of entries (bindings not included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the body holds neither entries nor bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.variables.is_empty()
    }

    /// Insert an entry. A duplicate key replaces both the value and the
    /// position of the earlier occurrence, so iteration order always
    /// reflects the *last* write.
    pub fn insert_entry(&mut self, key: String, value: Value) {
        self.entries.shift_remove(&key);
        self.entries.insert(key, value);
    }

    /// Insert a binding, with the same replacement rule as entries.
    pub fn insert_variable(&mut self, assignment: VariableAssignment) {
        self.variables.shift_remove(&assignment.name);
        self.variables.insert(assignment.name.clone(), assignment);
    }
}

/// A JSON-like value, extended with the node kinds that may appear in entry
/// position: nested graphic items, host expressions, and path expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null literal.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Float(f64),
    /// String literal (escapes decoded).
    String(String),
    /// `[ ... ]` sequence.
    List(Vec<Value>),
    /// `{ ... }` dictionary.
    Dict(Dict),
    /// A nested graphic item declaration.
    Item(Box<GraphicItem>),
    /// An embedded host expression (validated, not evaluated).
    Expression(HostExpression),
    /// An embedded path expression (compiled eagerly).
    Path(PathExpression),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers convert.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the value as a dictionary body.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get the value as a nested graphic item.
    pub fn as_item(&self) -> Option<&GraphicItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Try to get the value as a host expression.
    pub fn as_expression(&self) -> Option<&HostExpression> {
        match self {
            Self::Expression(e) => Some(e),
            _ => None,
        }
    }

    /// Try to get the value as a path expression.
    pub fn as_path(&self) -> Option<&PathExpression> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "[{} items]", items.len()),
            Self::Dict(d) => write!(f, "{{{} entries}}", d.len()),
            Self::Item(item) => write!(f, "item {}", item.type_name),
            Self::Expression(e) => write!(f, "expr {}", e.source),
            Self::Path(p) => write!(f, "path {}", p.source),
        }
    }
}
