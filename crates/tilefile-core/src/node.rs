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

//! Entity nodes of a parsed tile file.
//!
//! The parser produces plain owned trees: a [`GraphicItem`] owns its
//! parameter block, which may in turn own nested items. There are no back
//! references, so no arena or indirection is needed.

use crate::value::{Dict, Value};
use tilefile_path::TilePath;

/// A `let NAME = EXPR` binding.
///
/// The expression source is validated at parse time but kept as raw text;
/// resolving the binding is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAssignment {
    /// The bound name.
    pub name: String,
    /// Raw expression source.
    pub source: String,
}

impl VariableAssignment {
    /// Create a new binding.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// An embedded host-language expression.
///
/// The source was validated for syntax when parsed; the compiled form is
/// discarded because evaluation belongs to a downstream engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostExpression {
    /// Raw expression source, trimmed.
    pub source: String,
}

impl HostExpression {
    /// Create a new host expression node.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// An embedded path expression.
///
/// Unlike host expressions, the compiled path is retained: a successful
/// parse already guarantees the path is valid and ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    /// Raw path source, trimmed.
    pub source: String,
    /// The compiled path.
    pub path: TilePath,
}

impl PathExpression {
    /// Create a new path expression node.
    pub fn new(source: impl Into<String>, path: TilePath) -> Self {
        Self {
            source: source.into(),
            path,
        }
    }
}

/// A typed graphic-item declaration: `item TYPE { ... }`, `template TYPE
/// { ... }`, or the anonymous `TYPE { ... }` form.
///
/// `template` records which keyword introduced the item; the two forms are
/// structurally identical at parse time and the distinction is interpreted
/// downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicItem {
    /// Lookup key into the consumer's type registry.
    pub type_name: String,
    /// True when declared with the `template` keyword.
    pub template: bool,
    /// The parameter block, including any `let` bindings.
    pub params: Dict,
}

impl GraphicItem {
    /// Create an empty item of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            template: false,
            params: Dict::new(),
        }
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Look up a `let` binding declared in the parameter block.
    pub fn get_variable(&self, name: &str) -> Option<&VariableAssignment> {
        self.params.get_variable(name)
    }
}

/// One top-level grammar production.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A plain JSON-like value.
    Value(Value),
    /// A graphic-item declaration.
    Item(GraphicItem),
    /// A `let` binding.
    Assignment(VariableAssignment),
    /// A host expression (`expr ...`).
    Expression(HostExpression),
    /// A path expression (`path ...`).
    Path(PathExpression),
}

impl Entity {
    /// Try to get the entity as a plain value.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the entity as a graphic item.
    pub fn as_item(&self) -> Option<&GraphicItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Try to get the entity as a variable assignment.
    pub fn as_assignment(&self) -> Option<&VariableAssignment> {
        match self {
            Self::Assignment(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get the entity as a host expression.
    pub fn as_expression(&self) -> Option<&HostExpression> {
        match self {
            Self::Expression(e) => Some(e),
            _ => None,
        }
    }

    /// Try to get the entity as a path expression.
    pub fn as_path(&self) -> Option<&PathExpression> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_construction() {
        let item = GraphicItem::new("surface");
        assert_eq!(item.type_name, "surface");
        assert!(!item.template);
        assert!(item.params.is_empty());
        assert!(item.get("anything").is_none());
    }

    #[test]
    fn test_item_params() {
        let mut item = GraphicItem::new("text");
        item.params.insert_entry("x".into(), Value::Int(10));
        item.params
            .insert_variable(VariableAssignment::new("v", "1 + 2"));
        assert_eq!(item.get("x"), Some(&Value::Int(10)));
        assert_eq!(item.get_variable("v").unwrap().source, "1 + 2");
    }

    #[test]
    fn test_entity_accessors() {
        let entity = Entity::Value(Value::Int(7));
        assert_eq!(entity.as_value(), Some(&Value::Int(7)));
        assert!(entity.as_item().is_none());

        let entity = Entity::Expression(HostExpression::new("a"));
        assert_eq!(entity.as_expression().unwrap().source, "a");
        assert!(entity.as_assignment().is_none());
        assert!(entity.as_path().is_none());
    }
}
