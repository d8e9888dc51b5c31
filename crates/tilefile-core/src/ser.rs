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

//! Serialization of parsed documents (feature = "serde").
//!
//! The output follows the shapes the instantiation layer consumes rather
//! than a mechanical encoding of the Rust types:
//!
//! - graphic items flatten into an object with a reserved `"type"` key (and
//!   `"template": true` when declared with the `template` keyword);
//! - host expressions become `{"expression": "..."}`;
//! - path expressions become `{"path": "..."}` (the compiled path is an
//!   in-memory artifact and is not serialized);
//! - `let` bindings collect under a `"variables"` key mapping name to raw
//!   expression source.
//!
//! Deserialization is deliberately not provided: documents come from
//! [`parse`](crate::parse), which is what guarantees the validation
//! invariants.

use crate::node::{Entity, GraphicItem, HostExpression, PathExpression, VariableAssignment};
use crate::value::{Dict, Value};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Dict(dict) => dict.serialize(serializer),
            Self::Item(item) => item.serialize(serializer),
            Self::Expression(e) => e.serialize(serializer),
            Self::Path(p) => p.serialize(serializer),
        }
    }
}

/// Bindings serialize as a name-to-source object.
struct Variables<'a>(&'a IndexMap<String, VariableAssignment>);

impl Serialize for Variables<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, assignment) in self.0 {
            map.serialize_entry(name, &assignment.source)?;
        }
        map.end()
    }
}

impl Serialize for Dict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(!self.variables.is_empty());
        let mut map = serializer.serialize_map(Some(self.entries.len() + extra))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        if !self.variables.is_empty() {
            map.serialize_entry("variables", &Variables(&self.variables))?;
        }
        map.end()
    }
}

impl Serialize for GraphicItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1
            + usize::from(self.template)
            + self.params.entries.len()
            + usize::from(!self.params.variables.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", &self.type_name)?;
        if self.template {
            map.serialize_entry("template", &true)?;
        }
        for (key, value) in &self.params.entries {
            map.serialize_entry(key, value)?;
        }
        if !self.params.variables.is_empty() {
            map.serialize_entry("variables", &Variables(&self.params.variables))?;
        }
        map.end()
    }
}

impl Serialize for HostExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("expression", &self.source)?;
        map.end()
    }
}

impl Serialize for PathExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("path", &self.source)?;
        map.end()
    }
}

impl Serialize for VariableAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("expression", &self.source)?;
        map.end()
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Item(item) => item.serialize(serializer),
            Self::Assignment(a) => a.serialize(serializer),
            Self::Expression(e) => e.serialize(serializer),
            Self::Path(p) => p.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        let entity = parse("100").unwrap();
        assert_eq!(serde_json::to_value(&entity).unwrap(), json!(100));
        let entity = parse("true").unwrap();
        assert_eq!(serde_json::to_value(&entity).unwrap(), json!(true));
        let entity = parse("null").unwrap();
        assert_eq!(serde_json::to_value(&entity).unwrap(), json!(null));
    }

    #[test]
    fn test_item_flattens_with_type_key() {
        let entity = parse("root { x: 1, y: \"two\" }").unwrap();
        let out = serde_json::to_string(&entity).unwrap();
        assert_eq!(out, r#"{"type":"root","x":1,"y":"two"}"#);
    }

    #[test]
    fn test_template_flag() {
        let entity = parse("template anchors { x: 10 }").unwrap();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({"type": "anchors", "template": true, "x": 10})
        );
    }

    #[test]
    fn test_expression_and_path_shapes() {
        let entity = parse("root {\n a: expr x + 5\n b: path $.foo.bar\n}").unwrap();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({
                "type": "root",
                "a": {"expression": "x + 5"},
                "b": {"path": "$.foo.bar"},
            })
        );
    }

    #[test]
    fn test_variables_collect_under_key() {
        let entity = parse("root { let x = 500\n foo: 20 }").unwrap();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({
                "type": "root",
                "foo": 20,
                "variables": {"x": "500"},
            })
        );
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let entity = parse("{ zz: 1\n aa: 2\n mm: 3 }").unwrap();
        let out = serde_json::to_string(&entity).unwrap();
        assert_eq!(out, r#"{"zz":1,"aa":2,"mm":3}"#);
    }

    #[test]
    fn test_nested_items() {
        let entity = parse("root {\n child: text { x: 1 }\n}").unwrap();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({"type": "root", "child": {"type": "text", "x": 1}})
        );
    }

    #[test]
    fn test_standalone_assignment() {
        let entity = parse("let x = a + 1").unwrap();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({"name": "x", "expression": "a + 1"})
        );
    }
}
