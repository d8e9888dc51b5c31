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

//! Property tests for the parser and its position tracking.

use proptest::prelude::*;
use tilefile_core::lex::coords;
use tilefile_core::{parse, Value};

proptest! {
    /// `coords` agrees with a straightforward line/column computation for
    /// any offset into ASCII text.
    #[test]
    fn coords_counts_newlines(text in "[ -~\n]{0,120}", pick in 0usize..1000) {
        let offset = if text.is_empty() { 0 } else { pick % (text.len() + 1) };
        let pos = coords(&text, offset);
        let expected_line = text[..offset].matches('\n').count() + 1;
        let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
        prop_assert_eq!(pos.line(), expected_line);
        prop_assert_eq!(pos.column(), offset - line_start + 1);
    }

    /// Integer literals round-trip through the parser.
    #[test]
    fn integers_round_trip(n in any::<i32>()) {
        let entity = parse(&n.to_string()).unwrap();
        prop_assert_eq!(entity.as_value(), Some(&Value::Int(i64::from(n))));
    }

    /// Escape-free string literals round-trip through the parser.
    #[test]
    fn simple_strings_round_trip(s in "[a-zA-Z0-9 _.+-]{0,40}") {
        let source = format!("\"{}\"", s);
        let entity = parse(&source).unwrap();
        prop_assert_eq!(entity.as_value(), Some(&Value::String(s.clone())));
    }

    /// Dictionary iteration order always equals source order.
    #[test]
    fn dict_keys_keep_source_order(count in 1usize..12) {
        let mut source = String::from("{\n");
        for i in 0..count {
            source.push_str(&format!("  key{}: {}\n", i, i));
        }
        source.push('}');
        let entity = parse(&source).unwrap();
        let binding = entity.as_value().unwrap();
        let dict = binding.as_dict().unwrap();
        let keys: Vec<String> = dict.entries.keys().cloned().collect();
        let expected: Vec<String> = (0..count).map(|i| format!("key{}", i)).collect();
        prop_assert_eq!(keys, expected);
    }

    /// A valid entity surrounded by arbitrary whitespace always consumes
    /// the entire input.
    #[test]
    fn whole_input_is_consumed(before in "[ \t\n]{0,10}", after in "[ \t\n]{0,10}") {
        let source = format!("{}42{}", before, after);
        let entity = parse(&source).unwrap();
        prop_assert_eq!(entity.as_value(), Some(&Value::Int(42)));
    }
}
