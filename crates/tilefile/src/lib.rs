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

//! # Tilefile - declarative tile UI description format
//!
//! Tile files describe trees of typed graphic-item declarations in a
//! JSON-like-but-looser text format: entries may be separated by newlines
//! instead of commas, values may be embedded host expressions or path
//! queries, and `let` bindings declare variables alongside parameters.
//!
//! ## Quick start
//!
//! ```rust
//! use tilefile::{parse, Value};
//!
//! let entity = parse(r#"
//! surface {
//!     title: "Node info"
//!     width: 400
//!     rows: path $.attrs.items()
//! }
//! "#).unwrap();
//!
//! let surface = entity.as_item().unwrap();
//! assert_eq!(surface.type_name, "surface");
//! assert_eq!(surface.get("width"), Some(&Value::Int(400)));
//!
//! let rows = surface.get("rows").unwrap().as_path().unwrap();
//! assert!(rows.path.is_rooted());
//! ```
//!
//! ## Modules
//!
//! - [`tilefile_core`] (re-exported at the root): parsing and the document
//!   model
//! - [`path`]: the standalone path-query compiler
//!
//! The optional `serde` feature enables serialization of parsed documents
//! in the shapes the instantiation layer consumes (items flattened under a
//! `"type"` key, expressions as `{"expression": ...}`, paths as
//! `{"path": ...}`, bindings under `"variables"`).

// Re-export core types
pub use tilefile_core::{
    check_expression,
    // Lexical utilities
    lex,
    // Entry points
    parse,
    parse_at,
    parse_expression,
    parse_with_options,
    // Document model
    Dict,
    Entity,
    GraphicItem,
    HostExpression,
    // Parser configuration
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
    PathExpression,
    // Errors
    TileError,
    TileErrorKind,
    TileResult,
    Value,
    VariableAssignment,
};

/// Path-query compiler.
pub mod path {
    //! Compilation of `$.foo.bar`-style path expressions.
    pub use tilefile_path::{parse, PathError, PathResult, Step, TilePath};
}

/// Validate a tile file without keeping the parsed tree.
///
/// Returns `Ok(())` if the input parses, `Err` with full positional context
/// otherwise.
///
/// # Examples
///
/// ```rust
/// assert!(tilefile::validate("root { x: 1 }").is_ok());
/// assert!(tilefile::validate("root { x: }").is_err());
/// ```
pub fn validate(input: &str) -> TileResult<()> {
    parse(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
