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

//! Core parser and document model for the tile file format.
//!
//! Tile files are a JSON-like-but-looser text format describing trees of
//! typed graphic-item declarations, with embedded host expressions, path
//! queries, and variable bindings:
//!
//! ```text
//! surface {
//!     title: "Node info"        # entries separated by newlines or commas
//!     width: 400
//!     rows: path $.attrs.items()
//!     let scale = width / 100
//!     header: text {
//!         html: "Hello"
//!     }
//! }
//! ```
//!
//! [`parse`] turns a complete in-memory buffer into exactly one [`Entity`];
//! embedded expressions are syntax-validated eagerly but never evaluated,
//! and path expressions are compiled through [`tilefile_path`] with the
//! compiled form retained on the node. Parsing is pure and re-entrant:
//! callers on separate threads may parse independent inputs concurrently.
//!
//! # Quick start
//!
//! ```
//! use tilefile_core::{parse, Value};
//!
//! let entity = parse(r#"
//! root {
//!     title: "Node info"
//!     width: 400
//! }
//! "#).unwrap();
//!
//! let item = entity.as_item().unwrap();
//! assert_eq!(item.type_name, "root");
//! assert_eq!(item.get("width"), Some(&Value::Int(400)));
//! ```

mod error;
mod expr;
pub mod lex;
mod limits;
mod node;
mod parser;
#[cfg(feature = "serde")]
mod ser;
mod value;

pub use error::{TileError, TileErrorKind, TileResult};
pub use expr::{check_expression, parse_expression, ExprError};
pub use limits::Limits;
pub use node::{Entity, GraphicItem, HostExpression, PathExpression, VariableAssignment};
pub use parser::{parse, parse_at, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use value::{Dict, Value};

// Compiled-path types surface through `PathExpression`, so re-export them.
pub use tilefile_path::{PathError, Step, TilePath};
