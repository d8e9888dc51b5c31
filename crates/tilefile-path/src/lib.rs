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

//! Path query compiler for tile file data bindings.
//!
//! Tile files bind item parameters to data through small path expressions
//! such as `$.attrs.items()` or `@.name`. This crate compiles the textual
//! form into a [`TilePath`], a validated sequence of typed [`Step`]s. It is
//! intentionally standalone so editors and linters can validate paths
//! without pulling in the document parser.
//!
//! Compilation validates syntax only; applying a path to a data model is the
//! consumer's concern.
//!
//! # Quick start
//!
//! ```
//! use tilefile_path::{parse, Step};
//!
//! let path = parse("$.attrs.items()").unwrap();
//! assert!(path.is_rooted());
//! assert_eq!(path.steps()[2], Step::Call("items".to_string()));
//! assert_eq!(path.to_string(), "$.attrs.items()");
//! ```

mod error;
mod parser;
mod step;

pub use error::{PathError, PathResult};
pub use parser::parse;
pub use step::{Step, TilePath};
