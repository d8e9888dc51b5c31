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

//! Compiled path representation.

use std::fmt;

/// One step of a compiled path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The document root (`$`).
    Root,
    /// The current item (`@`).
    Current,
    /// Child lookup by key (`.name` or `["name"]`).
    Key(String),
    /// Element lookup by index (`[2]`, `[-1]`).
    Index(i64),
    /// All children (`.*` or `[*]`).
    Wildcard,
    /// Recursive descent to a key at any depth (`..name`).
    Descend(String),
    /// A no-argument accessor call (`.items()`).
    Call(String),
}

fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "$"),
            Self::Current => write!(f, "@"),
            Self::Key(name) if is_plain_name(name) => write!(f, ".{}", name),
            Self::Key(name) => write!(f, "[\"{}\"]", name.replace('\\', "\\\\").replace('"', "\\\"")),
            Self::Index(i) => write!(f, "[{}]", i),
            Self::Wildcard => write!(f, "[*]"),
            Self::Descend(name) => write!(f, "..{}", name),
            Self::Call(name) => write!(f, ".{}()", name),
        }
    }
}

/// A compiled path expression.
///
/// A path is a sequence of [`Step`]s beginning with either [`Step::Root`] or
/// [`Step::Current`]. Compilation only validates and structures the path; how
/// the steps are applied to a data model is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePath {
    steps: Vec<Step>,
}

impl TilePath {
    /// Build a path from pre-validated steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The compiled steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, including the leading anchor.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the path has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if the path is anchored at the document root (`$`).
    pub fn is_rooted(&self) -> bool {
        matches!(self.steps.first(), Some(Step::Root))
    }

    /// True if the path is anchored at the current item (`@`).
    pub fn is_relative(&self) -> bool {
        matches!(self.steps.first(), Some(Step::Current))
    }
}

impl fmt::Display for TilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
