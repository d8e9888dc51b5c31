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

//! Error type for path compilation.

use thiserror::Error;

/// An error raised while compiling a path expression.
///
/// The offset is a byte offset into the source string handed to
/// [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path at offset {offset}: {message}")]
pub struct PathError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Byte offset of the failure in the source text.
    pub offset: usize,
}

impl PathError {
    /// Create a new path error.
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Result type for path compilation.
pub type PathResult<T> = Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathError::new("expected name", 4);
        assert_eq!(format!("{}", err), "invalid path at offset 4: expected name");
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(PathError::new("test", 0));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PathError::new("a", 1), PathError::new("a", 1));
        assert_ne!(PathError::new("a", 1), PathError::new("a", 2));
    }
}
