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

//! Security limits for tile file parsing.

/// Configurable limits for parser security.
///
/// Tile files are recursive, so the nesting limit doubles as the guard
/// against stack exhaustion in the recursive-descent parser. Exceeding any
/// limit surfaces as a `Security`-kind error, never a panic.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum nesting depth of dictionaries, arrays and items (default: 128).
    pub max_nest_depth: usize,
    /// Maximum number of entries in a single braced body (default: 10k).
    pub max_object_keys: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64MB
            max_nest_depth: 128,
            max_object_keys: 10_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nest_depth: usize::MAX,
            max_object_keys: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 64 * 1024 * 1024);
        assert_eq!(limits.max_nest_depth, 128);
        assert_eq!(limits.max_object_keys, 10_000);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_nest_depth, usize::MAX);
        assert_eq!(limits.max_object_keys, usize::MAX);
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_input_size: 100,
            max_nest_depth: 4,
            max_object_keys: 8,
        };
        assert_eq!(limits.max_input_size, 100);
        assert_eq!(limits.max_nest_depth, 4);
        assert_eq!(limits.max_object_keys, 8);
    }
}
