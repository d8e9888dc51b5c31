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

//! Source position tracking for error reporting.
//!
//! Scanners work in flat byte offsets; positions are only materialized into
//! line/column pairs when an error is constructed. [`coords`] recomputes the
//! pair from the offset every time, it is never cached.

use memchr::{memchr_iter, memrchr};
use std::fmt;

/// A position in source text (line and column, both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePos {
    line: usize,
    column: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Compute the line/column pair for a byte offset into `text`.
///
/// The line is one plus the number of line feeds strictly before `offset`;
/// the column is the character distance from the start of that line, also
/// 1-based. Valid for any `offset` in `0..=text.len()` that lies on a
/// character boundary.
pub fn coords(text: &str, offset: usize) -> SourcePos {
    let offset = offset.min(text.len());
    let before = &text.as_bytes()[..offset];
    let line = memchr_iter(b'\n', before).count() + 1;
    let line_start = memrchr(b'\n', before).map_or(0, |i| i + 1);
    let column = text[line_start..offset].chars().count() + 1;
    SourcePos::new(line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SourcePos tests ====================

    #[test]
    fn test_source_pos_accessors() {
        let pos = SourcePos::new(10, 25);
        assert_eq!(pos.line(), 10);
        assert_eq!(pos.column(), 25);
    }

    #[test]
    fn test_source_pos_display() {
        assert_eq!(format!("{}", SourcePos::new(3, 7)), "line 3, column 7");
    }

    // ==================== coords tests ====================

    #[test]
    fn test_coords_offset_zero() {
        assert_eq!(coords("", 0), SourcePos::new(1, 1));
        assert_eq!(coords("hello", 0), SourcePos::new(1, 1));
    }

    #[test]
    fn test_coords_no_newlines() {
        assert_eq!(coords("hello", 3), SourcePos::new(1, 4));
        assert_eq!(coords("hello", 5), SourcePos::new(1, 6));
    }

    #[test]
    fn test_coords_after_newline() {
        let text = "ab\ncd";
        assert_eq!(coords(text, 2), SourcePos::new(1, 3));
        // The offset of the newline itself still belongs to line 1.
        assert_eq!(coords(text, 3), SourcePos::new(2, 1));
        assert_eq!(coords(text, 5), SourcePos::new(2, 3));
    }

    #[test]
    fn test_coords_many_lines() {
        let text = "one\ntwo\nthree\n";
        assert_eq!(coords(text, 4), SourcePos::new(2, 1));
        assert_eq!(coords(text, 8), SourcePos::new(3, 1));
        assert_eq!(coords(text, 10), SourcePos::new(3, 3));
        assert_eq!(coords(text, text.len()), SourcePos::new(4, 1));
    }

    #[test]
    fn test_coords_column_counts_chars_not_bytes() {
        let text = "é é";
        // 'é' is two bytes; the second 'é' starts at byte 3, column 3.
        assert_eq!(coords(text, 3), SourcePos::new(1, 3));
    }

    #[test]
    fn test_coords_offset_clamped_to_len() {
        assert_eq!(coords("ab", 100), SourcePos::new(1, 3));
    }
}
