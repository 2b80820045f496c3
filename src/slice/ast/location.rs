//! Source locations
//!
//! Declarations carry a [`Location`]: the byte offsets of the declaration's own text.
//! Offsets are taken against the directive-stripped text, which has exactly the same
//! length and line layout as the original, so they are valid against either.
//!
//! [`SourceLocation`] converts byte offsets into line/column [`Position`]s for
//! diagnostics.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Byte offsets of a node in the source (`start` inclusive, `end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if `other` lies entirely within this location
    pub fn contains(&self, other: &Location) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check if two locations share at least one byte
    pub fn overlaps(&self, other: &Location) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Location {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A line/column position (both zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    /// Human-facing form, one-based
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// The column is a byte count from the start of the line.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line, byte_offset - self.line_starts[line])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("module");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("module M\n{\n};");

        assert_eq!(loc.byte_to_position(8), Position::new(0, 8));
        assert_eq!(loc.byte_to_position(9), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(11), Position::new(2, 0));
        assert_eq!(loc.byte_to_position(12), Position::new(2, 1));
        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.line_start(2), Some(11));
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 4).to_string(), "line 1, column 5");
    }

    #[test]
    fn test_location_containment() {
        let outer = Location::new(10, 50);
        assert!(outer.contains(&Location::new(10, 50)));
        assert!(outer.contains(&Location::new(20, 30)));
        assert!(!outer.contains(&Location::new(5, 30)));

        assert!(Location::new(0, 10).overlaps(&Location::new(9, 12)));
        assert!(!Location::new(0, 10).overlaps(&Location::new(10, 12)));
    }
}
