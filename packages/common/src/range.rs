use serde::{Deserialize, Serialize};
use std::fmt;

/// A character range: `length` characters starting at `location`.
///
/// Locations and lengths count Unicode scalar values (`char`s), never bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub location: usize,
    pub length: usize,
}

impl TextRange {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Range spanning `[start, end)`.
    ///
    /// Panics when `end < start`.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        assert!(end >= start, "range end {end} precedes start {start}");
        Self::new(start, end - start)
    }

    /// Empty range at `location`.
    pub const fn caret(location: usize) -> Self {
        Self::new(location, 0)
    }

    pub const fn end(&self) -> usize {
        self.location + self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, location: usize) -> bool {
        location >= self.location && location < self.end()
    }

    /// True when `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &TextRange) -> bool {
        other.location >= self.location && other.end() <= self.end()
    }

    /// Overlap of two ranges, if they share at least one character.
    pub fn intersection(&self, other: &TextRange) -> Option<TextRange> {
        let start = self.location.max(other.location);
        let end = self.end().min(other.end());
        (start < end).then(|| TextRange::from_bounds(start, end))
    }

    /// Smallest range covering both.
    pub fn union(&self, other: &TextRange) -> TextRange {
        let start = self.location.min(other.location);
        let end = self.end().max(other.end());
        TextRange::from_bounds(start, end)
    }

    /// Same range moved `offset` characters to the left.
    ///
    /// Panics when the shift would move the range before zero.
    pub fn shifted_back(&self, offset: usize) -> TextRange {
        assert!(
            offset <= self.location,
            "cannot shift range {self} back by {offset}"
        );
        TextRange::new(self.location - offset, self.length)
    }

    pub fn as_std(&self) -> std::ops::Range<usize> {
        self.location..self.end()
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        TextRange::from_bounds(range.start, range.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.location, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection() {
        let a = TextRange::new(2, 5);
        let b = TextRange::new(5, 10);
        assert_eq!(a.intersection(&b), Some(TextRange::new(5, 2)));
        assert_eq!(a.intersection(&TextRange::new(7, 3)), None);
    }

    #[test]
    fn test_union_and_contains() {
        let a = TextRange::new(2, 3);
        let b = TextRange::new(8, 2);
        let u = a.union(&b);
        assert_eq!(u, TextRange::new(2, 8));
        assert!(u.contains_range(&a));
        assert!(u.contains(9));
        assert!(!u.contains(10));
    }

    #[test]
    fn test_serialization() {
        let range = TextRange::new(4, 2);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"location":4,"length":2}"#);
    }

    #[test]
    #[should_panic(expected = "precedes start")]
    fn test_inverted_bounds_panic() {
        let _ = TextRange::from_bounds(5, 3);
    }
}
