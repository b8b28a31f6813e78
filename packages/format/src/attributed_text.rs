use crate::storage::TextStorage;
use crate::Attributes;
use folio_common::TextRange;
use std::fmt;

/// A run of characters sharing one attribute mapping
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRun {
    pub range: TextRange,
    pub attributes: Attributes,
}

impl AttributeRun {
    fn new(range: TextRange, attributes: Attributes) -> Self {
        Self { range, attributes }
    }
}

/// In-memory attributed text.
///
/// Runs are sorted, cover `[0, len)` without gaps and are coalesced after
/// every write, so neighbouring runs always differ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    chars: Vec<char>,
    runs: Vec<AttributeRun>,
}

impl AttributedText {
    pub fn new(text: &str) -> Self {
        Self::with_attributes(text, Attributes::new())
    }

    pub fn with_attributes(text: &str, attributes: Attributes) -> Self {
        let mut attributed = Self::default();
        attributed.push_str(text, attributes);
        attributed
    }

    /// Append `text` carrying `attributes`
    pub fn push_str(&mut self, text: &str, attributes: Attributes) {
        let location = self.chars.len();
        self.chars.extend(text.chars());
        let length = self.chars.len() - location;
        if length > 0 {
            self.runs
                .push(AttributeRun::new(TextRange::new(location, length), attributes));
            self.coalesce();
        }
    }

    pub fn string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Replace a character range. Inserted characters take the attributes
    /// of the first replaced character, or of the preceding character when
    /// nothing is replaced.
    ///
    /// Panics when the range is out of bounds.
    pub fn replace_characters(&mut self, range: TextRange, text: &str) {
        let length = self.chars.len();
        assert!(
            range.end() <= length,
            "The specified range {range} is out of bounds for text of length {length}."
        );

        let attributes = self.inherited_attributes(range);
        let inserted: Vec<char> = text.chars().collect();
        let inserted_length = inserted.len();
        self.chars.splice(range.as_std(), inserted);

        self.split_run_at(range.location);
        self.split_run_at(range.end());
        self.runs.retain(|run| !range.contains_range(&run.range));

        for run in &mut self.runs {
            if run.range.location >= range.end() {
                run.range.location = run.range.location + inserted_length - range.length;
            }
        }
        if inserted_length > 0 {
            let index = self
                .runs
                .partition_point(|run| run.range.location < range.location);
            self.runs.insert(
                index,
                AttributeRun::new(TextRange::new(range.location, inserted_length), attributes),
            );
        }
        self.coalesce();
    }

    fn inherited_attributes(&self, range: TextRange) -> Attributes {
        let source = if range.is_empty() {
            range.location.checked_sub(1)
        } else {
            Some(range.location)
        };
        source
            .and_then(|location| self.run_index(location))
            .or_else(|| (!self.runs.is_empty()).then_some(0))
            .map(|index| self.runs[index].attributes.clone())
            .unwrap_or_default()
    }

    /// Index of the run holding `location`
    fn run_index(&self, location: usize) -> Option<usize> {
        let index = self.runs.partition_point(|run| run.range.end() <= location);
        self.runs
            .get(index)
            .filter(|run| run.range.contains(location))
            .map(|_| index)
    }

    /// Make sure a run boundary sits at `location`
    fn split_run_at(&mut self, location: usize) {
        let Some(index) = self.run_index(location) else {
            return;
        };
        let run = &mut self.runs[index];
        if run.range.location == location {
            return;
        }
        let tail = TextRange::from_bounds(location, run.range.end());
        run.range = TextRange::from_bounds(run.range.location, location);
        let attributes = run.attributes.clone();
        self.runs.insert(index + 1, AttributeRun::new(tail, attributes));
    }

    /// Merge neighbouring runs with equal attributes
    fn coalesce(&mut self) {
        let mut coalesced: Vec<AttributeRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.range.is_empty() {
                continue;
            }
            match coalesced.last_mut() {
                Some(last) if last.attributes == run.attributes => {
                    last.range.length += run.range.length;
                }
                _ => coalesced.push(run),
            }
        }
        self.runs = coalesced;
    }

    fn update_runs(&mut self, range: TextRange, update: impl Fn(&mut Attributes)) {
        let length = self.chars.len();
        assert!(
            range.end() <= length,
            "The specified range {range} is out of bounds for text of length {length}."
        );
        if range.is_empty() {
            return;
        }

        self.split_run_at(range.location);
        self.split_run_at(range.end());
        for run in &mut self.runs {
            if range.contains_range(&run.range) {
                update(&mut run.attributes);
            }
        }
        self.coalesce();
    }
}

impl TextStorage for AttributedText {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, location: usize) -> Option<char> {
        self.chars.get(location).copied()
    }

    fn substring(&self, range: TextRange) -> String {
        self.chars[range.as_std()].iter().collect()
    }

    fn attributes_at(&self, location: usize) -> Attributes {
        let index = self.run_index(location).unwrap_or_else(|| {
            panic!(
                "Location {location} is out of bounds for text of length {}.",
                self.chars.len()
            )
        });
        self.runs[index].attributes.clone()
    }

    fn attribute_runs(&self, range: TextRange) -> Vec<(TextRange, Attributes)> {
        self.runs
            .iter()
            .filter_map(|run| {
                run.range
                    .intersection(&range)
                    .map(|overlap| (overlap, run.attributes.clone()))
            })
            .collect()
    }

    fn add_attributes(&mut self, attributes: &Attributes, range: TextRange) {
        self.update_runs(range, |existing| existing.merge(attributes));
    }

    fn set_attributes(&mut self, attributes: &Attributes, range: TextRange) {
        self.update_runs(range, |existing| *existing = attributes.clone());
    }

    fn replace_occurrences(&mut self, of: &str, with: &str, range: TextRange) -> usize {
        let pattern: Vec<char> = of.chars().collect();
        if pattern.is_empty() || range.length < pattern.len() {
            return 0;
        }

        let mut matches = Vec::new();
        let mut location = range.location;
        while location + pattern.len() <= range.end() {
            if self.chars[location..location + pattern.len()] == pattern[..] {
                matches.push(location);
                location += pattern.len();
            } else {
                location += 1;
            }
        }

        for &location in matches.iter().rev() {
            self.replace_characters(TextRange::new(location, pattern.len()), with);
        }
        matches.len()
    }
}

impl fmt::Display for AttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.string())
    }
}
