//! A single regex match inside a scope.

use std::ops::Range;

use regex::Captures;

/// One match found in a scoped text, with its capture groups.
///
/// All offsets are byte offsets relative to the start of the scope the match
/// was found in, never to the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedMatch<'t> {
    haystack: &'t str,
    /// Group 0 is the whole match; later groups are `None` when they did
    /// not take part in the match.
    groups: Vec<Option<Range<usize>>>,
}

impl<'t> ScopedMatch<'t> {
    pub(crate) fn from_captures(haystack: &'t str, caps: &Captures<'_>) -> Self {
        let groups = caps.iter().map(|g| g.map(|m| m.range())).collect();
        Self { haystack, groups }
    }

    /// Offset of the match start.
    pub fn offset(&self) -> usize {
        self.range().start
    }

    /// Offset one past the match end.
    pub fn end(&self) -> usize {
        self.range().end
    }

    pub fn range(&self) -> Range<usize> {
        self.groups.first().cloned().flatten().unwrap_or(0..0)
    }

    /// The whole matched text.
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.range()]
    }

    /// Text of group `index`, or `None` if the group does not exist or did
    /// not participate.
    pub fn get(&self, index: usize) -> Option<&'t str> {
        let range = self.groups.get(index)?.clone()?;
        Some(&self.haystack[range])
    }

    /// Number of groups, including the whole-match group 0.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// All groups in order, starting with the whole match.
    pub fn groups(&self) -> impl Iterator<Item = Option<&'t str>> + '_ {
        let haystack = self.haystack;
        self.groups
            .iter()
            .map(move |g| g.clone().map(|range| &haystack[range]))
    }
}
