//! The [`Look`] value: a full text, a scope window into it, and matching flags.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::LookError;
use crate::options::LookOptions;
use crate::pattern::{Flags, Matcher, Pattern, Scan};
use crate::position::Position;

mod replace;
mod scope;
mod search;

pub use replace::ReplaceCommands;
pub use scope::ScopeCommands;
pub use search::MatchCommands;

/// An immutable view of a text, narrowed to a scope.
///
/// Every operation returns a new `Look` (or a plain value); the receiver is
/// never changed. Clones share the underlying text buffer.
///
/// Invariant: `scope_start <= scope_end <= text.len()`, and both bounds lie
/// on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Look {
    text: Arc<str>,
    scope_start: usize,
    scope_end: usize,
    flags: Flags,
}

impl Default for Look {
    /// A configuration-only look with no text yet; see [`Look::with_text`].
    fn default() -> Self {
        Self::from_options(LookOptions::default())
    }
}

impl fmt::Display for Look {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scoped_text())
    }
}

impl From<&str> for Look {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Look {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&Look> for LookOptions {
    fn from(look: &Look) -> Self {
        look.options()
    }
}

// Constructors
impl Look {
    /// Look at the whole of `text` with default flags.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_options(LookOptions::new().text(text))
    }

    /// Build a look from options. Unset bounds span the whole text; unset
    /// flags take their defaults (case-insensitive, `.` matches newlines).
    pub fn from_options(options: LookOptions) -> Self {
        let text: Arc<str> = Arc::from(options.text.unwrap_or_default());
        let start = options.scope_start.unwrap_or(0);
        let end = options.scope_end.unwrap_or(text.len());
        let defaults = Flags::default();
        let flags = Flags {
            case_sensitive: options.case_sensitive.unwrap_or(defaults.case_sensitive),
            dot_newline: options.dot_newline.unwrap_or(defaults.dot_newline),
        };
        Self::build(text, start, end, flags)
    }

    /// Clamp and snap the bounds so the invariant holds.
    fn build(text: Arc<str>, start: usize, end: usize, flags: Flags) -> Self {
        let end = char_floor(&text, end.min(text.len()));
        let start = char_floor(&text, start.min(end));
        Self {
            text,
            scope_start: start,
            scope_end: end,
            flags,
        }
    }
}

// Configuration
impl Look {
    /// A copy with `text` replaced and the scope reset to all of it. Flags
    /// are kept.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let text: Arc<str> = Arc::from(text.into());
        let len = text.len();
        Self::build(text, 0, len, self.flags)
    }

    /// A copy with the given fields overridden.
    ///
    /// Fields left unset keep their current values. Bounds are clamped to
    /// the (possibly new) text, so a shorter text can leave an empty scope.
    pub fn with_options(&self, options: &LookOptions) -> Self {
        if options.is_empty() {
            return self.clone();
        }
        let text: Arc<str> = match &options.text {
            Some(text) => Arc::from(text.as_str()),
            None => self.text.clone(),
        };
        let (start, end) = (self.scope_start, self.scope_end);
        let flags = Flags {
            case_sensitive: options
                .case_sensitive
                .unwrap_or(self.flags.case_sensitive),
            dot_newline: options.dot_newline.unwrap_or(self.flags.dot_newline),
        };
        Self::build(
            text,
            options.scope_start.unwrap_or(start),
            options.scope_end.unwrap_or(end),
            flags,
        )
    }

    pub fn with_case_sensitive(&self, on: bool) -> Self {
        self.with_options(&LookOptions::new().case_sensitive(on))
    }

    pub fn with_dot_newline(&self, on: bool) -> Self {
        self.with_options(&LookOptions::new().dot_newline(on))
    }

    /// Snapshot of every field, usable to rebuild an identical look.
    pub fn options(&self) -> LookOptions {
        LookOptions {
            text: Some(self.text.to_string()),
            scope_start: Some(self.scope_start),
            scope_end: Some(self.scope_end),
            case_sensitive: Some(self.flags.case_sensitive),
            dot_newline: Some(self.flags.dot_newline),
        }
    }
}

// Accessors
impl Look {
    /// The full, unscoped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text inside the current scope.
    pub fn scoped_text(&self) -> &str {
        &self.text[self.scope()]
    }

    pub fn scope_start(&self) -> usize {
        self.scope_start
    }

    pub fn scope_end(&self) -> usize {
        self.scope_end
    }

    pub fn scope(&self) -> Range<usize> {
        self.scope_start..self.scope_end
    }

    /// True if the scope is zero-width: nothing remains to search.
    pub fn is_empty(&self) -> bool {
        self.scope_start == self.scope_end
    }

    pub fn case_sensitive(&self) -> bool {
        self.flags.case_sensitive
    }

    pub fn dot_newline(&self) -> bool {
        self.flags.dot_newline
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Line/column of the scope start and end in the full text.
    pub fn scope_positions(&self) -> (Position, Position) {
        let [start, end] = Position::of_bytes(&self.text, [self.scope_start, self.scope_end]);
        (start, end)
    }

    /// True if both looks share the same text buffer.
    pub fn shares_text(&self, other: &Look) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
    }
}

// Helpers shared by the command traits
impl Look {
    pub(crate) fn matcher(&self, pattern: &Pattern, scan: Scan) -> Result<Matcher, LookError> {
        pattern.compile(self.flags, scan)
    }

    /// A copy narrowed to `start..end` (absolute offsets).
    pub(crate) fn narrowed(&self, start: usize, end: usize) -> Self {
        tracing::trace!(
            from = ?self.scope(),
            to = ?(start..end),
            "narrowing scope"
        );
        self.with_options(&LookOptions::new().scope_start(start).scope_end(end))
    }
}

/// Largest char boundary in `text` at or below `offset`.
fn char_floor(text: &str, mut offset: usize) -> usize {
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
