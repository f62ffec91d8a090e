//! Search patterns and their compilation into a [`Matcher`].
//!
//! A pattern is either a plain literal, which is escaped before it reaches
//! the regex engine, or a regex source that is used verbatim.
//!
//! | Flag                 | Setting                                   |
//! |----------------------|-------------------------------------------|
//! | multi-line `^`/`$`   | always on                                 |
//! | `.` matches newline  | follows `dot_newline`                     |
//! | case-insensitive     | on unless `case_sensitive`                |

use regex::{Captures, Regex, RegexBuilder};

use crate::error::LookError;
use crate::scoped_match::ScopedMatch;

/// A search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Plain text; every regex metacharacter is escaped before compiling.
    Literal(String),
    /// Regex source, compiled as-is.
    Regex(String),
}

impl Pattern {
    /// Create a literal pattern.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create a pattern from regex source.
    pub fn regex(source: impl Into<String>) -> Self {
        Self::Regex(source.into())
    }

    /// The source handed to the regex engine.
    pub fn source(&self) -> String {
        match self {
            Self::Literal(text) => escape(text),
            Self::Regex(source) => source.clone(),
        }
    }

    /// Compile the pattern with the given flags.
    pub fn compile(&self, flags: Flags, scan: Scan) -> Result<Matcher, LookError> {
        let source = self.source();
        tracing::debug!(
            source = %source,
            case_sensitive = flags.case_sensitive,
            dot_newline = flags.dot_newline,
            ?scan,
            "compiling pattern"
        );
        let regex = RegexBuilder::new(&source)
            .multi_line(true)
            .dot_matches_new_line(flags.dot_newline)
            .case_insensitive(!flags.case_sensitive)
            .build()
            .map_err(|error| LookError::InvalidPattern {
                source_text: source,
                error,
            })?;
        Ok(Matcher { regex, scan })
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<&String> for Pattern {
    fn from(text: &String) -> Self {
        Self::Literal(text.clone())
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Self::Regex(regex.as_str().to_string())
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex.as_str().to_string())
    }
}

/// Matching behaviour flags carried by a [`Look`](crate::Look).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags {
    pub case_sensitive: bool,
    pub dot_newline: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            dot_newline: true,
        }
    }
}

/// Whether a compiled pattern reports only the first match or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scan {
    First,
    All,
}

/// A compiled pattern, ready to run against a haystack.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    scan: Scan,
}

impl Matcher {
    pub fn scan(&self) -> Scan {
        self.scan
    }

    /// Leftmost match in `haystack`, if any.
    pub fn first<'t>(&self, haystack: &'t str) -> Option<ScopedMatch<'t>> {
        self.regex
            .captures(haystack)
            .map(|caps| ScopedMatch::from_captures(haystack, &caps))
    }

    /// Non-overlapping matches, left to right. A [`Scan::First`] matcher
    /// yields at most one.
    pub fn matches<'t>(&self, haystack: &'t str) -> Vec<ScopedMatch<'t>> {
        let found = self
            .regex
            .captures_iter(haystack)
            .map(|caps| ScopedMatch::from_captures(haystack, &caps));
        match self.scan {
            Scan::First => found.take(1).collect(),
            Scan::All => found.collect(),
        }
    }

    /// Substitute matches in `haystack`, rendering each through `render`.
    /// Returns the new text and the number of substitutions made.
    pub fn substitute(
        &self,
        haystack: &str,
        mut render: impl FnMut(&ScopedMatch<'_>) -> String,
    ) -> (String, usize) {
        let mut count = 0usize;
        let replaced = self
            .regex
            .replacen(haystack, self.limit(), |caps: &Captures<'_>| {
                count += 1;
                render(&ScopedMatch::from_captures(haystack, caps))
            });
        (replaced.into_owned(), count)
    }

    /// Replacement limit in the regex crate's convention (0 = unlimited).
    fn limit(&self) -> usize {
        match self.scan {
            Scan::First => 1,
            Scan::All => 0,
        }
    }
}

/// Characters escaped when a literal is turned into regex source.
fn is_meta_char(ch: char) -> bool {
    matches!(
        ch,
        '|' | '\\' | '{' | '}' | '(' | ')' | '[' | ']' | '^' | '$' | '+' | '*' | '?' | '.'
    )
}

/// Escape `text` so it matches literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_meta_char(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
