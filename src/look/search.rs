//! Matching and extraction within the scope.

use crate::error::LookError;
use crate::pattern::{Pattern, Scan};
use crate::scoped_match::ScopedMatch;
use crate::template::Template;

use super::Look;

/// Commands that search the scoped text.
///
/// Patterns only ever see the scoped text, so match offsets are relative to
/// the scope start.
pub trait MatchCommands {
    /// First match with its groups, or `None`.
    fn raw_match<P: Into<Pattern>>(
        &self,
        pattern: P,
    ) -> Result<Option<ScopedMatch<'_>>, LookError>;

    /// Every non-overlapping match, left to right.
    fn raw_match_all<P: Into<Pattern>>(
        &self,
        pattern: P,
    ) -> Result<Vec<ScopedMatch<'_>>, LookError>;

    /// Text of the first match, or `None`.
    fn find<P: Into<Pattern>>(&self, pattern: P) -> Result<Option<String>, LookError> {
        self.find_as(pattern, Template::default())
    }

    /// Text of every match.
    fn find_all<P: Into<Pattern>>(&self, pattern: P) -> Result<Vec<String>, LookError> {
        self.find_all_as(pattern, Template::default())
    }

    /// First match rendered through `format` (e.g. `"$1"`), or `None`.
    fn find_as<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        format: T,
    ) -> Result<Option<String>, LookError>;

    /// Every match rendered through `format`.
    fn find_all_as<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        format: T,
    ) -> Result<Vec<String>, LookError>;
}

impl MatchCommands for Look {
    fn raw_match<P: Into<Pattern>>(
        &self,
        pattern: P,
    ) -> Result<Option<ScopedMatch<'_>>, LookError> {
        let matcher = self.matcher(&pattern.into(), Scan::First)?;
        Ok(matcher.first(self.scoped_text()))
    }

    fn raw_match_all<P: Into<Pattern>>(
        &self,
        pattern: P,
    ) -> Result<Vec<ScopedMatch<'_>>, LookError> {
        let matcher = self.matcher(&pattern.into(), Scan::All)?;
        Ok(matcher.matches(self.scoped_text()))
    }

    fn find_as<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        format: T,
    ) -> Result<Option<String>, LookError> {
        let format = format.into();
        let matcher = self.matcher(&pattern.into(), Scan::All)?;
        Ok(matcher
            .first(self.scoped_text())
            .map(|m| format.render(&m)))
    }

    fn find_all_as<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        format: T,
    ) -> Result<Vec<String>, LookError> {
        let format = format.into();
        Ok(self
            .raw_match_all(pattern)?
            .iter()
            .map(|m| format.render(m))
            .collect())
    }
}
