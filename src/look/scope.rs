//! Scope narrowing: after, before and between.

use crate::error::LookError;
use crate::pattern::{Pattern, Scan};

use super::Look;

/// Commands that narrow the scope of a [`Look`].
///
/// A pattern that is not found collapses the scope to zero width instead of
/// failing. A match at offset 0 of the scope is a match like any other.
pub trait ScopeCommands: Sized {
    /// Scope to everything after the first match of `pattern`.
    /// Not found: empty scope at the current scope end.
    fn after<P: Into<Pattern>>(&self, pattern: P) -> Result<Self, LookError>;

    /// Scope to everything before the first match of `pattern`.
    /// Not found: empty scope at the current scope start.
    fn before<P: Into<Pattern>>(&self, pattern: P) -> Result<Self, LookError>;

    /// `after(start)` followed by `before(end)`.
    fn between<S: Into<Pattern>, E: Into<Pattern>>(
        &self,
        start: S,
        end: E,
    ) -> Result<Self, LookError>;
}

impl ScopeCommands for Look {
    fn after<P: Into<Pattern>>(&self, pattern: P) -> Result<Self, LookError> {
        let matcher = self.matcher(&pattern.into(), Scan::First)?;
        let start = match matcher.first(self.scoped_text()) {
            Some(m) => self.scope_start + m.end(),
            None => self.scope_end,
        };
        Ok(self.narrowed(start, self.scope_end))
    }

    fn before<P: Into<Pattern>>(&self, pattern: P) -> Result<Self, LookError> {
        let matcher = self.matcher(&pattern.into(), Scan::First)?;
        let end = match matcher.first(self.scoped_text()) {
            Some(m) => self.scope_start + m.offset(),
            None => self.scope_start,
        };
        Ok(self.narrowed(self.scope_start, end))
    }

    fn between<S: Into<Pattern>, E: Into<Pattern>>(
        &self,
        start: S,
        end: E,
    ) -> Result<Self, LookError> {
        self.after(start)?.before(end)
    }
}
