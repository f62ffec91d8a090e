//! Substitution: terminal operations that return the whole rewritten text.

use crate::error::LookError;
use crate::pattern::{Pattern, Scan};
use crate::template::Template;

use super::Look;

/// Commands that substitute matches inside the scope.
///
/// Only the scoped text is searched, but the result is always the complete
/// text: everything outside the scope is carried over untouched.
pub trait ReplaceCommands {
    /// Replace the first match in scope, expanding `$&`, `$1`..`$9`, `$$`.
    fn replace<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        replacement: T,
    ) -> Result<String, LookError>;

    /// Replace every match in scope.
    fn replace_all<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        replacement: T,
    ) -> Result<String, LookError>;

    /// The full text with the scoped part swapped for `scoped`.
    fn splice(&self, scoped: &str) -> String;
}

impl ReplaceCommands for Look {
    fn replace<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        replacement: T,
    ) -> Result<String, LookError> {
        self.substitute(&pattern.into(), &replacement.into(), Scan::First)
    }

    fn replace_all<P: Into<Pattern>, T: Into<Template>>(
        &self,
        pattern: P,
        replacement: T,
    ) -> Result<String, LookError> {
        self.substitute(&pattern.into(), &replacement.into(), Scan::All)
    }

    fn splice(&self, scoped: &str) -> String {
        let text = self.text();
        let mut out =
            String::with_capacity(text.len() - self.scoped_text().len() + scoped.len());
        out.push_str(&text[..self.scope_start()]);
        out.push_str(scoped);
        out.push_str(&text[self.scope_end()..]);
        out
    }
}

impl Look {
    fn substitute(
        &self,
        pattern: &Pattern,
        replacement: &Template,
        scan: Scan,
    ) -> Result<String, LookError> {
        let matcher = self.matcher(pattern, scan)?;
        let (scoped, count) = matcher.substitute(self.scoped_text(), |m| replacement.render(m));
        tracing::trace!(count, scan = ?matcher.scan(), "substituted matches in scope");
        Ok(self.splice(&scoped))
    }
}
