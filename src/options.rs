/// Partial configuration for a [`Look`](crate::Look).
///
/// Every field is optional; unset fields fall back to the defaults when
/// constructing, or to the receiver's current values when merging with
/// [`Look::with_options`](crate::Look::with_options).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookOptions {
    pub text: Option<String>,
    pub scope_start: Option<usize>,
    pub scope_end: Option<usize>,
    pub case_sensitive: Option<bool>,
    pub dot_newline: Option<bool>,
}

impl LookOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn scope_start(mut self, offset: usize) -> Self {
        self.scope_start = Some(offset);
        self
    }

    pub fn scope_end(mut self, offset: usize) -> Self {
        self.scope_end = Some(offset);
        self
    }

    pub fn case_sensitive(mut self, on: bool) -> Self {
        self.case_sensitive = Some(on);
        self
    }

    pub fn dot_newline(mut self, on: bool) -> Self {
        self.dot_newline = Some(on);
        self
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let opts = LookOptions::new()
            .text("abc")
            .scope_start(1)
            .scope_end(2)
            .case_sensitive(true)
            .dot_newline(false);
        assert_eq!(opts.text.as_deref(), Some("abc"));
        assert_eq!(opts.scope_start, Some(1));
        assert_eq!(opts.scope_end, Some(2));
        assert_eq!(opts.case_sensitive, Some(true));
        assert_eq!(opts.dot_newline, Some(false));
        assert!(!opts.is_empty());
        assert!(LookOptions::new().is_empty());
    }
}
