use crate::pattern::Pattern;

/// A delimited argument following a script command, e.g. `"text"` or `/re/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailParam {
    pub delim: char,
    pub content: String,
}

impl TrailParam {
    pub fn new(delim: char, content: String) -> Self {
        Self { delim, content }
    }

    /// Delimiters that may open a trailing parameter.
    pub fn is_delim(ch: char) -> bool {
        matches!(ch, '"' | '\'' | '/')
    }

    /// `/.../` is regex source; quoted text is a literal.
    pub fn into_pattern(self) -> Pattern {
        match self.delim {
            '/' => Pattern::Regex(self.content),
            _ => Pattern::Literal(self.content),
        }
    }
}
