//! Format and replacement templates.
//!
//! | Token     | Expands to                                   |
//! |-----------|----------------------------------------------|
//! | `$&`      | The whole match                              |
//! | `$1`–`$9` | Capture group N (empty if it did not match)  |
//! | `$$`      | A single `$`                                 |
//!
//! Any other `$` sequence is copied through unchanged.

use std::iter::Peekable;
use std::str::Chars;

use crate::scoped_match::ScopedMatch;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    WholeMatch,
    Group(usize),
}

/// A parsed template, rendered once per match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Default for Template {
    /// The whole-match template, `$&`.
    fn default() -> Self {
        Self {
            tokens: vec![Token::WholeMatch],
        }
    }
}

impl Template {
    /// Parse `input` in a single left-to-right pass.
    pub fn parse(input: &str) -> Self {
        TemplateParser {
            chars: input.chars().peekable(),
            tokens: Vec::new(),
            text: String::new(),
        }
        .parse()
    }

    /// Render the template for one match.
    pub fn render(&self, m: &ScopedMatch<'_>) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::WholeMatch => out.push_str(m.as_str()),
                Token::Group(n) => out.push_str(m.get(*n).unwrap_or("")),
            }
        }
        out
    }
}

impl From<&str> for Template {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&String> for Template {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

struct TemplateParser<'a> {
    chars: Peekable<Chars<'a>>,
    tokens: Vec<Token>,
    text: String,
}

impl TemplateParser<'_> {
    fn parse(mut self) -> Template {
        while let Some(ch) = self.chars.next() {
            if ch != '$' {
                self.text.push(ch);
                continue;
            }
            match self.chars.peek() {
                Some('$') => {
                    self.chars.next();
                    self.text.push('$');
                }
                Some('&') => {
                    self.chars.next();
                    self.push(Token::WholeMatch);
                }
                Some(&d) if matches!(d, '1'..='9') => {
                    self.chars.next();
                    self.push(Token::Group(d as usize - '0' as usize));
                }
                // Unrecognised: the '$' is literal, the next char is scanned normally.
                _ => self.text.push('$'),
            }
        }
        self.flush();
        Template {
            tokens: self.tokens,
        }
    }

    fn push(&mut self, token: Token) {
        self.flush();
        self.tokens.push(token);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }
}
