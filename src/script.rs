//! Compiled form of a chain script: a flat list of steps run against a [`Look`](crate::Look).

use crate::pattern::Pattern;

/// A compiled chain script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// A single compiled step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// CASE / NOCASE
    SetCaseSensitive(bool),
    /// DOTALL / NODOTALL
    SetDotNewline(bool),
    After(Pattern),
    Before(Pattern),
    Between(Pattern, Pattern),
    /// FIND — first match, optionally through a format template
    Find {
        pattern: Pattern,
        format: Option<String>,
    },
    /// FINDALL — every match, optionally through a format template
    FindAll {
        pattern: Pattern,
        format: Option<String>,
    },
    Replace {
        pattern: Pattern,
        replacement: String,
    },
    ReplaceAll {
        pattern: Pattern,
        replacement: String,
    },
    /// SCOPE — emit the scoped text
    Scope,
}

impl Step {
    /// Terminal steps produce output and must end the script.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Step::Find { .. }
                | Step::FindAll { .. }
                | Step::Replace { .. }
                | Step::ReplaceAll { .. }
                | Step::Scope
        )
    }
}

/// Result of running a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The script ended on a scope; the text is the scoped text.
    Scope(String),
    Found(Option<String>),
    FoundAll(Vec<String>),
    /// Full text after substitution.
    Replaced(String),
}

impl Outcome {
    /// False when a search came back empty.
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Found(found) => found.is_some(),
            Outcome::FoundAll(found) => !found.is_empty(),
            Outcome::Scope(_) | Outcome::Replaced(_) => true,
        }
    }
}
