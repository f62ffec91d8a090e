/// Errors raised by [`Look`](crate::Look) operations.
///
/// A pattern that matches nothing is never an error; only a pattern the
/// regex engine refuses to compile ends up here.
#[derive(Debug, Clone)]
pub enum LookError {
    InvalidPattern {
        /// The regex source that was handed to the engine (after escaping).
        source_text: String,
        error: regex::Error,
    },
}

impl std::fmt::Display for LookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { source_text, error } => {
                write!(f, "Invalid pattern {source_text:?}: {error}")
            }
        }
    }
}

impl std::error::Error for LookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { error, .. } => Some(error),
        }
    }
}
