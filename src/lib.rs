//! Fluent, immutable text scoping with regex find, extract and replace.
//!
//! A [`Look`] holds a full text plus a scope window into it. Narrow the
//! scope with patterns, then search or replace inside it; replacements
//! always hand back the complete text.
//!
//! # Example
//!
//! ```rust
//! use look::{Look, MatchCommands, Pattern, ReplaceCommands, ScopeCommands};
//!
//! let look = Look::new("I scream, you scream, we all scream for ice cream");
//!
//! // Everything after the first "you"
//! let rest = look.after("you")?;
//! assert_eq!(rest.scoped_text(), " scream, we all scream for ice cream");
//!
//! // Replacements only touch the scope but return the whole text
//! assert_eq!(
//!     rest.replace_all("scream", "dream")?,
//!     "I scream, you dream, we all dream for ice cream"
//! );
//!
//! // Regex patterns and `$N` format templates
//! let word = look.find_as(Pattern::regex(r"(\w+) cream"), "$1")?;
//! assert_eq!(word.as_deref(), Some("ice"));
//! # Ok::<(), look::LookError>(())
//! ```

pub mod compiler;
mod error;
mod interpreter;
mod look;
mod options;
pub mod pattern;
mod position;
mod scoped_match;
mod script;
mod template;
mod trail_param;

pub use compiler::compile;
pub use error::LookError;
pub use interpreter::{Finished, execute};
pub use look::{Look, MatchCommands, ReplaceCommands, ScopeCommands};
pub use options::LookOptions;
pub use pattern::{Flags, Matcher, Pattern, Scan};
pub use position::Position;
pub use scoped_match::ScopedMatch;
pub use script::{Outcome, Script, Step};
pub use template::Template;
pub use trail_param::TrailParam;
