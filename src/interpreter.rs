//! Execution engine for compiled chain scripts.
//!
//! Each step derives a new [`Look`] from the previous one. A terminal step
//! ends the run with an [`Outcome`]; a script without one ends on the scope
//! it reached.

use crate::error::LookError;
use crate::look::{Look, MatchCommands, ReplaceCommands, ScopeCommands};
use crate::script::{Outcome, Script, Step};
use crate::template::Template;

/// Where a run ended: the last scope reached and what the script produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finished {
    pub look: Look,
    pub outcome: Outcome,
}

/// Execute `script` starting from `look`. The input is left untouched.
pub fn execute(script: &Script, look: &Look) -> Result<Finished, LookError> {
    let mut current = look.clone();
    for step in &script.steps {
        match execute_step(&current, step)? {
            Next::Continue(next) => current = next,
            Next::Done(outcome) => {
                return Ok(Finished {
                    look: current,
                    outcome,
                });
            }
        }
    }
    let outcome = Outcome::Scope(current.scoped_text().to_string());
    Ok(Finished {
        look: current,
        outcome,
    })
}

enum Next {
    Continue(Look),
    Done(Outcome),
}

fn execute_step(look: &Look, step: &Step) -> Result<Next, LookError> {
    tracing::trace!(?step, scope = ?look.scope(), "executing step");
    let next = match step {
        Step::SetCaseSensitive(on) => Next::Continue(look.with_case_sensitive(*on)),
        Step::SetDotNewline(on) => Next::Continue(look.with_dot_newline(*on)),
        Step::After(pattern) => Next::Continue(look.after(pattern.clone())?),
        Step::Before(pattern) => Next::Continue(look.before(pattern.clone())?),
        Step::Between(start, end) => Next::Continue(look.between(start.clone(), end.clone())?),
        Step::Find { pattern, format } => {
            Next::Done(Outcome::Found(look.find_as(pattern.clone(), template(format))?))
        }
        Step::FindAll { pattern, format } => Next::Done(Outcome::FoundAll(
            look.find_all_as(pattern.clone(), template(format))?,
        )),
        Step::Replace {
            pattern,
            replacement,
        } => Next::Done(Outcome::Replaced(
            look.replace(pattern.clone(), replacement)?,
        )),
        Step::ReplaceAll {
            pattern,
            replacement,
        } => Next::Done(Outcome::Replaced(
            look.replace_all(pattern.clone(), replacement)?,
        )),
        Step::Scope => Next::Done(Outcome::Scope(look.scoped_text().to_string())),
    };
    Ok(next)
}

fn template(format: &Option<String>) -> Template {
    format.as_deref().map(Template::parse).unwrap_or_default()
}
