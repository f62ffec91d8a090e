//! Compiler for chain scripts.
//!
//! A script is a sequence of commands, each followed by its delimited
//! arguments:
//!
//! ```text
//! ! words of the first bold run after the heading
//! after "</h1>"
//! between /<b>/ "</b>" findall /(\w+)/ "$1"
//! ```
//!
//! `"..."` and `'...'` are literal text, `/.../` is regex source. `!` starts
//! a comment that runs to the end of the line.

use itertools::Itertools;
use phf::{Map, phf_map};
use std::iter::Peekable;
use std::str::Chars;

use anyhow::{Result, bail};

use crate::script::{Script, Step};
use crate::trail_param::TrailParam;

/// Compile a chain script into a [`Script`].
pub fn compile(input: &str) -> Result<Script> {
    let mut compiler = Compiler {
        chars: input.chars().peekable(),
    };
    let mut steps: Vec<Step> = Vec::new();
    loop {
        compiler.skip_whitespace_and_comments();
        if compiler.chars.peek().is_none() {
            break;
        }
        let step = compiler.compile_step()?;
        if steps.last().is_some_and(Step::is_terminal) {
            bail!("Syntax error: no command may follow a terminal command.");
        }
        steps.push(step);
    }
    Ok(Script { steps })
}

struct Compiler<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Compiler<'_> {
    /// Parse one command and its trailing parameters.
    fn compile_step(&mut self) -> Result<Step> {
        let name = self.parse_command_name()?;
        let info = name_to_info(&name)?;
        let mut tpars = Vec::new();
        while tpars.len() < info.max_args {
            self.skip_whitespace_and_comments();
            match self.chars.peek() {
                Some(&ch) if TrailParam::is_delim(ch) => {
                    self.chars.next();
                    tpars.push(self.parse_trailing_param_with_delim(ch)?);
                }
                _ => break,
            }
        }
        if tpars.len() < info.min_args {
            bail!(
                "Syntax error: {} expects at least {} argument{}.",
                name.to_uppercase(),
                info.min_args,
                if info.min_args == 1 { "" } else { "s" }
            );
        }
        build_step(info.op, tpars)
    }

    fn parse_command_name(&mut self) -> Result<String> {
        let name: String = self
            .chars
            .peeking_take_while(|ch| ch.is_ascii_alphabetic())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        if name.is_empty() {
            match self.chars.peek() {
                Some(ch) => bail!("Syntax error: expected command name, found {ch:?}."),
                None => bail!("Syntax error: expected command name."),
            }
        }
        Ok(name)
    }

    /// Parse a trailing parameter using a known delimiter.
    fn parse_trailing_param_with_delim(&mut self, delim: char) -> Result<TrailParam> {
        let mut content = String::new();
        loop {
            match self.chars.next() {
                Some(c) if c == delim => return Ok(TrailParam::new(delim, content)),
                Some(c) => content.push(c),
                None => bail!("Syntax error: unclosed trailing parameter."),
            }
        }
    }

    /// Skip whitespace and `!`-to-end-of-line comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(&ch) if ch.is_whitespace() => {
                    self.chars.next();
                }
                Some(&'!') => {
                    for ch in self.chars.by_ref() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }
}

/// Opcode identifying a script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOp {
    Case,
    NoCase,
    DotAll,
    NoDotAll,
    After,
    Before,
    Between,
    Find,
    FindAll,
    Replace,
    ReplaceAll,
    Scope,
}

struct CmdInfo {
    op: StepOp,
    min_args: usize,
    max_args: usize,
}

/// Map of command names to their op and argument counts.
/// Please keep names sorted alphabetically.
const NAME_TO_OP_MAP: Map<&'static str, CmdInfo> = phf_map! {
    "after" => CmdInfo { op: StepOp::After, min_args: 1, max_args: 1 },
    "before" => CmdInfo { op: StepOp::Before, min_args: 1, max_args: 1 },
    "between" => CmdInfo { op: StepOp::Between, min_args: 2, max_args: 2 },
    "case" => CmdInfo { op: StepOp::Case, min_args: 0, max_args: 0 },
    "dotall" => CmdInfo { op: StepOp::DotAll, min_args: 0, max_args: 0 },
    "find" => CmdInfo { op: StepOp::Find, min_args: 1, max_args: 2 },
    "findall" => CmdInfo { op: StepOp::FindAll, min_args: 1, max_args: 2 },
    "nocase" => CmdInfo { op: StepOp::NoCase, min_args: 0, max_args: 0 },
    "nodotall" => CmdInfo { op: StepOp::NoDotAll, min_args: 0, max_args: 0 },
    "replace" => CmdInfo { op: StepOp::Replace, min_args: 2, max_args: 2 },
    "replaceall" => CmdInfo { op: StepOp::ReplaceAll, min_args: 2, max_args: 2 },
    "scope" => CmdInfo { op: StepOp::Scope, min_args: 0, max_args: 0 },
};

/// Map a command name to its CmdInfo.
fn name_to_info(name: &str) -> Result<&'static CmdInfo> {
    NAME_TO_OP_MAP
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Syntax error: unknown command '{}'.", name.to_uppercase()))
}

/// Assemble a step from an op and its arity-checked parameters.
fn build_step(op: StepOp, tpars: Vec<TrailParam>) -> Result<Step> {
    let mut tpars = tpars.into_iter();
    let step = match op {
        StepOp::Case => Step::SetCaseSensitive(true),
        StepOp::NoCase => Step::SetCaseSensitive(false),
        StepOp::DotAll => Step::SetDotNewline(true),
        StepOp::NoDotAll => Step::SetDotNewline(false),
        StepOp::After => Step::After(next_param(&mut tpars)?.into_pattern()),
        StepOp::Before => Step::Before(next_param(&mut tpars)?.into_pattern()),
        StepOp::Between => {
            let start = next_param(&mut tpars)?.into_pattern();
            Step::Between(start, next_param(&mut tpars)?.into_pattern())
        }
        StepOp::Find => Step::Find {
            pattern: next_param(&mut tpars)?.into_pattern(),
            format: tpars.next().map(|tp| tp.content),
        },
        StepOp::FindAll => Step::FindAll {
            pattern: next_param(&mut tpars)?.into_pattern(),
            format: tpars.next().map(|tp| tp.content),
        },
        StepOp::Replace => Step::Replace {
            pattern: next_param(&mut tpars)?.into_pattern(),
            replacement: next_param(&mut tpars)?.content,
        },
        StepOp::ReplaceAll => Step::ReplaceAll {
            pattern: next_param(&mut tpars)?.into_pattern(),
            replacement: next_param(&mut tpars)?.content,
        },
        StepOp::Scope => Step::Scope,
    };
    Ok(step)
}

fn next_param(tpars: &mut impl Iterator<Item = TrailParam>) -> Result<TrailParam> {
    tpars
        .next()
        .ok_or_else(|| anyhow::anyhow!("Syntax error: missing trailing parameter."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    fn compile_ok(input: &str) -> Vec<Step> {
        compile(input).unwrap().steps
    }

    fn compile_err(input: &str) -> String {
        compile(input).unwrap_err().to_string()
    }

    #[test]
    fn test_empty_script() {
        assert!(compile_ok("").is_empty());
        assert!(compile_ok("  ! just a comment\n").is_empty());
    }

    #[test]
    fn test_narrowing_steps() {
        let steps = compile_ok(r#"after "you" before /\d+/ between 'a' "b""#);
        assert_eq!(
            steps,
            vec![
                Step::After(Pattern::literal("you")),
                Step::Before(Pattern::regex(r"\d+")),
                Step::Between(Pattern::literal("a"), Pattern::literal("b")),
            ]
        );
    }

    #[test]
    fn test_flags() {
        let steps = compile_ok("case nocase dotall nodotall");
        assert_eq!(
            steps,
            vec![
                Step::SetCaseSensitive(true),
                Step::SetCaseSensitive(false),
                Step::SetDotNewline(true),
                Step::SetDotNewline(false),
            ]
        );
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(compile_ok("SCOPE"), vec![Step::Scope]);
    }

    #[test]
    fn test_find_optional_format() {
        assert_eq!(
            compile_ok(r#"find "x""#),
            vec![Step::Find {
                pattern: Pattern::literal("x"),
                format: None
            }]
        );
        assert_eq!(
            compile_ok(r#"findall /(\w)/ "$1""#),
            vec![Step::FindAll {
                pattern: Pattern::regex(r"(\w)"),
                format: Some("$1".to_string())
            }]
        );
    }

    #[test]
    fn test_replace_steps() {
        assert_eq!(
            compile_ok(r#"after "you" replaceall "scream" "dream""#),
            vec![
                Step::After(Pattern::literal("you")),
                Step::ReplaceAll {
                    pattern: Pattern::literal("scream"),
                    replacement: "dream".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_comments_between_steps() {
        let steps = compile_ok("after 'a' ! skip ahead\nscope");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(compile_err("frobnicate"), "Syntax error: unknown command 'FROBNICATE'.");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            compile_err(r#"between "a""#),
            "Syntax error: BETWEEN expects at least 2 arguments."
        );
        assert_eq!(
            compile_err("after"),
            "Syntax error: AFTER expects at least 1 argument."
        );
    }

    #[test]
    fn test_unclosed_argument() {
        assert_eq!(
            compile_err(r#"find "oops"#),
            "Syntax error: unclosed trailing parameter."
        );
    }

    #[test]
    fn test_nothing_after_terminal() {
        assert_eq!(
            compile_err(r#"find "a" after "b""#),
            "Syntax error: no command may follow a terminal command."
        );
    }

    #[test]
    fn test_stray_character() {
        assert!(compile_err("after 'a' 42").starts_with("Syntax error: expected command name"));
    }
}
