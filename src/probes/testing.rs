//! Scripted [`ProcessRunner`] for unit tests.
//!
//! Replies are matched against the program and arguments of each call, in
//! the order they were registered. Every call is recorded for assertions.

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{EnvcheckError, Result};
use crate::shell::{CommandOptions, CommandResult, ProcessRunner};

/// What a scripted command does.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Exit with the given code and output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Overrun the caller's timeout.
    Timeout,
    /// Fail to spawn, as if the program were not installed.
    Missing,
}

/// Exit 0 with `stdout`.
pub fn ok(stdout: &str) -> Reply {
    Reply::Exit {
        code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// A recorded invocation.
#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

struct Rule {
    program: Option<String>,
    needle: String,
    reply: Reply,
}

pub struct FakeRunner {
    rules: Vec<Rule>,
    fallback: Reply,
    calls: RefCell<Vec<Call>>,
}

impl FakeRunner {
    /// A runner where every unscripted command exits 1 silently.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Reply::Exit {
                code: 1,
                stdout: String::new(),
                stderr: String::new(),
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Reply to any call whose arguments contain `needle`.
    pub fn reply_when(mut self, needle: &str, reply: Reply) -> Self {
        self.rules.push(Rule {
            program: None,
            needle: needle.to_string(),
            reply,
        });
        self
    }

    /// Reply to calls of `program` whose arguments contain `needle`.
    pub fn reply_for(mut self, program: &str, needle: &str, reply: Reply) -> Self {
        self.rules.push(Rule {
            program: Some(program.to_string()),
            needle: needle.to_string(),
            reply,
        });
        self
    }

    /// Reply to the import probe of `package`, under any interpreter.
    pub fn reply_import(self, package: &str, reply: Reply) -> Self {
        let needle = format!("    import {}\n", package);
        self.reply_when(&needle, reply)
    }

    /// Every call of `program` fails to spawn.
    pub fn missing(self, program: &str) -> Self {
        self.reply_for(program, "", Reply::Missing)
    }

    /// Reply used when no rule matches.
    pub fn otherwise(mut self, reply: Reply) -> Self {
        self.fallback = reply;
        self
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls made to `program`.
    pub fn calls_to(&self, program: &str) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .cloned()
            .collect()
    }

    fn lookup(&self, program: &str, args: &[&str]) -> &Reply {
        self.rules
            .iter()
            .find(|rule| {
                rule.program.as_deref().is_none_or(|p| p == program)
                    && args.iter().any(|a| a.contains(rule.needle.as_str()))
            })
            .map(|rule| &rule.reply)
            .unwrap_or(&self.fallback)
    }
}

impl ProcessRunner for FakeRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout: options.timeout,
        });

        match self.lookup(program, args) {
            Reply::Exit {
                code: 0,
                stdout,
                stderr,
            } => Ok(CommandResult::success(
                stdout.clone(),
                stderr.clone(),
                Duration::from_millis(5),
            )),
            Reply::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandResult::failure(
                Some(*code),
                stdout.clone(),
                stderr.clone(),
                Duration::from_millis(5),
            )),
            Reply::Timeout => Err(EnvcheckError::Timeout {
                program: program.to_string(),
                timeout: options.timeout.unwrap_or_default(),
            }),
            Reply::Missing => Err(EnvcheckError::SpawnFailed {
                program: program.to_string(),
                message: "No such file or directory (os error 2)".to_string(),
            }),
        }
    }
}
