use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Strong-quote a token so no shell metacharacter interpretation can occur.
pub fn quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    if !token
        .chars()
        .any(|c| c.is_whitespace() || "'\"\\$`&|;<>()*?![]{}~#".contains(c))
    {
        return token.to_string();
    }
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('\'');
    for c in token.chars() {
        if c == '\'' {
            // Close, escape the quote, reopen.
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// A fully assembled argument vector for an external tool, executed directly
/// as a child process (never through a shell).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CommandLine {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Render the command with every token strongly quoted, for display and
    /// for handing to a shell verbatim.
    pub fn to_shell_command(&self) -> String {
        self.args
            .iter()
            .map(|arg| quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command to completion and return its exit status.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let program = self.program().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "No command specified")
        })?;

        let mut cmd = Command::new(program);
        cmd.args(&self.args[1..]);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd.status()
    }
}
