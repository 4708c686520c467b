use std::ffi::OsStr;
use std::process::Command;

/// How a [`ShellCommand`] is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Spawn `program` directly with `args`
    Program,
    /// Hand a raw line to the host shell (`sh -c`)
    Shell,
}

/// A structured command: program, argument vector and extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub kind: CommandKind,
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            kind: CommandKind::Program,
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// A raw line executed by the host shell
    pub fn new_shell(line: impl Into<String>) -> Self {
        Self {
            kind: CommandKind::Shell,
            program: line.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Render the command the way a user would type it
    pub fn to_shell_command(&self) -> String {
        match self.kind {
            CommandKind::Shell => self.program.clone(),
            CommandKind::Program => {
                let mut cmd = String::new();
                for (key, value) in &self.env {
                    cmd.push_str(&format!("{key}={} ", quote(value)));
                }
                cmd.push_str(&quote(&self.program));
                for arg in &self.args {
                    cmd.push(' ');
                    cmd.push_str(&quote(arg));
                }
                cmd
            }
        }
    }

    /// Build the `std::process::Command` that launches this command
    pub fn to_command(&self) -> Command {
        let mut cmd = match self.kind {
            CommandKind::Shell => {
                let mut cmd = Command::new(host_shell());
                cmd.arg("-c").arg(&self.program);
                cmd
            }
            CommandKind::Program => {
                let mut cmd = Command::new(&self.program);
                cmd.args(&self.args);
                cmd
            }
        };

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

fn host_shell() -> &'static OsStr {
    OsStr::new("sh")
}

fn quote(arg: &str) -> String {
    if arg.is_empty() {
        "''".to_string()
    } else if arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
