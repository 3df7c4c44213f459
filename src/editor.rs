//! # Editor Integration
//!
//! Picks the user's preferred editor and launches it on the edit buffer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, io,
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    constants::{DEFAULT_EDITOR_UNIX, DEFAULT_EDITOR_WINDOWS, EDITOR_ENV_VARS},
    error::{PromptError, Result},
};

/// Returns the editor used when no environment variable is set.
pub const fn platform_default() -> &'static str {
    if cfg!(windows) {
        DEFAULT_EDITOR_WINDOWS
    } else {
        DEFAULT_EDITOR_UNIX
    }
}

/// Picks the editor command string.
///
/// The editor is determined by (in order of priority):
/// 1. `$GIT_EDITOR`
/// 2. `$VISUAL`
/// 3. `$EDITOR`
/// 4. `notepad` on Windows, `nano` elsewhere
///
/// `lookup` returns the value of an environment variable. Empty values are
/// treated as unset.
pub fn resolve<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    EDITOR_ENV_VARS
        .iter()
        .find_map(|var| lookup(var).filter(|value| !value.is_empty()))
        .unwrap_or_else(|| platform_default().to_string())
}

/// A parsed editor command line, e.g. `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    raw: String,
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Resolves the editor from the process environment.
    ///
    /// Call this once at startup and hand the result to every prompt.
    pub fn from_env() -> Result<Self> {
        Self::parse(&resolve(|var| env::var(var).ok()))
    }

    /// Parses an editor command with shell quoting rules
    /// (e.g. `nvim -c ":normal G"`).
    pub fn parse(command: &str) -> Result<Self> {
        let invalid = || PromptError::EditorCommand {
            command: command.to_string(),
        };

        let mut parts = shlex::split(command).ok_or_else(invalid)?.into_iter();
        let program = parts.next().ok_or_else(invalid)?;

        Ok(Self {
            raw: command.to_string(),
            program,
            args: parts.collect(),
        })
    }

    /// The command string as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Short name shown in the prompt: the last path component of the
    /// configured command (`/usr/bin/vim` shows as `vim`).
    pub fn name(&self) -> &str {
        Path::new(&self.raw)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.raw)
    }
}

/// Standard streams handed to the editor process.
#[derive(Debug)]
pub struct EditorStdio {
    pub stdin: Stdio,
    pub stdout: Stdio,
    pub stderr: Stdio,
}

impl EditorStdio {
    /// The editor shares the terminal the prompt draws on. Its output goes
    /// to stderr so stdout stays free for the answer.
    pub fn prompt_terminal() -> Self {
        Self {
            stdin: Stdio::inherit(),
            stdout: Stdio::from(io::stderr()),
            stderr: Stdio::inherit(),
        }
    }

    pub fn null() -> Self {
        Self {
            stdin: Stdio::null(),
            stdout: Stdio::null(),
            stderr: Stdio::null(),
        }
    }
}

/// Runs an editor on a file and waits for it to exit.
pub trait Launcher {
    fn launch(&self, editor: &EditorCommand, path: &Path, stdio: EditorStdio) -> Result<()>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, editor: &EditorCommand, path: &Path, stdio: EditorStdio) -> Result<()> {
        (**self).launch(editor, path, stdio)
    }
}

/// Launches the editor as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, editor: &EditorCommand, path: &Path, stdio: EditorStdio) -> Result<()> {
        let status = Command::new(editor.program())
            .args(editor.args())
            .arg(path)
            .stdin(stdio.stdin)
            .stdout(stdio.stdout)
            .stderr(stdio.stderr)
            .status()
            .map_err(|source| PromptError::EditorSpawn {
                program: editor.program().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(PromptError::EditorFailed {
                program: editor.program().to_string(),
                status,
            });
        }

        Ok(())
    }
}
