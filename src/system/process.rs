use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Combined output and exit status of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// stdout and stderr as a single stream.
    pub output: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Runs shell command strings.
///
/// `Err` is reserved for commands that could not be started at all; a
/// command that runs and exits non-zero is reported through
/// [`CommandOutput::success`].
pub trait ProcessExecutor {
    fn capture(&self, command: &str) -> Result<CommandOutput>;
}

/// Executes commands through the platform shell inside a project root.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    working_dir: PathBuf,
}

impl ShellExecutor {
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }
}

impl ProcessExecutor for ShellExecutor {
    fn capture(&self, command: &str) -> Result<CommandOutput> {
        let (shell, arg) = if cfg!(target_os = "windows") {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        // Fold stderr into stdout so the caller sees one ordered stream. The
        // group makes the redirect cover every part of a compound command.
        let combined = format!("( {command} ) 2>&1");

        let output = Command::new(shell)
            .args([arg, combined.as_str()])
            .current_dir(&self.working_dir)
            .output()
            .with_context(|| format!("Failed to execute command: {command}"))?;

        Ok(CommandOutput {
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
            success: output.status.success(),
        })
    }
}
