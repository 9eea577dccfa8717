//! Configured tool invocation and its outcome types.

use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Command;

use super::subprocess;

/// How to launch one external tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Label used in logs (e.g. `"sherlock"`).
    pub name: String,
    /// Executable to run, resolved through `PATH` when not absolute.
    pub program: String,
    /// Arguments placed before the per-call arguments (e.g. `["-m", "sherlock_project"]`).
    pub args_prefix: Vec<String>,
    /// Working directory for the child process (uses current dir if `None`).
    pub working_dir: Option<PathBuf>,
    /// Maximum wall-clock time before the process is killed.
    pub timeout: Duration,
}

/// Captured output from one tool run.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Accept the output if the tool succeeded or still printed something.
    ///
    /// The enumeration and inspector tools exit non-zero after printing
    /// partial results, so a non-zero exit with non-blank stdout is usable.
    /// A non-zero exit with blank stdout is a genuine failure.
    pub fn into_usable(self) -> Result<Self, ProcessError> {
        if self.success() || !self.stdout.trim().is_empty() {
            Ok(self)
        } else {
            Err(ProcessError::NonZeroExit {
                exit_code: self.exit_code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Process-level failures.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The tool exceeded its timeout and was killed.
    #[error("Process timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The tool could not be started (missing binary, bad working dir, permissions).
    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited non-zero without printing anything usable.
    #[error("Process exited with code {exit_code}: {stderr}")]
    NonZeroExit { exit_code: i32, stderr: String },

    /// An I/O error while waiting on the child.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs a single configured tool. One child process per [`invoke`](Self::invoke)
/// call; no retries and no concurrency limit.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    spec: ToolSpec,
}

impl ProcessInvoker {
    pub fn new(spec: ToolSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Run the tool with `args` appended to its configured prefix.
    ///
    /// Returns the captured output whatever the exit code; only spawn
    /// failures, timeouts and wait errors are `Err`.
    pub async fn invoke(&self, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        let mut cmd = Command::new(&self.spec.program);
        cmd.args(&self.spec.args_prefix).args(args);

        if let Some(dir) = &self.spec.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(
            tool = %self.spec.name,
            program = %self.spec.program,
            ?args,
            timeout_ms = self.spec.timeout.as_millis() as u64,
            "Invoking external tool"
        );

        let output = subprocess::run_command(&mut cmd, &self.spec.program, self.spec.timeout).await?;

        tracing::debug!(
            tool = %self.spec.name,
            exit_code = output.exit_code,
            duration_ms = output.duration_ms,
            stdout_bytes = output.stdout.len(),
            "External tool finished"
        );

        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
