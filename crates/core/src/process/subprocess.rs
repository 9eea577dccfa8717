//! Spawn + capture + timeout handling shared by every tool invocation.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::invoker::{ProcessError, ProcessOutput};

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output exceeding this limit is truncated.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Spawn `cmd`, capture stdout/stderr, and enforce `timeout` over the whole
/// run, pipe reads included. On expiry the child's process group is killed.
///
/// The caller sets program, arguments and working directory. `program` is
/// only used to label spawn failures.
pub async fn run_command(
    cmd: &mut Command,
    program: &str,
    timeout: Duration,
) -> Result<ProcessOutput, ProcessError> {
    // `kill_on_drop(true)` kills the child when it is dropped on timeout.
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Own process group, so helpers the tool spawns can be killed with it.
    #[cfg(unix)]
    cmd.process_group(0);

    let start = Instant::now();
    let deadline = tokio::time::Instant::now() + timeout;

    let mut child = cmd.spawn().map_err(|source| ProcessError::SpawnFailure {
        program: program.to_string(),
        source,
    })?;
    let pid = child.id();

    // Read the pipes in their own tasks so `child.wait()` can borrow `child`
    // and a chatty tool cannot block on a full pipe.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let mut stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let mut stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    // The deadline covers the pipe reads too: a background helper holding
    // stdout open keeps them pending after the tool itself has exited.
    let finished = tokio::time::timeout_at(deadline, async {
        let status = child.wait().await?;
        let stdout = (&mut stdout_task).await.unwrap_or_default();
        let stderr = (&mut stderr_task).await.unwrap_or_default();
        Ok::<_, std::io::Error>((status, stdout, stderr))
    })
    .await;

    match finished {
        Ok(Ok((status, stdout_bytes, stderr_bytes))) => Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
            stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
            exit_code: status.code().unwrap_or(-1),
            duration_ms: start.elapsed().as_millis() as u64,
        }),
        Ok(Err(e)) => Err(ProcessError::Io(e)),
        Err(_elapsed) => {
            kill_process_group(pid);
            let _ = child.start_kill();
            stdout_task.abort();
            stderr_task.abort();
            Err(ProcessError::Timeout {
                elapsed_ms: start.elapsed().as_millis() as u64,
            })
        }
    }
}

/// SIGKILL every process in the group led by `pid`.
#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    let Some(pgid) = pid.and_then(|p| libc::pid_t::try_from(p).ok()) else {
        return;
    };
    // Safety: kill(2) takes plain integers; a stale group id yields ESRCH.
    let ret = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if ret != 0 {
        tracing::debug!(
            pgid,
            error = %std::io::Error::last_os_error(),
            "Process group already gone"
        );
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

/// Drain a child pipe into memory, stopping at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let Some(pipe) = pipe else {
        return Vec::new();
    };

    let mut buf = Vec::new();
    if let Err(e) = pipe.take(MAX_OUTPUT_BYTES as u64).read_to_end(&mut buf).await {
        tracing::warn!(error = %e, captured = buf.len(), "Failed reading tool output");
    }
    if buf.len() == MAX_OUTPUT_BYTES {
        tracing::warn!(limit = MAX_OUTPUT_BYTES, "Tool output truncated");
    }
    buf
}
