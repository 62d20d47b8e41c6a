//! Process spawning, stream capture and timeout enforcement.

use super::outcome::{InvocationFailure, InvocationOutcome};
use super::quoting::render_shell_line;
use super::sink::{DiagnosticSink, NullSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

/// Default timeout for an invocation in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 300.0;

/// Size of each read from a child pipe.
const READ_CHUNK_SIZE: usize = 8192;

/// How the command is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// Execute the command directly with an argument vector.
    #[default]
    Direct,
    /// Run `command args...` as one line through the platform shell,
    /// quoting the final argument.
    Shell,
}

/// Everything needed to run one external command.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Program name or path.
    pub command: String,
    /// Ordered arguments; the last one is usually the free-form prompt.
    pub arguments: Vec<String>,
    /// Working directory for the child.
    pub working_directory: PathBuf,
    /// Time allowed before the child is terminated.
    pub timeout_seconds: f64,
    /// Stream chunks to the diagnostic sink while running.
    pub verbose: bool,
    /// Direct or shell invocation.
    pub mode: InvocationMode,
}

impl InvocationRequest {
    pub fn new(
        command: impl Into<String>,
        arguments: Vec<String>,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command: command.into(),
            arguments,
            working_directory: working_directory.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
            mode: InvocationMode::default(),
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: f64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_mode(mut self, mode: InvocationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The timeout as a `Duration`, or None if it is not a positive,
    /// representable number of seconds.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_seconds.is_nan() || self.timeout_seconds <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(self.timeout_seconds).ok()
    }

    fn build_command(&self) -> Command {
        match self.mode {
            InvocationMode::Direct => {
                let mut command = Command::new(&self.command);
                command.args(&self.arguments);
                command
            }
            InvocationMode::Shell => {
                let line = render_shell_line(&self.command, &self.arguments);
                shell_command(&line)
            }
        }
    }
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(not(unix))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

/// Run a command to completion, bounded by the request's timeout.
///
/// Chunks are passed to `sink` only when `request.verbose` is set. The
/// accumulated output is never visible until the outcome is built.
///
/// # Returns
///
/// * `Ok(InvocationOutcome)` - The process exited (with any exit code)
/// * `Err(InvocationFailure::Startup)` - The process could not be launched
/// * `Err(InvocationFailure::Timeout)` - The timeout fired; the child was signalled
pub async fn run(
    request: &InvocationRequest,
    sink: &dyn DiagnosticSink,
) -> Result<InvocationOutcome, InvocationFailure> {
    let timeout = request.timeout().ok_or_else(|| {
        InvocationFailure::startup(
            &request.command,
            format!(
                "timeout must be a positive number of seconds (got {})",
                request.timeout_seconds
            ),
        )
    })?;

    let mut command = request.build_command();
    command
        .current_dir(&request.working_directory)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = command
        .spawn()
        .map_err(|e| InvocationFailure::startup(&request.command, e))?;

    tracing::debug!(
        command = %request.command,
        pid = ?child.id(),
        cwd = %request.working_directory.display(),
        "spawned process"
    );

    let sink: &dyn DiagnosticSink = if request.verbose { sink } else { &NullSink };

    let collected = tokio::time::timeout(timeout, collect(&mut child, sink)).await;

    match collected {
        Ok(Ok((status, stdout, stderr))) => {
            let exit_code = exit_code(status);
            tracing::debug!(
                command = %request.command,
                exit_code,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "process exited"
            );
            Ok(InvocationOutcome::from_streams(
                exit_code,
                String::from_utf8_lossy(&stdout).into_owned(),
                String::from_utf8_lossy(&stderr).into_owned(),
            ))
        }
        Ok(Err(e)) => Err(InvocationFailure::startup(&request.command, e)),
        Err(_) => {
            tracing::warn!(
                command = %request.command,
                timeout_seconds = request.timeout_seconds,
                "process timed out, terminating"
            );
            terminate(child);
            Err(InvocationFailure::timeout(
                &request.command,
                request.timeout_seconds,
            ))
        }
    }
}

/// Drain both pipes concurrently, then reap the child.
async fn collect(
    child: &mut Child,
    sink: &dyn DiagnosticSink,
) -> std::io::Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (stdout, stderr) = tokio::join!(
        drain(stdout, |chunk| sink.on_stdout(chunk)),
        drain(stderr, |chunk| sink.on_stderr(chunk)),
    );

    let status = child.wait().await?;
    Ok((status, stdout, stderr))
}

/// Read a pipe until EOF into an accumulator.
async fn drain<R, F>(stream: Option<R>, mut on_chunk: F) -> Vec<u8>
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut accumulator = Vec::new();
    let Some(mut stream) = stream else {
        return accumulator;
    };

    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                accumulator.extend_from_slice(&chunk[..n]);
                on_chunk(&*String::from_utf8_lossy(&chunk[..n]));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read child output");
                break;
            }
        }
    }

    accumulator
}

fn exit_code(status: ExitStatus) -> i32 {
    // None means the process was ended by a signal.
    status.code().unwrap_or(-1)
}

/// Signal a timed-out child and reap it in the background.
///
/// The child's eventual exit status is discarded.
fn terminate(mut child: Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{self, Signal};
        use nix::unistd::Pid;

        match child.id() {
            Some(pid) => {
                if let Err(e) = signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    tracing::warn!(pid, error = %e, "SIGTERM failed, killing process");
                    let _ = child.start_kill();
                }
            }
            None => {
                // Already reaped.
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = child.start_kill();
    }

    tokio::spawn(async move {
        let _ = child.wait().await;
    });
}
