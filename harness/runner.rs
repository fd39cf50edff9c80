use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::HarnessError;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// How to launch the driver.
#[derive(Debug, Clone)]
pub struct DriverInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// `None` waits for as long as the driver runs.
    pub timeout: Option<Duration>,
}

/// Everything a finished driver run left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Runs the driver to completion and captures both streams in full.
pub fn run_driver(invocation: &DriverInvocation) -> Result<RunOutput, HarnessError> {
    let mut command = Command::new(&invocation.program);
    command
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::info!(program = %invocation.program.display(), args = ?invocation.args, "spawning driver");

    let spawn_err = |source| HarnessError::Spawn { program: invocation.program.clone(), source };

    match invocation.timeout {
        None => {
            let output = command.output().map_err(spawn_err)?;
            Ok(RunOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
        Some(timeout) => {
            let child = command.spawn().map_err(spawn_err)?;
            wait_with_timeout(child, timeout)
        }
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Polls the child until it exits or `timeout` elapses. The pipes are drained
/// on their own threads so a chatty child cannot block on a full pipe.
fn wait_with_timeout(mut child: Child, timeout: Duration) -> Result<RunOutput, HarnessError> {
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait().map_err(HarnessError::Wait)? {
            break status;
        }
        if Instant::now() >= deadline {
            if let Err(e) = child.kill() {
                tracing::warn!(error = %e, "failed to kill timed-out driver");
            } else if let Err(e) = child.wait() {
                tracing::warn!(error = %e, "failed to reap killed driver");
            }
            tracing::warn!(secs = timeout.as_secs(), "driver timed out");
            return Err(HarnessError::Timeout { secs: timeout.as_secs() });
        }
        thread::sleep(POLL_INTERVAL);
    };

    Ok(RunOutput {
        code: status.code(),
        stdout: join(stdout),
        stderr: join(stderr),
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
