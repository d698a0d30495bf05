//! External command execution.
//!
//! Commands are spawned directly from an argv (no intermediate shell) with
//! stdout and stderr captured. An optional timeout bounds how long the caller
//! blocks; on expiry the child is killed and [`EnvcheckError::Timeout`] is
//! returned.

use crate::error::{EnvcheckError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Upper bound on how long to wait for the command (None = no timeout).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with the given timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Something that can run an external program and report what it printed.
///
/// Probes depend on this trait rather than on [`std::process`] directly so
/// they can be driven by a scripted runner in tests.
pub trait ProcessRunner {
    /// Run `program` with `args` and wait for it to finish.
    fn run(&self, program: &str, args: &[&str], options: &CommandOptions)
        -> Result<CommandResult>;
}

/// [`ProcessRunner`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        execute(program, args, options)
    }
}

/// Which pipe a reader thread drained.
enum Stream {
    Stdout,
    Stderr,
}

/// Execute a program with arguments, capturing its output.
///
/// With a timeout, one deadline covers both the child's exit and the
/// closing of its pipes, which a background grandchild may keep open.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let deadline = options.timeout.map(|timeout| start + timeout);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!("Spawning {} {:?}", program, args);

    let mut child = cmd.spawn().map_err(|e| EnvcheckError::SpawnFailed {
        program: program.to_string(),
        message: e.to_string(),
    })?;

    // Drain both pipes off-thread so a child that fills one of them
    // cannot block forever while we wait on it.
    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        drain(stdout, Stream::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        drain(stderr, Stream::Stderr, tx.clone());
    }
    drop(tx);

    let timed_out = |what: &str| {
        let timeout = options.timeout.unwrap_or_default();
        tracing::warn!("{} {} ({}s timeout)", program, what, timeout.as_secs());
        EnvcheckError::Timeout {
            program: program.to_string(),
            timeout,
        }
    };

    let status = match deadline {
        Some(deadline) => match wait_until(&mut child, deadline)? {
            Some(status) => status,
            None => return Err(timed_out("did not finish and was killed")),
        },
        None => child.wait()?,
    };

    let (stdout, stderr) = match collect_output(&rx, deadline) {
        Some(output) => output,
        None => return Err(timed_out("exited but its output pipes stayed open")),
    };
    let duration = start.elapsed();

    tracing::debug!(
        "{} exited with {:?} after {}ms",
        program,
        status.code(),
        duration.as_millis()
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Poll the child until it exits or `deadline` passes.
///
/// Returns `None` after killing and reaping a child that overran.
fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R, stream: Stream, tx: Sender<(Stream, String)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

/// Gather what the reader threads send until every pipe has closed.
///
/// Returns `None` if `deadline` passes first.
fn collect_output(
    rx: &Receiver<(Stream, String)>,
    deadline: Option<Instant>,
) -> Option<(String, String)> {
    let mut stdout = String::new();
    let mut stderr = String::new();
    loop {
        let received = match deadline {
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok((Stream::Stdout, text)) => stdout = text,
            Ok((Stream::Stderr, text)) => stderr = text,
            Err(RecvTimeoutError::Disconnected) => return Some((stdout, stderr)),
            Err(RecvTimeoutError::Timeout) => return None,
        }
    }
}
