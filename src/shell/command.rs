//! Bounded-time external command execution.

use crate::error::{Result, ValidateError};
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

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

/// A program plus its arguments, run directly without a shell.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Program name or path. Bare names are looked up on `PATH`.
    pub program: PathBuf,

    /// Arguments passed verbatim.
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Human-readable rendering used in messages and logs.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Run `spec` with stdout and stderr captured, killing it after `timeout`.
///
/// Returns `Ok` with the captured output whether or not the program exited
/// successfully; callers decide what a non-zero exit means. Spawn failures
/// and deadline overruns are errors. The deadline covers output collection
/// too, so a background process left holding the pipes cannot stall the run.
pub fn execute_with_timeout(spec: &CommandSpec, timeout: Duration) -> Result<CommandResult> {
    let start = Instant::now();
    let deadline = start + timeout;
    let command = spec.display();

    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ValidateError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

    // Drain both pipes concurrently so a chatty child cannot fill one and block.
    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        spawn_reader(stdout, Pipe::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(stderr, Pipe::Stderr, tx);
    }

    let status = match wait_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            reap(&mut child);
            tracing::debug!("'{}' killed after {:?}", command, timeout);
            return Err(timed_out(command, timeout));
        }
        Err(e) => {
            reap(&mut child);
            return Err(e);
        }
    };

    // Reader threads left behind on timeout are detached.
    let Some((stdout, stderr)) = collect_output(&rx, deadline) else {
        tracing::debug!(
            "'{}' exited but its output stayed open past {:?}",
            command,
            timeout
        );
        return Err(timed_out(command, timeout));
    };
    let duration = start.elapsed();

    tracing::debug!(
        "'{}' exited with {:?} in {:?}",
        command,
        status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
    })
}

/// Run `spec` and require a zero exit status.
pub fn execute_checked(spec: &CommandSpec, timeout: Duration) -> Result<CommandResult> {
    let result = execute_with_timeout(spec, timeout)?;
    if result.success {
        Ok(result)
    } else {
        Err(ValidateError::CommandFailed {
            command: spec.display(),
            code: result.exit_code,
        })
    }
}

/// Which output stream a reader thread drained.
#[derive(Debug, Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

fn timed_out(command: String, timeout: Duration) -> ValidateError {
    ValidateError::CommandTimeout {
        command,
        seconds: timeout.as_secs(),
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn spawn_reader<R>(mut pipe: R, which: Pipe, tx: Sender<(Pipe, String)>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((which, String::from_utf8_lossy(&buf).into_owned()));
    });
}

/// Wait for both readers to hit EOF, giving up at `deadline`.
fn collect_output(rx: &Receiver<(Pipe, String)>, deadline: Instant) -> Option<(String, String)> {
    let mut stdout = String::new();
    let mut stderr = String::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Pipe::Stdout, text)) => stdout = text,
            Ok((Pipe::Stderr, text)) => stderr = text,
            Err(RecvTimeoutError::Disconnected) => return Some((stdout, stderr)),
            Err(RecvTimeoutError::Timeout) => return None,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("/bin/sh").arg("-c").arg(script)
    }

    #[test]
    fn captures_stdout_of_successful_command() {
        let result = execute_with_timeout(&sh("echo hello"), Duration::from_secs(5)).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn captures_stderr_separately() {
        let result = execute_with_timeout(&sh("echo oops >&2"), Duration::from_secs(5)).unwrap();

        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn non_zero_exit_is_not_an_error() {
        let result = execute_with_timeout(&sh("exit 3"), Duration::from_secs(5)).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn checked_execution_rejects_non_zero_exit() {
        let err = execute_checked(&sh("exit 3"), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(
            err,
            ValidateError::CommandFailed { code: Some(3), .. }
        ));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let spec = CommandSpec::new("/nonexistent/definitely-not-here");
        let err = execute_with_timeout(&spec, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ValidateError::CommandSpawn { .. }));
    }

    #[test]
    fn slow_command_times_out() {
        let start = Instant::now();
        let err = execute_with_timeout(&sh("exec sleep 5"), Duration::from_secs(1)).unwrap_err();

        assert!(matches!(
            err,
            ValidateError::CommandTimeout { seconds: 1, .. }
        ));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn background_process_holding_output_cannot_outlast_deadline() {
        let start = Instant::now();
        let err = execute_with_timeout(
            &sh("sleep 6 & echo movierec-kernel; exit 0"),
            Duration::from_secs(1),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ValidateError::CommandTimeout { seconds: 1, .. }
        ));
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn output_is_collected_when_pipes_close_in_time() {
        let result =
            execute_with_timeout(&sh("echo out; echo err >&2"), Duration::from_secs(5)).unwrap();
        assert_eq!(result.stdout, "out\n");
        assert_eq!(result.stderr, "err\n");
    }

    #[test]
    fn reap_kills_and_collects_child() {
        let mut child = Command::new("/bin/sh")
            .arg("-c")
            .arg("exec sleep 5")
            .spawn()
            .unwrap();
        let start = Instant::now();
        reap(&mut child);

        assert!(child.try_wait().unwrap().is_some());
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("jupyter").arg("kernelspec").arg("list");
        assert_eq!(spec.display(), "jupyter kernelspec list");
    }
}
