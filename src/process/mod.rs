//! External process execution
//!
//! Every child process (package manager installs, bootstrap runs) goes
//! through [`CommandExecutor`] so the workflow can be exercised without
//! spawning anything. Whether output is inherited or captured is fixed on
//! the [`Invocation`] before the child starts.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};
use wait_timeout::ChildExt;

use crate::error::{
    Result,
    install::{timed_out, tooling_unavailable},
};

#[cfg(test)]
pub mod testing;

/// What happens to the child's standard streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to our stdout/stderr
    Inherit,
    /// Child output is buffered and returned in the [`ProcessResult`]
    Capture,
}

/// A fully described command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Bare name or resolved path of the executable
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
    pub timeout: Option<Duration>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            output: OutputMode::Capture,
            timeout: None,
        }
    }

    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of one finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs the invocation to completion.
    ///
    /// A non-zero exit is reported through [`ProcessResult::exit_code`], not
    /// as an error. Errors are reserved for failing to spawn or wait on the
    /// child, and for exceeding the invocation's timeout.
    fn execute(&self, invocation: &Invocation) -> Result<ProcessResult>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<ProcessResult> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }
        match invocation.output {
            OutputMode::Inherit => {
                command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::Capture => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
            }
        }

        info!(command = %invocation, cwd = ?invocation.cwd, "spawning");
        let mut child = command
            .spawn()
            .map_err(|e| tooling_unavailable(invocation.program.display().to_string(), e))?;

        // Drain pipes while waiting so a chatty child cannot fill them and stall.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = wait(&mut child, invocation)?;
        let result = ProcessResult {
            exit_code: status.code(),
            stdout: stdout.map(collect),
            stderr: stderr.map(collect),
        };
        debug!(command = %invocation, exit_code = ?result.exit_code, "process exited");

        Ok(result)
    }
}

/// Wait for the child, killing it once the invocation's timeout elapses
fn wait(child: &mut Child, invocation: &Invocation) -> Result<ExitStatus> {
    let Some(limit) = invocation.timeout else {
        return Ok(child.wait()?);
    };

    match child.wait_timeout(limit)? {
        Some(status) => Ok(status),
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(timed_out(invocation.to_string(), limit.as_secs()))
        }
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}
