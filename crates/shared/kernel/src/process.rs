//! External process execution.
//!
//! Every tool the scaffolder shells out to goes through [`ProcessRunner`], so the
//! pipeline can be driven by [`SystemRunner`] in production and by recording stubs in tests.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Errors raised while running an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The program could not be started (missing from `PATH`, bad working directory, ...).
    #[error("Failed to execute '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    /// The program ran but did not exit successfully.
    #[error("Command '{command}' failed with {}{}", describe_code(.code), describe_stderr(.stderr))]
    Status { command: String, code: Option<i32>, stderr: String },
}

fn describe_code(code: &Option<i32>) -> Cow<'static, str> {
    code.map_or(Cow::Borrowed("no exit code (terminated by signal)"), |c| {
        Cow::Owned(format!("exit code {c}"))
    })
}

fn describe_stderr(stderr: &str) -> Cow<'_, str> {
    if stderr.is_empty() { Cow::Borrowed("") } else { Cow::Owned(format!(": {stderr}")) }
}

/// A single external command: program, arguments, and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: cwd.into() }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs an [`Invocation`] to completion.
///
/// Implementations block until the process exits; callers rely on that to serialize
/// tools that share state on disk (e.g. a package manager's lock file).
pub trait ProcessRunner {
    /// Runs the command and waits for it to exit.
    ///
    /// # Errors
    /// Returns [`ProcessError::Spawn`] if the program cannot be started and
    /// [`ProcessError::Status`] if it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        (**self).run(invocation)
    }
}

/// Runs commands as real child processes with captured output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %invocation, cwd = %invocation.cwd.display()))]
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::Spawn { program: invocation.program.clone(), source })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();

        if !output.status.success() {
            return Err(ProcessError::Status {
                command: invocation.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            debug!(%stderr, "Process reported on stderr");
        }
        debug!(status = %output.status, "Process finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn invocation_renders_command_line() {
        let invocation = Invocation::new("npm", "/tmp").args(["install", "--save"]).arg("typescript");
        assert_eq!(invocation.to_string(), "npm install --save typescript");
        assert_eq!(invocation.cwd, PathBuf::from("/tmp"));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempdir().expect("tempdir");
        let invocation = Invocation::new("mkts-definitely-not-installed", dir.path());
        let err = SystemRunner.run(&invocation).expect_err("program does not exist");
        assert!(matches!(err, ProcessError::Spawn { .. }), "unexpected error: {err}");
        assert!(err.to_string().contains("mkts-definitely-not-installed"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_status_error() {
        let dir = tempdir().expect("tempdir");
        let invocation = Invocation::new("sh", dir.path()).args(["-c", "echo broken >&2; exit 3"]);
        let err = SystemRunner.run(&invocation).expect_err("command fails");
        let ProcessError::Status { code, stderr, .. } = &err else {
            panic!("expected status error, got: {err}");
        };
        assert_eq!(*code, Some(3));
        assert_eq!(stderr, "broken");
        assert!(err.to_string().contains("exit code 3: broken"));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_the_requested_directory() {
        let dir = tempdir().expect("tempdir");
        let invocation = Invocation::new("sh", dir.path()).args(["-c", "touch marker"]);
        SystemRunner.run(&invocation).expect("command succeeds");
        assert!(dir.path().join("marker").exists());
    }
}
