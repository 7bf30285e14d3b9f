//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ProbeError;

/// Builder for blocking subprocess invocations.
///
/// Stdout is captured; stderr stays attached to the parent so diagnostics
/// from the external tool reach the terminal unmodified.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Display the command for log and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run to completion and return captured stdout.
    ///
    /// The child's exit status is deliberately not inspected; callers that
    /// consume tool output treat whatever was printed as the answer.
    pub fn capture_stdout(&self) -> Result<String, ProbeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| ProbeError::Spawn {
                command: self.program.clone(),
                error: e,
            })?;

        let mut stdout = String::new();
        if let Some(ref mut out) = child.stdout {
            // Tool output is not guaranteed to be UTF-8.
            let mut bytes = Vec::new();
            let _ = out.read_to_end(&mut bytes);
            stdout = String::from_utf8_lossy(&bytes).into_owned();
        }

        let _ = child.wait();
        Ok(stdout)
    }
}
