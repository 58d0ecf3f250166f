//! External tool invocation.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// One command line for the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: OsString,
    /// Arguments in order.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Start an invocation of `program` with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Program name for messages.
    #[must_use]
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Arguments as UTF-8 strings (lossy).
    #[must_use]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Space-joined command line, unquoted.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes invocations one at a time.
pub trait ToolRunner {
    /// Run `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started or exits
    /// unsuccessfully.
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs invocations as child processes, inheriting stdio.
#[derive(Debug, Default)]
pub struct SystemRunner {
    echo: bool,
}

impl SystemRunner {
    /// Create a runner. With `echo`, each command line is printed to
    /// stdout before it runs.
    #[must_use]
    pub const fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        if self.echo {
            println!("Running: {invocation}");
        } else {
            info!("Running: {invocation}");
        }

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|e| Error::ToolSpawn {
                program: invocation.program_name(),
                source: e,
            })?;

        debug!("{} exited with {status}", invocation.program_name());

        if !status.success() {
            return Err(Error::ToolFailed {
                program: invocation.program_name(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Prints invocations without executing them.
#[derive(Debug, Default)]
pub struct DryRunner {
    echo: bool,
}

impl DryRunner {
    /// Create a dry runner. With `echo`, command lines go to stdout.
    #[must_use]
    pub const fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl ToolRunner for DryRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        if self.echo {
            println!("Would run: {invocation}");
        } else {
            info!("Dry run, skipping: {invocation}");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_joins_with_spaces() {
        let inv = Invocation::new("ffmpeg")
            .arg("-y")
            .args(["-i", "in put.mp4"])
            .arg("out.mp4");
        assert_eq!(inv.to_string(), "ffmpeg -y -i in put.mp4 out.mp4");
        assert_eq!(inv.args_lossy().len(), 4);
    }

    #[test]
    fn test_dry_runner_always_succeeds() {
        let inv = Invocation::new("definitely-not-a-real-binary-vidcut");
        assert!(DryRunner::new(false).run(&inv).is_ok());
    }

    #[test]
    fn test_system_runner_reports_missing_program() {
        let inv = Invocation::new("definitely-not-a-real-binary-vidcut").arg("-version");
        let err = SystemRunner::new(false).run(&inv).unwrap_err();
        assert!(matches!(err, Error::ToolSpawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-binary-vidcut"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_propagates_exit_code() {
        let inv = Invocation::new("sh").args(["-c", "exit 3"]);
        let err = SystemRunner::new(false).run(&inv).unwrap_err();
        assert!(matches!(err, Error::ToolFailed { code: Some(3), .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_success() {
        let inv = Invocation::new("true");
        assert!(SystemRunner::new(false).run(&inv).is_ok());
    }
}
