//! Process capability used by the launcher: probe for a program, run a program.
//!
//! The launcher only depends on the `CommandRunner` trait; `SystemRunner` is
//! the implementation backed by `std::process::Command`.

use std::process::{Command, Stdio};

use crate::error::LaunchError;

/// Default existence probe; exits zero iff its argument resolves on `PATH`.
pub const DEFAULT_PROBE_PROGRAM: &str = "which";

pub trait CommandRunner {
    /// True if `program` can be resolved on the search path.
    fn exists(&self, program: &str) -> bool;

    /// Runs `program` with `args` and waits for it to exit.
    fn run(&self, program: &str, args: &[String]) -> Result<(), LaunchError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn exists(&self, program: &str) -> bool {
        (**self).exists(program)
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        (**self).run(program, args)
    }
}

/// Runs real processes on the host.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    probe_program: String,
    quiet: bool,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self {
            probe_program: DEFAULT_PROBE_PROGRAM.to_string(),
            quiet: false,
        }
    }
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `program` instead of `which` for existence probes.
    pub fn with_probe_program(mut self, program: impl Into<String>) -> Self {
        self.probe_program = program.into();
        self
    }

    /// Discard the launcher's stdout/stderr instead of inheriting them.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn command_for(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = if cfg!(windows) && program == "start" {
            windows_start_command(args)
        } else {
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        };
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        cmd
    }
}

/// `start` is a cmd.exe builtin, and cmd.exe would split an unquoted URL at `&`.
/// The URL protocol handler receives the URL as a single argument instead.
fn windows_start_command(args: &[String]) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.arg("url.dll,FileProtocolHandler").args(args);
    cmd
}

impl CommandRunner for SystemRunner {
    fn exists(&self, program: &str) -> bool {
        let status = Command::new(&self.probe_program)
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!("probe {} {} failed to start: {}", self.probe_program, program, e);
                false
            }
        }
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        let status = self
            .command_for(program, args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;
        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: program.to_string(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "urlopen-test-no-such-program-7f3a";

    #[test]
    fn default_probe_is_which() {
        assert_eq!(SystemRunner::new().probe_program, "which");
        let r = SystemRunner::new().with_probe_program("command-v");
        assert_eq!(r.probe_program, "command-v");
    }

    #[test]
    fn windows_start_keeps_ampersand_query_in_one_argument() {
        let url = "https://idp.example.com/auth?client_id=x&redirect_uri=y".to_string();
        let cmd = windows_start_command(std::slice::from_ref(&url));
        assert_eq!(cmd.get_program(), "rundll32");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["url.dll,FileProtocolHandler", url.as_str()]);
    }

    #[test]
    fn non_start_programs_run_as_given() {
        let args = vec!["https://a/?x=1&y=2".to_string()];
        let cmd = SystemRunner::new().command_for("xdg-open", &args);
        assert_eq!(cmd.get_program(), "xdg-open");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), vec!["https://a/?x=1&y=2"]);
    }

    #[test]
    fn missing_program_does_not_exist() {
        assert!(!SystemRunner::new().exists(MISSING));
    }

    #[test]
    fn missing_probe_program_means_not_found() {
        let r = SystemRunner::new().with_probe_program(MISSING);
        assert!(!r.exists("sh"));
    }

    #[test]
    fn run_missing_program_is_spawn_error() {
        let err = SystemRunner::new()
            .quiet(true)
            .run(MISSING, &["https://example.com".to_string()])
            .unwrap_err();
        match err {
            LaunchError::Spawn { program, source } => {
                assert_eq!(program, MISSING);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Spawn, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_nonzero_exit_is_exit_status_error() {
        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let err = SystemRunner::new().quiet(true).run("sh", &args).unwrap_err();
        match err {
            LaunchError::ExitStatus { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("expected ExitStatus, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_success() {
        let args = vec!["-c".to_string(), "exit 0".to_string()];
        assert!(SystemRunner::new().quiet(true).run("sh", &args).is_ok());
    }
}
