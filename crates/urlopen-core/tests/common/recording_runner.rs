//! Fake `CommandRunner` that records probes and runs instead of touching the process table.

use std::cell::RefCell;
use std::io;

use urlopen_core::{CommandRunner, LaunchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Exists(String),
    Run(String, Vec<String>),
}

#[derive(Default)]
pub struct RecordingRunner {
    present: Vec<String>,
    fail_run: bool,
    calls: RefCell<Vec<Call>>,
}

impl RecordingRunner {
    /// Runner where exactly `programs` exist on the simulated `PATH`.
    pub fn with_programs(programs: &[&str]) -> Self {
        Self {
            present: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Every `run` fails with a spawn error.
    pub fn failing_runs(mut self) -> Self {
        self.fail_run = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn probed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Exists(p) => Some(p),
                Call::Run(..) => None,
            })
            .collect()
    }

    pub fn runs(&self) -> Vec<(String, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Run(p, a) => Some((p, a)),
                Call::Exists(_) => None,
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn exists(&self, program: &str) -> bool {
        self.calls
            .borrow_mut()
            .push(Call::Exists(program.to_string()));
        self.present.iter().any(|p| p == program)
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        self.calls
            .borrow_mut()
            .push(Call::Run(program.to_string(), args.to_vec()));
        if self.fail_run {
            return Err(LaunchError::Spawn {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        Ok(())
    }
}
