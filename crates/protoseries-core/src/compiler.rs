//! External schema compiler invocation

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

/// Exit status of a schema compiler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerStatus {
    code: Option<i32>,
}

impl CompilerStatus {
    /// Status for a process that exited with `code` (`None` when it was
    /// terminated by a signal).
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Whether the compiler exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CompilerStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

impl fmt::Display for CompilerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs an external schema compiler.
pub trait SchemaCompiler {
    /// Program name used in logs and errors.
    fn program(&self) -> String;

    /// Run the compiler with `args`, blocking until it exits.
    ///
    /// An `Err` means the compiler could not be started at all.
    fn run(&self, args: &[String]) -> io::Result<CompilerStatus>;
}

/// [`SchemaCompiler`] backed by a `protoc` executable.
#[derive(Debug, Clone)]
pub struct ProtocCompiler {
    executable: PathBuf,
}

impl ProtocCompiler {
    /// Create a compiler that runs `executable`.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Arguments for generating Java bindings of `proto_file` into
    /// `java_out`, resolving imports against `proto_path`.
    pub fn java_args(proto_path: &Path, java_out: &Path, proto_file: &Path) -> Vec<String> {
        vec![
            format!("--proto_path={}", proto_path.display()),
            format!("--java_out={}", java_out.display()),
            proto_file.display().to_string(),
        ]
    }
}

impl SchemaCompiler for ProtocCompiler {
    fn program(&self) -> String {
        self.executable.display().to_string()
    }

    fn run(&self, args: &[String]) -> io::Result<CompilerStatus> {
        tracing::debug!(program = %self.executable.display(), ?args, "Running schema compiler");

        let status = Command::new(&self.executable).args(args).status()?;
        Ok(status.into())
    }
}

/// What to do when the schema compiler fails or cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerFailurePolicy {
    /// Record the outcome and continue without reporting it.
    Ignore,
    /// Log a warning and continue.
    #[default]
    Warn,
    /// Abort the run.
    Fail,
}

impl fmt::Display for CompilerFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerFailurePolicy::Ignore => write!(f, "ignore"),
            CompilerFailurePolicy::Warn => write!(f, "warn"),
            CompilerFailurePolicy::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for CompilerFailurePolicy {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(CompilerFailurePolicy::Ignore),
            "warn" => Ok(CompilerFailurePolicy::Warn),
            "fail" => Ok(CompilerFailurePolicy::Fail),
            other => Err(GeneratorError::Config(format!(
                "unknown compiler failure policy '{other}' (expected ignore, warn or fail)"
            ))),
        }
    }
}
