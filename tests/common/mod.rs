//! Common test utilities and harness
//!
//! Runs the built `geomgen` binary and captures everything it prints.

use std::ffi::OsStr;
use std::process::{Command, Output};

/// Captured result of one binary invocation
pub struct GeneratorRun {
    pub output: Output,
}

impl GeneratorRun {
    /// Run the binary with the given arguments
    pub fn with_args(args: &[&str]) -> Self {
        let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
        Self::with_os_args(&args)
    }

    /// Run the binary with arguments that need not be UTF-8
    pub fn with_os_args(args: &[&OsStr]) -> Self {
        let output = Command::new(env!("CARGO_BIN_EXE_geomgen"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run geomgen");
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> &str {
        std::str::from_utf8(&self.output.stdout).expect("stdout should be UTF-8")
    }

    pub fn stderr(&self) -> &str {
        std::str::from_utf8(&self.output.stderr).expect("stderr should be UTF-8")
    }

    /// Assert a clean failure: exit 1, empty stdout, one diagnostic line
    pub fn assert_failed_with(&self, message: &str) {
        assert_eq!(self.code(), Some(1), "stderr: {}", self.stderr());
        assert!(self.stdout().is_empty(), "unexpected stdout: {}", self.stdout());
        assert_eq!(self.stderr().lines().count(), 1, "stderr: {}", self.stderr());
        assert!(
            self.stderr().contains(message),
            "expected {message:?} in {:?}",
            self.stderr()
        );
    }
}
