//! External command execution

use anyhow::{Context, Result};
use std::process::Command;

/// Seam for running external commands
///
/// Every side-effecting invocation (bundler, the Rails generator) goes through
/// this trait so tests can substitute a recording fake and assert on the exact
/// argument vectors without spawning subprocesses.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or exits non-zero.
    fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Production runner backed by `std::process::Command`
///
/// Stdio is inherited, so the child's own output and diagnostics reach the
/// terminal directly.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run {program}"))?;

        if !status.success() {
            anyhow::bail!("{program} exited with {status}");
        }

        Ok(())
    }
}
