//! System subprocess runner.
//!
//! Implements the `CommandRunner` port with `std::process`. Probes are
//! bounded by a hard 5-second deadline: the child is polled with
//! `try_wait` and killed when the deadline passes, so a wedged tool can
//! never hang the CLI. Every failure mode (missing binary, non-zero exit,
//! timeout, unreadable output) collapses into an unavailable probe;
//! probing is a question, not an operation that can fail.

use std::{
    io::Read,
    path::Path,
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, warn};

use fastforge_core::application::ports::{CommandRunner, ToolProbe};

/// How long a probe may run before the child is killed.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval while waiting for a probed child.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Production command runner backed by `std::process`.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner {
    probe_timeout: Duration,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            probe_timeout: PROBE_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_probe_timeout(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn probe(&self, command: &str, args: &[&str]) -> ToolProbe {
        let spawned = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                debug!(command, error = %e, "probe spawn failed");
                return ToolProbe::unavailable();
            }
        };

        let deadline = Instant::now() + self.probe_timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    if !status.success() {
                        return ToolProbe::unavailable();
                    }
                    // Version strings are tiny; a tool that fills the pipe
                    // buffer instead would have hit the timeout above.
                    let mut output = String::new();
                    if let Some(mut stdout) = child.stdout.take() {
                        let _ = stdout.read_to_string(&mut output);
                    }
                    return ToolProbe::available(output.trim());
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!(command, "probe timed out, killing child");
                        let _ = child.kill();
                        let _ = child.wait();
                        return ToolProbe::unavailable();
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    debug!(command, error = %e, "probe wait failed");
                    let _ = child.kill();
                    let _ = child.wait();
                    return ToolProbe::unavailable();
                }
            }
        }
    }

    fn run(&self, command: &str, args: &[&str], cwd: &Path) -> Result<(), String> {
        let output = Command::new(command)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("failed to start {command}: {e}"))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!("{command} exited with {}: {}", output.status, stderr.trim()))
        }
    }
}
