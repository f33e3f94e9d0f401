//! Supervisor collaborator
//!
//! [`Supervisor`] is the seam between the utilities and the process
//! supervisor. [`Pm2`] implements it by shelling out to the `pm2` CLI.

use crate::error::{Result, SupervisorError};
use crate::parse::parse_process_list;
use crate::record::{ProcessId, ProcessRecord};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Captured list output is capped at 2 MiB
pub const DEFAULT_OUTPUT_LIMIT: usize = 2 * 1024 * 1024;

/// Process supervisor abstraction
#[async_trait]
pub trait Supervisor: Send + Sync {
    /// Executable or display name of the supervisor
    fn name(&self) -> &str;

    /// Every managed process, in the supervisor's order
    async fn list_processes(&self) -> Result<Vec<ProcessRecord>>;

    /// Stop one managed process
    async fn stop_process(&self, id: &ProcessId) -> Result<()>;
}

/// Supervisor executable for the current platform
pub fn default_program() -> &'static str {
    if cfg!(windows) { "pm2.cmd" } else { "pm2" }
}

#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Executable to run, looked up on `PATH` when not a path
    pub program: String,
    /// Maximum stdout captured from the list command; stop output is not capped
    pub output_limit: usize,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            program: default_program().to_string(),
            output_limit: DEFAULT_OUTPUT_LIMIT,
        }
    }
}

impl SupervisorConfig {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

/// pm2 CLI wrapper
pub struct Pm2 {
    config: SupervisorConfig,
}

impl Pm2 {
    pub fn new(config: SupervisorConfig) -> Self {
        Self { config }
    }

    /// Run a pm2 command and return stdout, capped at `limit` bytes when set
    async fn run_command(&self, args: &[&str], limit: Option<usize>) -> Result<String> {
        let program = &self.config.program;
        let exceeds = |len: usize| limit.is_some_and(|limit| len > limit);

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!("Running: {} {}", program, args.join(" "));

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SupervisorError::NotFound(program.clone()),
            _ => SupervisorError::Io(e),
        })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("stderr was not captured"))?;

        let read_stdout = async {
            let mut buf = Vec::new();
            let cap = limit.map_or(u64::MAX, |limit| limit as u64 + 1);
            stdout.take(cap).read_to_end(&mut buf).await?;
            if exceeds(buf.len()) {
                if let Err(e) = child.start_kill() {
                    tracing::debug!("Failed to kill {}: {}", program, e);
                }
            }
            Ok::<_, std::io::Error>(buf)
        };
        let read_stderr = async {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };
        let (out, err) = tokio::try_join!(read_stdout, read_stderr)?;

        let status = child.wait().await?;

        if let Some(limit) = limit.filter(|_| exceeds(out.len())) {
            return Err(SupervisorError::OutputTooLarge { limit });
        }

        if !status.success() {
            let stderr = String::from_utf8_lossy(&err).trim().to_string();
            let message = if stderr.is_empty() {
                String::from_utf8_lossy(&out).trim().to_string()
            } else {
                stderr
            };
            return Err(SupervisorError::CommandFailed {
                status: status.to_string(),
                stderr: message,
            });
        }

        Ok(String::from_utf8_lossy(&out).to_string())
    }
}

#[async_trait]
impl Supervisor for Pm2 {
    fn name(&self) -> &str {
        &self.config.program
    }

    async fn list_processes(&self) -> Result<Vec<ProcessRecord>> {
        let output = self
            .run_command(&["jlist"], Some(self.config.output_limit))
            .await?;
        parse_process_list(&output)
    }

    async fn stop_process(&self, id: &ProcessId) -> Result<()> {
        let id = id.to_string();
        self.run_command(&["stop", id.as_str()], None).await?;
        Ok(())
    }
}
