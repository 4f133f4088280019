//! Tokio process adapter
//!
//! Runs external tools with `tokio::process`. Children are killed if their
//! future is dropped, so no process outlives a failed stage.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::model::Invocation;
use crate::error::{GrabError, GrabResult};
use crate::ports::*;

/// Process runner backed by `tokio::process`
#[derive(Debug, Default)]
pub struct TokioProcessAdapter;

impl TokioProcessAdapter {
    /// Create new process adapter
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        command
    }

    fn spawn_error(invocation: &Invocation, error: std::io::Error) -> GrabError {
        GrabError::external(&invocation.program, format!("failed to start: {}", error))
    }
}

#[async_trait]
impl ProcessPort for TokioProcessAdapter {
    async fn capture(&self, invocation: &Invocation) -> GrabResult<CapturedOutput> {
        info!("Running: {}", invocation);

        let child = Self::command(invocation)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let output = child.wait_with_output().await.map_err(|e| {
            GrabError::external(&invocation.program, format!("failed to read output: {}", e))
        })?;

        debug!(
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "{} finished",
            invocation.program
        );

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn forward(&self, invocation: &Invocation) -> GrabResult<Option<i32>> {
        info!("Running: {}", invocation);

        let mut child = Self::command(invocation)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let status = child.wait().await.map_err(|e| {
            GrabError::external(&invocation.program, format!("failed to wait: {}", e))
        })?;

        debug!(exit_code = ?status.code(), "{} finished", invocation.program);
        Ok(status.code())
    }
}
