// Ports - Interface definitions (contracts)

use async_trait::async_trait;

use crate::domain::model::Invocation;
use crate::error::{GrabError, GrabResult};

/// Result of a captured process run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Process exited with code zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a non-zero exit into an external tool error
    pub fn ensure_success(&self, tool: &str) -> GrabResult<()> {
        if self.success() {
            return Ok(());
        }

        let status = describe_exit(self.exit_code);
        let message = match self.stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(last) => format!("{}: {}", status, last.trim()),
            None => status,
        };
        Err(GrabError::external(tool, message))
    }
}

/// Human-readable exit status
pub fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Port for running external tools
#[async_trait]
pub trait ProcessPort: Send + Sync {
    /// Run to completion, collecting stdout and stderr.
    ///
    /// Returns `Err` only when the process cannot be spawned or read; a
    /// non-zero exit is reported through [`CapturedOutput::exit_code`].
    async fn capture(&self, invocation: &Invocation) -> GrabResult<CapturedOutput>;

    /// Run to completion with stdout and stderr attached to the console.
    ///
    /// Returns the exit code, `None` when killed by a signal.
    async fn forward(&self, invocation: &Invocation) -> GrabResult<Option<i32>>;
}

/// Port for the interactive operator console
#[async_trait]
pub trait ConsolePort: Send + Sync {
    /// Ask for one line showing `default`; `None` when the trimmed answer is blank
    async fn ask_optional(&self, label: &str, default: &str) -> GrabResult<Option<String>>;

    /// Ask for one line; blank input yields `default` verbatim
    async fn ask(&self, label: &str, default: &str) -> GrabResult<String> {
        Ok(self
            .ask_optional(label, default)
            .await?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Print informational text followed by a newline
    async fn show(&self, text: &str) -> GrabResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success_reports_last_stderr_line() {
        let output = CapturedOutput {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "WARNING: something\nERROR: Unsupported URL\n\n".to_string(),
        };

        match output.ensure_success("yt-dlp") {
            Err(GrabError::ExternalTool { tool, message }) => {
                assert_eq!(tool, "yt-dlp");
                assert_eq!(message, "exited with code 1: ERROR: Unsupported URL");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ensure_success_accepts_zero_exit() {
        let output = CapturedOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        assert!(output.ensure_success("yt-dlp").is_ok());
    }

    #[test]
    fn test_signal_exit_is_failure() {
        let output = CapturedOutput::default();
        assert!(!output.success());
        assert_eq!(describe_exit(None), "terminated by signal");
    }
}
