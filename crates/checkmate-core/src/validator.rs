use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::types::{ValidationOutcome, ValidationReport};

/// Executable invoked when no other validator is configured.
pub const DEFAULT_PROGRAM: &str = "check-jsonschema";

/// Upper bound on a single validator run unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs an external `check-jsonschema`-compatible validator.
///
/// Each call spawns exactly one process as
/// `<program> [args...] --schemafile <schema> <json>` and classifies the
/// result by exit code. Nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl SchemaValidator {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Parse a whitespace-separated command line such as
    /// `uvx check-jsonschema`. Returns `None` when the line is blank.
    #[must_use]
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program).with_args(words))
    }

    /// Arguments placed between the program and `--schemafile`.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Bound the wait on the child. `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// [`SchemaValidator::with_timeout`] in whole seconds, where `0` waits
    /// indefinitely.
    #[must_use]
    pub fn with_timeout_secs(self, secs: u64) -> Self {
        self.with_timeout((secs > 0).then(|| Duration::from_secs(secs)))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validate the JSON document at `json_path` against the YAML schema at
    /// `schema_path`. Never fails; every failure is a [`ValidationOutcome`].
    pub async fn validate(&self, json_path: &str, schema_path: &str) -> ValidationReport {
        let outcome = self.run(json_path, schema_path).await;

        match &outcome {
            ValidationOutcome::Valid | ValidationOutcome::Invalid { .. } => {
                tracing::info!(json_path, schema_path, outcome = outcome.kind(), "validation finished");
            }
            _ => {
                tracing::warn!(json_path, schema_path, outcome = outcome.kind(), "validator did not complete");
            }
        }

        ValidationReport {
            json_path: json_path.to_string(),
            schema_path: schema_path.to_string(),
            outcome,
        }
    }

    async fn run(&self, json_path: &str, schema_path: &str) -> ValidationOutcome {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--schemafile")
            .arg(schema_path)
            .arg(json_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Own process group, so a timeout reaches anything the validator forks.
        #[cfg(unix)]
        command.process_group(0);

        tracing::debug!(program = %self.program, args = ?self.args, schema_path, json_path, "spawning validator");

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return ValidationOutcome::ValidatorUnavailable {
                    program: self.program.clone(),
                };
            }
            Err(e) => {
                return ValidationOutcome::Unexpected {
                    message: e.to_string(),
                };
            }
        };

        let pid = child.id();
        let wait = child.wait_with_output();
        tokio::pin!(wait);

        let waited = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut wait).await {
                Ok(result) => result,
                Err(_) => {
                    // The group goes first so wrapped validators die with the
                    // wrapper; dropping `wait` then kills and reaps the leader.
                    kill_process_group(pid);
                    return ValidationOutcome::TimedOut {
                        program: self.program.clone(),
                        after: limit,
                    };
                }
            },
            None => wait.await,
        };

        match waited {
            Ok(output) if output.status.success() => ValidationOutcome::Valid,
            Ok(output) => ValidationOutcome::Invalid {
                details: diagnostic(
                    &String::from_utf8_lossy(&output.stdout),
                    &String::from_utf8_lossy(&output.stderr),
                ),
            },
            Err(e) => ValidationOutcome::Unexpected {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Some(pid) = pid.and_then(|pid| i32::try_from(pid).ok()) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        tracing::debug!(pid, "failed to kill validator process group: {e}");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

/// Pick the diagnostic text of a failed run: stderr when it has any
/// non-whitespace content, stdout otherwise. Both are trimmed.
#[must_use]
pub fn diagnostic(stdout: &str, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.to_string()
    }
}
