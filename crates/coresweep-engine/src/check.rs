use std::sync::Arc;
use std::time::Duration;

use tracing::{error, warn};

use coresweep_matchers::OutputScanner;
use coresweep_types::{ArtifactRecord, InteractiveRule, Outcome};

use crate::adapter::CommandExecutor;

/// How a check treats execution failure of its command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The command must succeed; failure is an errored verdict.
    Fail,
    /// The probed location may simply not exist on this device; failure
    /// contributes a clean note and the check is skipped.
    Tolerate,
}

/// One named diagnostic operation against a device.
#[derive(Clone)]
pub struct CheckSpec {
    /// Human-readable check name, used in logs.
    pub name: String,
    /// Command to execute verbatim.
    pub command: String,
    /// Location label attached to discovered artifacts.
    pub location: String,
    pub timeout: Duration,
    /// Auto-reply rules for prompts raised by the command.
    pub reply_rules: Vec<InteractiveRule>,
    /// Scanning strategy applied to the command output.
    pub scanner: Arc<dyn OutputScanner>,
    pub on_error: ErrorPolicy,
    /// Output substrings meaning the probed location is absent, treated like
    /// a tolerated failure (e.g. `Invalid input detected`).
    pub skip_markers: Vec<String>,
}

impl CheckSpec {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        location: impl Into<String>,
        timeout: Duration,
        scanner: Arc<dyn OutputScanner>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            location: location.into(),
            timeout,
            reply_rules: Vec::new(),
            scanner,
            on_error: ErrorPolicy::Fail,
            skip_markers: Vec::new(),
        }
    }

    pub fn tolerated(mut self) -> Self {
        self.on_error = ErrorPolicy::Tolerate;
        self
    }

    pub fn with_skip_marker(mut self, marker: impl Into<String>) -> Self {
        self.skip_markers.push(marker.into());
        self
    }

    pub fn with_reply_rule(mut self, rule: InteractiveRule) -> Self {
        self.reply_rules.push(rule);
        self
    }
}

impl std::fmt::Debug for CheckSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckSpec")
            .field("name", &self.name)
            .field("command", &self.command)
            .field("location", &self.location)
            .field("on_error", &self.on_error)
            .finish_non_exhaustive()
    }
}

/// Verdict and discoveries of one diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub outcome: Outcome,
    pub artifacts: Vec<ArtifactRecord>,
}

impl CheckReport {
    fn verdict(outcome: Outcome) -> Self {
        Self {
            outcome,
            artifacts: Vec::new(),
        }
    }
}

/// Run one diagnostic check: execute the command, scan the output.
///
/// State-free and idempotent: identical adapter behavior yields an identical
/// report. Execution failure or empty output is never a silent success; it
/// maps to an errored verdict (or a clean skip note for tolerated checks).
pub fn run_check(executor: &dyn CommandExecutor, spec: &CheckSpec) -> CheckReport {
    let output = match executor.execute(&spec.command, spec.timeout, &spec.reply_rules) {
        Ok(output) => output,
        Err(err) => match spec.on_error {
            ErrorPolicy::Tolerate => {
                warn!(check = %spec.name, %err, "tolerated check failure");
                return CheckReport::verdict(Outcome::ok_with(format!(
                    "location '{}' does not exist on device",
                    spec.location
                )));
            }
            ErrorPolicy::Fail => {
                error!(check = %spec.name, %err, "check execution failed");
                return CheckReport::verdict(Outcome::errored(format!(
                    "No output from {}",
                    spec.command
                )));
            }
        },
    };

    if output.trim().is_empty() {
        error!(check = %spec.name, command = %spec.command, "command produced no output");
        return CheckReport::verdict(Outcome::errored(format!(
            "No output from {}",
            spec.command
        )));
    }

    if let Some(marker) = spec.skip_markers.iter().find(|m| output.contains(m.as_str())) {
        warn!(check = %spec.name, %marker, "location absent on device");
        return CheckReport::verdict(Outcome::ok_with(format!(
            "location '{}' does not exist on device",
            spec.location
        )));
    }

    let report = spec.scanner.scan(&output, &spec.location);
    CheckReport {
        outcome: report.outcome,
        artifacts: report.artifacts,
    }
}
