use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, warn};

use coresweep_types::{
    ArtifactRecord, ConfigError, InteractiveRule, Outcome, TransferError, TransferResult,
};

use crate::adapter::{ArtifactTransfer, CommandExecutor, TransferRequest};
use crate::check::{run_check, CheckSpec};

/// Destination parameters for moving artifacts off-device.
///
/// Every field except `port` is required; the transfer stage fails fast if
/// any is missing rather than honoring a partial configuration.
#[derive(Debug, Clone, Default)]
pub struct TransferConfig {
    pub protocol: Option<String>,
    pub server: Option<String>,
    pub port: Option<u16>,
    pub destination: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl TransferConfig {
    /// Validate that all required parameters are present.
    pub fn validated(&self) -> Result<TransferRequest<'_>, ConfigError> {
        fn require<'a>(
            field: &'a Option<String>,
            name: &'static str,
        ) -> Result<&'a str, ConfigError> {
            field
                .as_deref()
                .ok_or(ConfigError::MissingParameter { name })
        }

        Ok(TransferRequest {
            protocol: require(&self.protocol, "protocol")?,
            server: require(&self.server, "server")?,
            port: self.port,
            destination: require(&self.destination, "destination")?,
            username: require(&self.username, "username")?,
            password: require(&self.password, "password")?,
            timeout: self.timeout,
        })
    }
}

/// How the purge stage confirms deletions.
#[derive(Debug, Clone)]
pub struct PurgeOptions {
    /// Auto-confirm rules for `Delete...?`-style prompts.
    pub reply_rules: Vec<InteractiveRule>,
    pub timeout: Duration,
}

/// Which optional lifecycle stages to run after detection.
#[derive(Debug, Clone, Default)]
pub struct LifecycleOptions {
    pub transfer: Option<TransferConfig>,
    pub purge: Option<PurgeOptions>,
}

impl LifecycleOptions {
    /// Detect only; no transfer, no purge.
    pub fn detect_only() -> Self {
        Self::default()
    }
}

/// Everything one device run produced.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleReport {
    pub device: String,
    /// Aggregate verdict across all stages. Monotonic: a critical detect
    /// verdict is never downgraded by later stage success.
    pub outcome: Outcome,
    /// Artifacts discovered, in discovery order, duplicates preserved.
    pub artifacts: Vec<ArtifactRecord>,
    /// One entry per transfer attempted, in discovery order.
    pub transfers: Vec<TransferResult>,
    /// Purge stage verdict, when the stage ran.
    pub purge: Option<Outcome>,
}

/// Drives the detect -> transfer -> purge lifecycle for one device.
///
/// Bundles the two adapter seams. Holds no mutable state, so one runner may
/// serve concurrent runs against distinct devices; each run is itself
/// strictly sequential because every stage gates the next.
pub struct DeviceRunner<'a> {
    executor: &'a dyn CommandExecutor,
    artifacts: &'a dyn ArtifactTransfer,
}

impl<'a> DeviceRunner<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, artifacts: &'a dyn ArtifactTransfer) -> Self {
        Self {
            executor,
            artifacts,
        }
    }

    /// Run the full lifecycle for one device.
    ///
    /// Transfer and purge only run when enabled in `options` and when
    /// detection actually found artifacts.
    pub fn run_lifecycle(
        &self,
        device: &str,
        checks: &[CheckSpec],
        options: &LifecycleOptions,
    ) -> LifecycleReport {
        let (mut outcome, artifacts) = self.detect(device, checks);

        let mut transfers = Vec::new();
        if let Some(config) = &options.transfer {
            if !artifacts.is_empty() {
                let (stage, results) = self.transfer(device, &artifacts, config);
                outcome = outcome.combine(stage);
                transfers = results;
            }
        }

        let mut purge = None;
        if let Some(purge_options) = &options.purge {
            if !artifacts.is_empty() {
                let stage = self.purge_artifacts(device, &artifacts, purge_options);
                outcome = outcome.combine(stage.clone());
                purge = Some(stage);
            }
        }

        LifecycleReport {
            device: device.to_string(),
            outcome,
            artifacts,
            transfers,
            purge,
        }
    }

    /// Run every check, folding per-check verdicts into one outcome and
    /// concatenating discoveries in order. A failing check never aborts its
    /// siblings; deduplication is not a detect responsibility.
    pub fn detect(&self, device: &str, checks: &[CheckSpec]) -> (Outcome, Vec<ArtifactRecord>) {
        let mut artifacts = Vec::new();
        let outcome = checks
            .iter()
            .map(|spec| {
                info!(%device, check = %spec.name, "running diagnostic check");
                let report = run_check(self.executor, spec);
                artifacts.extend(report.artifacts);
                report.outcome
            })
            .collect();
        (outcome, artifacts)
    }

    /// Transfer each artifact independently (continue-on-error).
    ///
    /// Missing configuration fails the whole stage before any per-artifact
    /// attempt. One failed transfer never aborts the remaining ones; every
    /// attempt yields a [`TransferResult`] in discovery order.
    pub fn transfer(
        &self,
        device: &str,
        artifacts: &[ArtifactRecord],
        config: &TransferConfig,
    ) -> (Outcome, Vec<TransferResult>) {
        let request = match config.validated() {
            Ok(request) => request,
            Err(err) => {
                error!(%device, %err, "transfer stage aborted");
                return (
                    Outcome::errored("unable to transfer artifacts - parameters not provided"),
                    Vec::new(),
                );
            }
        };

        let mut stage = Outcome::ok();
        let mut results = Vec::new();
        for artifact in artifacts {
            let attempt = format!(
                "transfer of {} to {} via server {}",
                artifact.path(),
                request.destination,
                request.server
            );

            let outcome = match self.artifacts.transfer(artifact, &request) {
                Ok(()) => {
                    info!(%device, artifact = %artifact.path(), "transfer passed");
                    Outcome::ok_with(format!("{} passed", attempt))
                }
                Err(TransferError::OperationFailed { detail }) => {
                    error!(%device, artifact = %artifact.path(), %detail, "transfer operation failed");
                    Outcome::errored(format!("{} failed", attempt))
                }
                Err(TransferError::Adapter { detail }) => {
                    warn!(%device, artifact = %artifact.path(), %detail, "transfer adapter error");
                    Outcome::errored(format!("{} failed", attempt))
                }
            };

            stage = stage.combine(outcome.clone());
            results.push(TransferResult {
                artifact: artifact.clone(),
                outcome,
            });
        }

        (stage, results)
    }

    /// Purge selected artifacts through the adapter's delete capability.
    ///
    /// Contract: the first deletion result is authoritative. On the first
    /// success the stage returns `Ok` immediately; on the first failure it
    /// returns `Errored` immediately. Remaining artifacts are not attempted
    /// either way, so a purge batch only guarantees that processing started.
    /// Callers may pass a merged list spanning artifact categories from
    /// several detect passes.
    pub fn purge_artifacts(
        &self,
        device: &str,
        artifacts: &[ArtifactRecord],
        options: &PurgeOptions,
    ) -> Outcome {
        for artifact in artifacts {
            match self
                .artifacts
                .delete(artifact, &options.reply_rules, options.timeout)
            {
                Ok(()) => {
                    info!(%device, artifact = %artifact.path(), "artifact deleted");
                    return Outcome::ok_with(format!(
                        "successfully deleted {}",
                        artifact.path()
                    ));
                }
                Err(err) => {
                    error!(%device, artifact = %artifact.path(), %err, "artifact deletion failed");
                    return Outcome::errored(format!("unable to delete {}", artifact.path()));
                }
            }
        }
        Outcome::ok()
    }

    /// Clear device logging after a traceback check.
    pub fn clear_tracebacks(&self, device: &str, command: &str, timeout: Duration) -> Outcome {
        match self.executor.execute(command, timeout, &[]) {
            Ok(_) => {
                info!(%device, %command, "device logging cleared");
                Outcome::ok_with("successfully cleared device logging")
            }
            Err(err) => {
                error!(%device, %command, %err, "failed to clear device logging");
                Outcome::errored("unable to clear device logging")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coresweep_types::Severity;

    #[test]
    fn test_validated_rejects_any_missing_parameter() {
        let mut config = TransferConfig {
            protocol: Some("tftp".to_string()),
            server: Some("10.0.0.9".to_string()),
            port: None,
            destination: Some("/dumps".to_string()),
            username: Some("ops".to_string()),
            password: Some("secret".to_string()),
            timeout: Duration::from_secs(60),
        };
        assert!(config.validated().is_ok());

        config.password = None;
        assert_eq!(
            config.validated().unwrap_err(),
            ConfigError::MissingParameter { name: "password" }
        );
    }

    #[test]
    fn test_port_is_optional() {
        let config = TransferConfig {
            protocol: Some("tftp".to_string()),
            server: Some("10.0.0.9".to_string()),
            port: None,
            destination: Some("/dumps".to_string()),
            username: Some("ops".to_string()),
            password: Some("secret".to_string()),
            timeout: Duration::from_secs(60),
        };
        let request = config.validated().unwrap();
        assert!(request.port.is_none());
        assert_eq!(request.server, "10.0.0.9");
    }

    #[test]
    fn test_detect_only_options_disable_both_stages() {
        let options = LifecycleOptions::detect_only();
        assert!(options.transfer.is_none());
        assert!(options.purge.is_none());
    }

    #[test]
    fn test_report_serializes_outcome_levels() {
        let report = LifecycleReport {
            device: "xr-1".to_string(),
            outcome: Outcome::new(Severity::Critical, "core dump generated"),
            artifacts: Vec::new(),
            transfers: Vec::new(),
            purge: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["level"], "critical");
        assert!(json["purge"].is_null());
    }
}
