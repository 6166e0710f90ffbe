use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use coresweep_engine::{ArtifactTransfer, TransferRequest};
use coresweep_types::{ArtifactRecord, DeleteError, InteractiveRule, TransferError};

/// Artifact transfer fake with per-artifact failure injection.
///
/// Failures are keyed by artifact name. Transfer and delete invocations are
/// recorded separately so tests can assert on attempt counts and ordering
/// (e.g. that purge stopped after the first result).
#[derive(Default)]
pub struct ScriptedTransfer {
    failed_operations: HashSet<String>,
    adapter_errors: HashSet<String>,
    failing_deletes: HashSet<String>,
    transfer_calls: Mutex<Vec<String>>,
    delete_calls: Mutex<Vec<String>>,
}

impl ScriptedTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfers of this artifact fail with an explicit operation failure.
    pub fn with_failed_operation(mut self, artifact_name: impl Into<String>) -> Self {
        self.failed_operations.insert(artifact_name.into());
        self
    }

    /// Transfers of this artifact fail with a generic adapter error.
    pub fn with_adapter_error(mut self, artifact_name: impl Into<String>) -> Self {
        self.adapter_errors.insert(artifact_name.into());
        self
    }

    /// Deletions of this artifact fail.
    pub fn with_failing_delete(mut self, artifact_name: impl Into<String>) -> Self {
        self.failing_deletes.insert(artifact_name.into());
        self
    }

    /// Artifact names transferred so far, in order.
    pub fn transfer_calls(&self) -> Vec<String> {
        self.transfer_calls.lock().unwrap().clone()
    }

    /// Artifact names deleted so far, in order.
    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }
}

impl ArtifactTransfer for ScriptedTransfer {
    fn transfer(
        &self,
        artifact: &ArtifactRecord,
        _request: &TransferRequest<'_>,
    ) -> Result<(), TransferError> {
        self.transfer_calls
            .lock()
            .unwrap()
            .push(artifact.name.clone());

        if self.failed_operations.contains(&artifact.name) {
            return Err(TransferError::OperationFailed {
                detail: format!("tftp put rejected for {}", artifact.name),
            });
        }
        if self.adapter_errors.contains(&artifact.name) {
            return Err(TransferError::Adapter {
                detail: format!("connection reset while sending {}", artifact.name),
            });
        }
        Ok(())
    }

    fn delete(
        &self,
        artifact: &ArtifactRecord,
        _reply_rules: &[InteractiveRule],
        _timeout: Duration,
    ) -> Result<(), DeleteError> {
        self.delete_calls
            .lock()
            .unwrap()
            .push(artifact.name.clone());

        if self.failing_deletes.contains(&artifact.name) {
            return Err(DeleteError::Adapter {
                detail: format!("device refused to delete {}", artifact.name),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(timeout: Duration) -> TransferRequest<'static> {
        TransferRequest {
            protocol: "tftp",
            server: "10.0.0.9",
            port: None,
            destination: "/dumps",
            username: "ops",
            password: "secret",
            timeout,
        }
    }

    #[test]
    fn test_failure_injection_is_per_artifact() {
        let adapter = ScriptedTransfer::new().with_failed_operation("bad.core.gz");
        let good = ArtifactRecord::new("disk0:", "good.core.gz");
        let bad = ArtifactRecord::new("disk0:", "bad.core.gz");
        let request = request(Duration::from_secs(1));

        assert!(adapter.transfer(&good, &request).is_ok());
        assert!(matches!(
            adapter.transfer(&bad, &request),
            Err(TransferError::OperationFailed { .. })
        ));
        assert_eq!(adapter.transfer_calls(), vec!["good.core.gz", "bad.core.gz"]);
    }
}
