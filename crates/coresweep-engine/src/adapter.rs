use std::time::Duration;

use coresweep_types::{
    ArtifactRecord, DeleteError, ExecutionError, InteractiveRule, TransferError,
};

/// Runs named commands on a device.
///
/// External collaborator seam: the transport (SSH session, console server,
/// simulator) lives behind this trait. Calls are blocking from the engine's
/// point of view; the caller-supplied timeout bounds each command, and
/// cancellation is the adapter's responsibility. Implementations must be
/// shareable across concurrent device runs.
pub trait CommandExecutor: Send + Sync {
    /// Run `command`, auto-answering interactive prompts per `reply_rules`,
    /// and return the raw textual output.
    fn execute(
        &self,
        command: &str,
        timeout: Duration,
        reply_rules: &[InteractiveRule],
    ) -> Result<String, ExecutionError>;
}

/// Fully validated transfer parameters, borrowed from a
/// [`TransferConfig`](crate::lifecycle::TransferConfig).
///
/// Existence of this value means the fail-fast parameter check passed.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'a> {
    pub protocol: &'a str,
    pub server: &'a str,
    pub port: Option<u16>,
    pub destination: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub timeout: Duration,
}

/// Moves and deletes crash artifacts on a device.
///
/// External collaborator seam for the file-transfer side (TFTP/SCP plumbing).
/// Failure kinds are reported explicitly through [`TransferError`] /
/// [`DeleteError`]; the engine never inspects message text to classify them.
pub trait ArtifactTransfer: Send + Sync {
    /// Copy one artifact off-device to the destination in `request`.
    fn transfer(
        &self,
        artifact: &ArtifactRecord,
        request: &TransferRequest<'_>,
    ) -> Result<(), TransferError>;

    /// Delete one artifact from the device, auto-confirming prompts per
    /// `reply_rules` until the device stops prompting.
    fn delete(
        &self,
        artifact: &ArtifactRecord,
        reply_rules: &[InteractiveRule],
        timeout: Duration,
    ) -> Result<(), DeleteError>;
}
