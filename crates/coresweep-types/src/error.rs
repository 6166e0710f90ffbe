use std::fmt;

/// A diagnostic command could not produce usable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The command did not complete within the caller-supplied timeout.
    Timeout { command: String },

    /// The transport layer failed to run the command at all.
    Transport { command: String, detail: String },

    /// The command ran but returned nothing where output was required.
    NoOutput { command: String },
}

impl ExecutionError {
    /// The command this error relates to.
    pub fn command(&self) -> &str {
        match self {
            ExecutionError::Timeout { command }
            | ExecutionError::Transport { command, .. }
            | ExecutionError::NoOutput { command } => command,
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Timeout { command } => {
                write!(f, "command '{}' timed out", command)
            }
            ExecutionError::Transport { command, detail } => {
                write!(f, "command '{}' failed: {}", command, detail)
            }
            ExecutionError::NoOutput { command } => {
                write!(f, "No output from {}", command)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// An artifact could not be moved off-device.
///
/// The adapter reports failure kind explicitly; callers never infer the kind
/// from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The transfer protocol itself reported a failed operation.
    OperationFailed { detail: String },

    /// Any other adapter-level failure (connection, auth, timeout).
    Adapter { detail: String },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::OperationFailed { detail } => {
                write!(f, "transfer operation failed: {}", detail)
            }
            TransferError::Adapter { detail } => write!(f, "transfer adapter error: {}", detail),
        }
    }
}

impl std::error::Error for TransferError {}

/// An artifact could not be purged from the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    /// The adapter failed while issuing or confirming the deletion.
    Adapter { detail: String },
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteError::Adapter { detail } => write!(f, "delete failed: {}", detail),
        }
    }
}

impl std::error::Error for DeleteError {}

/// Required transfer parameters are missing; the stage fails fast before any
/// per-artifact attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingParameter { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingParameter { name } => {
                write!(f, "missing required parameter: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_display_names_command() {
        let err = ExecutionError::NoOutput {
            command: "dir disk0:".to_string(),
        };
        assert_eq!(err.to_string(), "No output from dir disk0:");
        assert_eq!(err.command(), "dir disk0:");
    }

    #[test]
    fn test_transfer_error_kinds_are_distinguishable() {
        let failed = TransferError::OperationFailed {
            detail: "tftp put rejected".to_string(),
        };
        let other = TransferError::Adapter {
            detail: "connection reset".to_string(),
        };
        assert!(matches!(failed, TransferError::OperationFailed { .. }));
        assert!(matches!(other, TransferError::Adapter { .. }));
    }
}
