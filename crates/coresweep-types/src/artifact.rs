use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Outcome;

/// One crash/core artifact discovered on a device.
///
/// Immutable once created by the matcher layer. Transfer and purge steps
/// produce per-artifact status entries instead of mutating the record.
/// Device identity is passed contextually by callers, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Storage location the artifact was found at (e.g. `disk0:`, `core:`).
    pub location: String,
    /// Artifact identifier within the location: a filename for directory
    /// listings, `module/pid` for tabular core listings.
    pub name: String,
    /// Creation time, when the device output carried a parseable timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// Layout-specific fields (pid, module, instance, permissions, raw date
    /// tokens) keyed by capture name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ArtifactRecord {
    pub fn new(location: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
            created_at: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Full device path, as used in messages and delete commands.
    pub fn path(&self) -> String {
        format!("{}/{}", self.location, self.name)
    }
}

/// Per-artifact result of one transfer attempt, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    pub artifact: ArtifactRecord,
    pub outcome: Outcome,
}

/// Per-artifact result of one purge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResult {
    pub artifact: ArtifactRecord,
    pub outcome: Outcome,
}

/// One auto-reply rule for an interactive device prompt.
///
/// When the device prompts with text matching `pattern` during a command, the
/// executor answers `response` and keeps going until the device stops
/// prompting (e.g. `Delete.*` answered with an empty line to confirm).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveRule {
    pub pattern: String,
    pub response: String,
}

impl InteractiveRule {
    pub fn new(pattern: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            response: response.into(),
        }
    }

    /// Confirm a prompt by sending an empty line.
    pub fn confirm(pattern: impl Into<String>) -> Self {
        Self::new(pattern, "")
    }
}
