//! Per-platform command dialects.
//!
//! Each supported device family implements the same contract - which commands
//! to run, which output layouts to expect, how deletions are confirmed - as a
//! [`Dialect`] value rather than ad hoc per-function branching.

mod iosxr;
mod nxos;

use std::time::Duration;

use crate::check::CheckSpec;
use crate::lifecycle::PurgeOptions;

/// Diagnostic catalog for one device family.
#[derive(Debug, Clone)]
pub struct Dialect {
    /// Platform identifier (e.g. "iosxr", "nxos").
    pub id: &'static str,
    /// Core-dump detection checks, one per candidate storage location.
    pub core_checks: Vec<CheckSpec>,
    /// Alignment-error detection, where the platform supports it.
    pub alignment_check: Option<CheckSpec>,
    /// Traceback detection over device logging.
    pub traceback_check: Option<CheckSpec>,
    /// How purge deletions are issued and confirmed.
    pub purge: PurgeOptions,
    /// Command that clears device logging after a traceback check.
    pub clear_logging: Option<&'static str>,
}

impl Dialect {
    /// Look up a dialect by platform name.
    pub fn from_name(name: &str, timeout: Duration) -> Option<Self> {
        match name {
            "iosxr" => Some(Self::iosxr(timeout)),
            "nxos" => Some(Self::nxos(timeout)),
            _ => None,
        }
    }

    pub fn iosxr(timeout: Duration) -> Self {
        iosxr::dialect(timeout)
    }

    pub fn nxos(timeout: Duration) -> Self {
        nxos::dialect(timeout)
    }

    /// Every detection check in run order: cores, then alignment, then
    /// tracebacks.
    pub fn detect_checks(&self) -> Vec<CheckSpec> {
        let mut checks = self.core_checks.clone();
        checks.extend(self.alignment_check.clone());
        checks.extend(self.traceback_check.clone());
        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(300);

    #[test]
    fn test_from_name_resolves_known_platforms() {
        assert_eq!(Dialect::from_name("iosxr", TIMEOUT).unwrap().id, "iosxr");
        assert_eq!(Dialect::from_name("nxos", TIMEOUT).unwrap().id, "nxos");
        assert!(Dialect::from_name("junos", TIMEOUT).is_none());
    }

    #[test]
    fn test_iosxr_probes_every_candidate_location() {
        let dialect = Dialect::iosxr(TIMEOUT);
        let commands: Vec<&str> = dialect
            .core_checks
            .iter()
            .map(|c| c.command.as_str())
            .collect();
        assert_eq!(
            commands,
            vec!["dir disk0:", "dir disk0:core", "dir harddisk:"]
        );
        assert!(dialect.alignment_check.is_some());
    }

    #[test]
    fn test_nxos_uses_tabular_core_listing() {
        let dialect = Dialect::nxos(TIMEOUT);
        assert_eq!(dialect.core_checks.len(), 1);
        assert_eq!(dialect.core_checks[0].command, "show cores vdc-all");
        assert!(dialect.alignment_check.is_none());
    }

    #[test]
    fn test_detect_checks_order_cores_first() {
        let dialect = Dialect::iosxr(TIMEOUT);
        let checks = dialect.detect_checks();
        assert_eq!(checks.len(), dialect.core_checks.len() + 2);
        assert!(checks.last().unwrap().name.contains("traceback"));
    }

    #[test]
    fn test_iosxr_purge_auto_confirms_delete_prompts() {
        let dialect = Dialect::iosxr(TIMEOUT);
        assert_eq!(dialect.purge.reply_rules.len(), 1);
        assert_eq!(dialect.purge.reply_rules[0].pattern, "Delete.*");
        assert!(dialect.purge.reply_rules[0].response.is_empty());
    }
}
