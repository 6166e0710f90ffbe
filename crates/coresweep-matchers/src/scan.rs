use coresweep_types::{ArtifactRecord, Outcome};

use crate::layout::{extract_artifacts, LayoutDescriptor};

/// What one scan of command output contributed to a device verdict.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub outcome: Outcome,
    pub artifacts: Vec<ArtifactRecord>,
}

impl ScanReport {
    pub fn clean(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::ok_with(message),
            artifacts: Vec::new(),
        }
    }
}

/// A strategy for turning raw command output into an outcome contribution.
///
/// Scanners are stateless and shared read-only across device runs.
pub trait OutputScanner: Send + Sync {
    fn scan(&self, raw: &str, location: &str) -> ScanReport;
}

/// Structured artifact extraction over an ordered set of layouts.
///
/// Each discovered artifact contributes a critical finding; no discoveries
/// contribute a clean note for the scanned location.
pub struct ArtifactScanner {
    label: String,
    layouts: Vec<LayoutDescriptor>,
}

impl ArtifactScanner {
    pub fn new(label: impl Into<String>, layouts: Vec<LayoutDescriptor>) -> Self {
        Self {
            label: label.into(),
            layouts,
        }
    }
}

impl OutputScanner for ArtifactScanner {
    fn scan(&self, raw: &str, location: &str) -> ScanReport {
        let artifacts = extract_artifacts(raw, location, &self.layouts);
        if artifacts.is_empty() {
            return ScanReport::clean(format!("no {} found at {}", self.label, location));
        }

        let outcome = artifacts
            .iter()
            .map(|artifact| {
                Outcome::critical(format!("{} generated: '{}'", self.label, artifact.name))
            })
            .collect();

        ScanReport { outcome, artifacts }
    }
}

/// Case-insensitive substring scan for binary-fault markers.
///
/// Used for faults that show up as raw markers rather than parseable records
/// (hex values in alignment error dumps, traceback banners in logs). Kept
/// separate from [`ArtifactScanner`]: running a bare `0x` scan through the
/// structured matcher would invite false positives on unrelated hex-looking
/// text, and marker hits never carry artifact records.
pub struct MarkerScanner {
    label: String,
    markers: Vec<String>,
}

impl MarkerScanner {
    pub fn new(label: impl Into<String>, markers: Vec<String>) -> Self {
        Self {
            label: label.into(),
            markers: markers.into_iter().map(|m| m.to_lowercase()).collect(),
        }
    }

    /// Hex-value marker used for alignment error dumps.
    pub fn hex(label: impl Into<String>) -> Self {
        Self::new(label, vec!["0x".to_string()])
    }
}

impl OutputScanner for MarkerScanner {
    fn scan(&self, raw: &str, _location: &str) -> ScanReport {
        let lowered = raw.to_lowercase();
        if self.markers.iter().any(|marker| lowered.contains(marker)) {
            return ScanReport {
                outcome: Outcome::critical(format!(
                    "{} detected: '{}'",
                    self.label,
                    raw.trim()
                )),
                artifacts: Vec::new(),
            };
        }
        ScanReport::clean(format!("no {} found", self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::xr_dir_layouts;
    use coresweep_types::Severity;

    #[test]
    fn test_artifact_scanner_reports_critical_per_artifact() {
        let raw = "24 -rwxr--r-- 1 18225345 Oct 23 05:15 ipv6_rib_9498.core.gz\n\
                   25 -rwxr--r-- 1 22331 Oct 24 06:20 bgp_1234.core.gz\n";
        let scanner = ArtifactScanner::new("core dump", xr_dir_layouts());
        let report = scanner.scan(raw, "disk0:");

        assert_eq!(report.outcome.level, Severity::Critical);
        assert_eq!(report.outcome.messages.len(), 2);
        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(report.artifacts[0].name, "ipv6_rib_9498.core.gz");
    }

    #[test]
    fn test_artifact_scanner_clean_on_no_match() {
        let scanner = ArtifactScanner::new("core dump", xr_dir_layouts());
        let report = scanner.scan("Directory of disk0:\n  no files\n", "disk0:");

        assert!(report.outcome.is_ok());
        assert_eq!(report.outcome.message(), "no core dump found at disk0:");
        assert!(report.artifacts.is_empty());
    }

    #[test]
    fn test_marker_scanner_flags_hex_values() {
        let scanner = MarkerScanner::hex("alignment error");
        let report = scanner.scan("alignment data at 0xDEADBEEF", "cpu0");

        assert_eq!(report.outcome.level, Severity::Critical);
        assert!(report.artifacts.is_empty());
    }

    #[test]
    fn test_marker_scanner_is_case_insensitive() {
        let scanner = MarkerScanner::new("traceback", vec!["Traceback".to_string()]);
        let report = scanner.scan("... TRACEBACK: 1 2 3 ...", "log");
        assert_eq!(report.outcome.level, Severity::Critical);
    }

    #[test]
    fn test_marker_scanner_clean_without_marker() {
        let scanner = MarkerScanner::hex("alignment error");
        let report = scanner.scan("all counters nominal", "cpu0");
        assert!(report.outcome.is_ok());
        assert_eq!(report.outcome.message(), "no alignment error found");
    }
}
