//! IOS XR-style dialect: core dumps land as `.core.gz` files on one of
//! several storage locations, listed via `dir` in two incompatible formats.

use std::sync::Arc;
use std::time::Duration;

use coresweep_matchers::{ArtifactScanner, MarkerScanner, xr_dir_layouts};
use coresweep_types::InteractiveRule;

use crate::check::CheckSpec;
use crate::dialect::Dialect;
use crate::lifecycle::PurgeOptions;

/// Storage locations probed for core dumps, in order.
const CORE_LOCATIONS: &[&str] = &["disk0:", "disk0:core", "harddisk:"];

pub(super) fn dialect(timeout: Duration) -> Dialect {
    let core_checks = CORE_LOCATIONS
        .iter()
        .map(|location| {
            CheckSpec::new(
                format!("core-check {}", location),
                format!("dir {}", location),
                *location,
                timeout,
                Arc::new(ArtifactScanner::new("core dump", xr_dir_layouts())),
            )
            // Not every chassis has every filesystem; a failing or rejected
            // `dir` means the location is absent, not that the check failed.
            .tolerated()
            .with_skip_marker("Invalid input detected")
        })
        .collect();

    Dialect {
        id: "iosxr",
        core_checks,
        alignment_check: Some(CheckSpec::new(
            "alignment-check",
            "show asic-errors all",
            "asic",
            timeout,
            Arc::new(MarkerScanner::hex("alignment error")),
        )),
        traceback_check: Some(CheckSpec::new(
            "traceback-check",
            "show logging",
            "logging",
            timeout,
            Arc::new(MarkerScanner::new(
                "traceback",
                vec!["traceback".to_string()],
            )),
        )),
        purge: PurgeOptions {
            reply_rules: vec![InteractiveRule::confirm("Delete.*")],
            timeout,
        },
        clear_logging: Some("clear logging"),
    }
}
