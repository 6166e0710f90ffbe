//! NX-OS-style dialect: cores are listed in one tabular `show cores vdc-all`
//! view and addressed by module/pid rather than filename.

use std::sync::Arc;
use std::time::Duration;

use coresweep_matchers::{ArtifactScanner, MarkerScanner, nx_core_layouts};

use crate::check::CheckSpec;
use crate::dialect::Dialect;
use crate::lifecycle::PurgeOptions;

pub(super) fn dialect(timeout: Duration) -> Dialect {
    Dialect {
        id: "nxos",
        core_checks: vec![CheckSpec::new(
            "core-check vdc-all",
            "show cores vdc-all",
            "core:",
            timeout,
            Arc::new(ArtifactScanner::new("core dump", nx_core_layouts())),
        )],
        alignment_check: None,
        traceback_check: Some(CheckSpec::new(
            "traceback-check",
            "show logging logfile",
            "logging",
            timeout,
            Arc::new(MarkerScanner::new(
                "traceback",
                vec!["traceback".to_string()],
            )),
        )),
        // `clear cores` needs no confirmation prompt on this platform.
        purge: PurgeOptions {
            reply_rules: Vec::new(),
            timeout,
        },
        clear_logging: Some("clear logging logfile"),
    }
}
