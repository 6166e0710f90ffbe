use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use coresweep_types::ArtifactRecord;

/// How a layout derives the artifact identifier from a matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Take the value of one named capture group (directory listings).
    Group(&'static str),
    /// Render a template over named captures, e.g. `{module}/{pid}` for
    /// tabular core listings that have no filename column.
    Template(&'static str),
}

/// Optional timestamp extraction for a layout.
#[derive(Debug, Clone)]
struct TimestampSpec {
    group: &'static str,
    format: &'static str,
}

/// One recognized textual structure for a vendor's command output.
///
/// Vendors emit incompatible listings for the same logical command, so
/// callers hold an ordered list of descriptors and accept the first match
/// per line. Date/time captures stay opaque text in `extra` unless the
/// descriptor carries a parseable timestamp format.
#[derive(Debug, Clone)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    regex: Regex,
    name: NameSource,
    timestamp: Option<TimestampSpec>,
}

impl LayoutDescriptor {
    pub fn new(
        id: &'static str,
        pattern: &str,
        name: NameSource,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            id,
            regex: Regex::new(pattern)?,
            name,
            timestamp: None,
        })
    }

    /// Parse `created_at` from the named capture with the given chrono
    /// format. A capture that fails to parse is left opaque in `extra`.
    pub fn with_timestamp(mut self, group: &'static str, format: &'static str) -> Self {
        self.timestamp = Some(TimestampSpec { group, format });
        self
    }

    /// Match one output line, producing an artifact record on success.
    pub fn match_line(&self, line: &str, location: &str) -> Option<ArtifactRecord> {
        let caps = self.regex.captures(line)?;
        let name = self.artifact_name(&caps)?;

        let mut record = ArtifactRecord::new(location, name);
        for group in self.regex.capture_names().flatten() {
            if matches!(self.name, NameSource::Group(g) if g == group) {
                continue;
            }
            if let Some(value) = caps.name(group) {
                record = record.with_extra(group, value.as_str());
            }
        }

        if let Some(spec) = &self.timestamp {
            if let Some(raw) = caps.name(spec.group) {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(raw.as_str(), spec.format) {
                    record = record.with_created_at(parsed);
                }
            }
        }

        Some(record)
    }

    fn artifact_name(&self, caps: &Captures<'_>) -> Option<String> {
        match self.name {
            NameSource::Group(group) => Some(caps.name(group)?.as_str().to_string()),
            NameSource::Template(template) => {
                let mut rendered = template.to_string();
                for group in self.regex.capture_names().flatten() {
                    let placeholder = format!("{{{}}}", group);
                    if rendered.contains(&placeholder) {
                        rendered = rendered.replace(&placeholder, caps.name(group)?.as_str());
                    }
                }
                Some(rendered)
            }
        }
    }
}

/// Extract artifact records from raw command output.
///
/// Layouts are tried in priority order per line; the first match wins.
/// Unmatched lines (headers, banners, prompts) are silently skipped. Empty
/// input yields an empty sequence, never an error - whether absence of
/// output is a problem is the caller's concern.
pub fn extract_artifacts(
    raw: &str,
    location: &str,
    layouts: &[LayoutDescriptor],
) -> Vec<ArtifactRecord> {
    raw.lines()
        .filter_map(|line| {
            layouts
                .iter()
                .find_map(|layout| layout.match_line(line, location))
        })
        .collect()
}

// --- Built-in layouts ---

// 24 -rwxr--r-- 1 18225345 Oct 23 05:15 ipv6_rib_9498.<...>.core.gz
static XR_DIR_BRIEF: LazyLock<LayoutDescriptor> = LazyLock::new(|| {
    LayoutDescriptor::new(
        "xr_dir_brief",
        r"(?i)(?P<seq>\d+) +(?P<permissions>\S+) +(?P<links>\d+) +(?P<size>\d+) +(?P<month>\S+) +(?P<day>\d+) +(?P<time>\S+) +(?P<name>\S*core\.gz)",
        NameSource::Group("name"),
    )
    .expect("built-in layout compiles")
});

// 12089255    -rwx  23596201    Tue Oct 31 05:16:50 2017  ospf_14495.<...>.core.gz
static XR_DIR_LONG: LazyLock<LayoutDescriptor> = LazyLock::new(|| {
    LayoutDescriptor::new(
        "xr_dir_long",
        r"(?i)(?P<seq>\d+) +(?P<permissions>\S+) +(?P<size>\d+) +(?P<weekday>\S+) +(?P<month>\S+) +(?P<day>\d+) +(?P<time>\S+) +(?P<year>\d+) +(?P<name>\S*core\.gz)",
        NameSource::Group("name"),
    )
    .expect("built-in layout compiles")
});

// Row of `show cores vdc-all`:
// 1      5       1         ospf             14495     2017-10-26 06:00:00
static NX_CORE_TABLE: LazyLock<LayoutDescriptor> = LazyLock::new(|| {
    LayoutDescriptor::new(
        "nx_core_table",
        r"(?i)(?P<vdc>\d+) +(?P<module>\d+) +(?P<instance>\d+) +(?P<process>\S+) +(?P<pid>\d+) +(?P<date>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})",
        NameSource::Template("{module}/{pid}"),
    )
    .expect("built-in layout compiles")
    .with_timestamp("date", "%Y-%m-%d %H:%M:%S")
});

/// The two incompatible `dir` listing formats observed on IOS XR devices,
/// in priority order.
pub fn xr_dir_layouts() -> Vec<LayoutDescriptor> {
    vec![XR_DIR_BRIEF.clone(), XR_DIR_LONG.clone()]
}

/// The tabular `show cores vdc-all` format on NX-OS devices.
pub fn nx_core_layouts() -> Vec<LayoutDescriptor> {
    vec![NX_CORE_TABLE.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRIEF_LINE: &str =
        "24 -rwxr--r-- 1 18225345 Oct 23 05:15 ipv6_rib_9498.by.11.20170624-014425.xr-vm_node0_RP0_CPU0.237a0.core.gz";
    const LONG_LINE: &str =
        "12089255    -rwx  23596201    Tue Oct 31 05:16:50 2017  ospf_14495.by.6.20171026-060000.xr-vm_node0_RP0_CPU0.328f3.core.gz";
    const NX_LINE: &str = "1      5       1         ospf             14495     2017-10-26 06:00:00";

    #[test]
    fn test_brief_layout_matches_sample_line() {
        let record = XR_DIR_BRIEF.match_line(BRIEF_LINE, "disk0:").unwrap();
        assert!(record.name.ends_with("core.gz"));
        assert_eq!(record.location, "disk0:");
        assert_eq!(record.extra.get("size").map(String::as_str), Some("18225345"));
        assert_eq!(record.extra.get("month").map(String::as_str), Some("Oct"));
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_long_layout_matches_year_suffixed_line() {
        let record = XR_DIR_LONG.match_line(LONG_LINE, "harddisk:").unwrap();
        assert!(record.name.starts_with("ospf_14495"));
        assert_eq!(record.extra.get("year").map(String::as_str), Some("2017"));
    }

    #[test]
    fn test_layouts_do_not_cross_match() {
        assert!(XR_DIR_BRIEF.match_line(LONG_LINE, "disk0:").is_none());
        assert!(XR_DIR_LONG.match_line(BRIEF_LINE, "disk0:").is_none());
    }

    #[test]
    fn test_nx_table_renders_module_pid_name_and_timestamp() {
        let record = NX_CORE_TABLE.match_line(NX_LINE, "core:").unwrap();
        assert_eq!(record.name, "5/14495");
        assert_eq!(record.extra.get("process").map(String::as_str), Some("ospf"));
        let created = record.created_at.unwrap();
        assert_eq!(created.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-10-26 06:00:00");
    }

    #[test]
    fn test_extract_from_empty_input_is_empty() {
        assert!(extract_artifacts("", "disk0:", &xr_dir_layouts()).is_empty());
    }

    #[test]
    fn test_unmatched_lines_are_skipped() {
        let raw = "Directory of disk0:\n\n   total 123456\n";
        assert!(extract_artifacts(raw, "disk0:", &xr_dir_layouts()).is_empty());
    }

    #[test]
    fn test_interleaved_layouts_preserve_line_order() {
        let raw = format!(
            "Directory of disk0:\n{}\n{}\n{}\n",
            BRIEF_LINE, LONG_LINE, BRIEF_LINE
        );
        let records = extract_artifacts(&raw, "disk0:", &xr_dir_layouts());
        assert_eq!(records.len(), 3);
        assert!(records[0].name.starts_with("ipv6_rib"));
        assert!(records[1].name.starts_with("ospf"));
        assert!(records[2].name.starts_with("ipv6_rib"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let line = BRIEF_LINE.to_uppercase();
        let record = XR_DIR_BRIEF.match_line(&line, "disk0:").unwrap();
        assert!(record.name.ends_with("CORE.GZ"));
    }

    #[test]
    fn test_unparseable_timestamp_stays_opaque() {
        let layout = LayoutDescriptor::new(
            "odd_table",
            r"(?P<pid>\d+) +(?P<date>\S+)",
            NameSource::Template("{pid}"),
        )
        .unwrap()
        .with_timestamp("date", "%Y-%m-%d %H:%M:%S");

        let record = layout.match_line("123 26-Okt-2017", "core:").unwrap();
        assert!(record.created_at.is_none());
        assert_eq!(record.extra.get("date").map(String::as_str), Some("26-Okt-2017"));
    }
}
