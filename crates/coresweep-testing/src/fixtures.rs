//! Canned device command outputs for tests.

/// IOS XR `dir disk0:` listing with one core dump in the brief format.
pub const XR_DIR_WITH_CORE: &str = "\
Directory of disk0:

24 -rwxr--r-- 1 18225345 Oct 23 05:15 ipv6_rib_9498.by.11.20170624-014425.xr-vm_node0_RP0_CPU0.237a0.core.gz

1012645888 bytes total (938823680 bytes free)
";

/// IOS XR `dir harddisk:` listing with one core dump in the long,
/// year-suffixed format.
pub const XR_DIR_WITH_CORE_LONG: &str = "\
Directory of harddisk:

12089255    -rwx  23596201    Tue Oct 31 05:16:50 2017  ospf_14495.by.6.20171026-060000.xr-vm_node0_RP0_CPU0.328f3.core.gz

2017378304 bytes total (1734932480 bytes free)
";

/// IOS XR `dir` listing with no core dumps.
pub const XR_DIR_CLEAN: &str = "\
Directory of disk0:

11 drwx  4096  Fri Jun 23 13:12:38 2017  config
12 -rw-  1438  Fri Jun 23 13:12:38 2017  startup.cfg

1012645888 bytes total (938823680 bytes free)
";

/// NX-OS `show cores vdc-all` table with one core.
pub const NX_CORES_TABLE: &str = "\
VDC  Module  Instance  Process-name     PID     Date(Year-Month-Day Time)
---  ------  --------  ---------------  ------  -------------------------
1    5       1         ospf             14495   2017-10-26 06:00:00
";

/// NX-OS `show cores vdc-all` with nothing to report.
pub const NX_CORES_EMPTY: &str = "\
VDC  Module  Instance  Process-name     PID     Date(Year-Month-Day Time)
---  ------  --------  ---------------  ------  -------------------------
";

/// Alignment error dump carrying hex values.
pub const ALIGNMENT_HEX_DUMP: &str = "\
Alignment data for node0_RP0_CPU0:
  count  access address  PC
  3      0x7ff8a1b4      0xbfc02844
";

/// Alignment check output with nothing to report.
pub const ALIGNMENT_CLEAN: &str = "No alignment data is recorded.\n";

/// Device logging with a traceback banner.
pub const LOG_WITH_TRACEBACK: &str = "\
RP/0/RP0/CPU0:Oct 23 05:15:01.123 : ipv6_rib[9498]: %ROUTING-FIB-4-TRACEBACK : Traceback: 1 2 3 4
";

/// Device logging with nothing of note.
pub const LOG_CLEAN: &str = "\
RP/0/RP0/CPU0:Oct 23 05:15:01.123 : SSHD_[65792]: %SECURITY-SSHD-6-INFO_SUCCESS : Successfully authenticated user
";
