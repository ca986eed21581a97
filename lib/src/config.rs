//! cpumatch command line options.
//!
//! Recognized tokens:
//! - `cpumatch.verbosity=quiet|summary|verbose`
//! - `cpumatch.ignore_microcode=<bool>`
//! - `cpumatch.log=error|warn|info|debug|trace`
//!
//! Unknown tokens and malformed values are ignored, leaving the default.

use spin::Once;

use crate::klog::{KlogLevel, klog_set_level};
use crate::{klog_info, klog_warn};

const DEFAULT_VERBOSITY: Verbosity = Verbosity::Summary;
const DEFAULT_IGNORE_MICROCODE: bool = false;
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;

/// How much the running-CPU entry points report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    /// Nothing.
    Quiet,
    /// Lookup misses, failed microcode checks and queries without a
    /// published CPU.
    Summary,
    /// Everything `Summary` logs, plus hits and passed checks.
    Verbose,
}

impl Verbosity {
    pub fn from_str(value: &str) -> Self {
        if value.eq_ignore_ascii_case("quiet") {
            Verbosity::Quiet
        } else if value.eq_ignore_ascii_case("verbose") {
            Verbosity::Verbose
        } else {
            Verbosity::Summary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Summary => "summary",
            Verbosity::Verbose => "verbose",
        }
    }
}

impl core::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub verbosity: Verbosity,
    /// Report every microcode check as passed.
    pub ignore_microcode: bool,
    pub log_level: KlogLevel,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            verbosity: DEFAULT_VERBOSITY,
            ignore_microcode: DEFAULT_IGNORE_MICROCODE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("enabled")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("disabled")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

pub fn config_from_cmdline(cmdline: Option<&str>) -> MatchConfig {
    let mut cfg = MatchConfig::default();
    if let Some(cmdline) = cmdline {
        for token in cmdline.split_whitespace() {
            if let Some(value) = token.strip_prefix("cpumatch.verbosity=") {
                cfg.verbosity = Verbosity::from_str(value);
            } else if let Some(value) = token.strip_prefix("cpumatch.ignore_microcode=") {
                if let Some(ignore) = parse_bool(value) {
                    cfg.ignore_microcode = ignore;
                }
            } else if let Some(value) = token.strip_prefix("cpumatch.log=") {
                if let Some(level) = KlogLevel::parse(value) {
                    cfg.log_level = level;
                }
            }
        }
    }
    cfg
}

static CONFIG: Once<MatchConfig> = Once::new();

/// Install the active configuration and apply its log level.
///
/// The first call wins; later calls are logged and ignored.
pub fn config_publish(cfg: MatchConfig) -> &'static MatchConfig {
    let mut fresh = false;
    let active = CONFIG.call_once(|| {
        fresh = true;
        cfg
    });
    if fresh {
        klog_set_level(active.log_level);
        klog_info!(
            "cpumatch: verbosity={} ignore_microcode={} log={:?}",
            active.verbosity,
            active.ignore_microcode,
            active.log_level
        );
    } else {
        klog_warn!("cpumatch: configuration already published, ignoring update");
    }
    active
}

/// Active configuration, or the defaults before [`config_publish`].
pub fn config() -> MatchConfig {
    CONFIG.get().copied().unwrap_or_default()
}
