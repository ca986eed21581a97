//! Running-CPU entry points.
//!
//! The kernel resolves the boot processor's identity once (see
//! [`crate::cpu::detect_boot_cpu`] or any other provider) and publishes it
//! here.  Publication goes through `spin::Once`, so every reader that sees
//! the identity also sees it fully initialized, and no lock is taken on the
//! lookup path afterwards.
//!
//! [`x86_match_cpu`] and [`x86_match_min_microcode_rev`] are the engine and
//! gate applied to that published identity.  Unlike the pure engine they
//! log, according to [`crate::config::Verbosity`].

use spin::Once;

use cpumatch_abi::{CpuMatchError, CpuMatchResult, X86CpuId, X86MinMicrocodeId};

use crate::config::{Verbosity, config};
use crate::cpu_match::{match_cpu_index, required_microcode_rev};
use crate::identity::{CpuIdentity, CpuInfo};
use crate::{klog_debug, klog_info, klog_warn};

static BOOT_CPU: Once<CpuInfo> = Once::new();

/// Publish the boot CPU identity.  Only the first call takes effect.
pub fn boot_cpu_publish(info: CpuInfo) -> CpuMatchResult<&'static CpuInfo> {
    let mut fresh = false;
    let published = BOOT_CPU.call_once(|| {
        fresh = true;
        info
    });
    if !fresh {
        klog_warn!("cpumatch: boot CPU already published as {}", published.vfm);
        return Err(CpuMatchError::AlreadyPublished);
    }

    klog_info!(
        "cpumatch: boot CPU {} stepping {} type {:#x} microcode {:#x}",
        published.vfm,
        published.stepping,
        published.cpu_type,
        published.microcode
    );
    Ok(published)
}

pub fn boot_cpu() -> Option<&'static CpuInfo> {
    BOOT_CPU.get()
}

pub fn boot_cpu_required() -> CpuMatchResult<&'static CpuInfo> {
    BOOT_CPU.get().ok_or(CpuMatchError::NotPublished)
}

/// Match `table` against the boot CPU.
///
/// `None` when nothing matches or no identity has been published yet.
pub fn x86_match_cpu<D>(table: &[X86CpuId<D>]) -> Option<&X86CpuId<D>> {
    let verbosity = config().verbosity;
    let Some(cpu) = boot_cpu() else {
        if verbosity != Verbosity::Quiet {
            klog_warn!("cpumatch: lookup before boot CPU publication");
        }
        return None;
    };

    let index = match_cpu_index(table, cpu);
    match index {
        Some(index) if verbosity == Verbosity::Verbose => {
            klog_debug!("cpumatch: {} matched entry {}", cpu.vfm, index)
        }
        Some(_) => {}
        None if verbosity != Verbosity::Quiet => {
            klog_info!("cpumatch: {} matched no entry", cpu.vfm)
        }
        None => {}
    }
    index.and_then(|index| table.get(index))
}

/// Microcode gate against the boot CPU.
///
/// Without a published identity there is nothing to vouch for, so this
/// reports `false`.
pub fn x86_match_min_microcode_rev(table: &[X86MinMicrocodeId]) -> bool {
    let cfg = config();
    let Some(cpu) = boot_cpu() else {
        if cfg.verbosity != Verbosity::Quiet {
            klog_warn!("cpumatch: microcode check before boot CPU publication");
        }
        return false;
    };

    let Some(min_rev) = required_microcode_rev(table, cpu) else {
        if cfg.verbosity == Verbosity::Verbose {
            klog_debug!("cpumatch: {} has no microcode requirement", cpu.vfm);
        }
        return true;
    };

    let current = cpu.microcode();
    if current >= min_rev {
        if cfg.verbosity == Verbosity::Verbose {
            klog_debug!(
                "cpumatch: {} microcode {:#x} meets {:#x}",
                cpu.vfm,
                current,
                min_rev
            );
        }
        return true;
    }

    if cfg.ignore_microcode {
        klog_warn!(
            "cpumatch: {} microcode {:#x} below {:#x}, ignored by cmdline",
            cpu.vfm,
            current,
            min_rev
        );
        return true;
    }

    if cfg.verbosity != Verbosity::Quiet {
        klog_warn!(
            "cpumatch: {} microcode {:#x} below required {:#x}",
            cpu.vfm,
            current,
            min_rev
        );
    }
    false
}
