//! Reference identity provider: CPUID decoding and the microcode MSR.

pub mod cpuid;
pub mod msr;

pub use cpuid::*;
pub use msr::*;

#[cfg(target_arch = "x86_64")]
use cpumatch_abi::CpuMatchResult;

#[cfg(target_arch = "x86_64")]
use crate::identity::CpuInfo;

/// Resolve the identity of the processor this runs on, microcode included.
///
/// # Safety
///
/// Same requirements as [`read_microcode_revision`]: ring 0 only.
#[cfg(target_arch = "x86_64")]
pub unsafe fn detect_boot_cpu() -> CpuMatchResult<CpuInfo> {
    let info = CpuInfo::from_cpuid(&NativeCpuid)?;
    // SAFETY: forwarded from the caller.
    let microcode = unsafe { read_microcode_revision(info.vfm.vendor()) };
    crate::klog_debug!(
        "cpumatch: detected {} ({}) microcode {:#x}",
        info.vfm,
        cpumatch_abi::arch::vendor_name(info.vfm.vendor()),
        microcode
    );
    Ok(info.with_microcode(microcode))
}
