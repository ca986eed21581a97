//! Microcode revision readout.
//!
//! The `Msr` address type is defined in `cpumatch_abi::arch`.  Access
//! goes through the `x86_64` crate's RDMSR/WRMSR wrappers.

use cpumatch_abi::arch::x86_64::vendor::X86_VENDOR_INTEL;

/// Which half of `IA32_UCODE_REV` carries the revision for `vendor`.
#[inline]
pub const fn microcode_revision_from_msr(vendor: u8, raw: u64) -> u32 {
    if vendor == X86_VENDOR_INTEL {
        (raw >> 32) as u32
    } else {
        raw as u32
    }
}

/// Read the microcode revision loaded on the current processor.
///
/// Intel only latches the revision into the MSR after it has been cleared
/// and CPUID leaf 1 has executed, so that sequence is replayed first.
///
/// # Safety
///
/// Must run at CPL 0 on a processor that implements `IA32_UCODE_REV`.
/// Under a hypervisor the MSR may not be virtualized and the access can
/// fault.
#[cfg(target_arch = "x86_64")]
pub unsafe fn read_microcode_revision(vendor: u8) -> u32 {
    use cpumatch_abi::arch::Msr;
    use cpumatch_abi::arch::x86_64::cpuid::CPUID_LEAF_FEATURES;
    use x86_64::registers::model_specific::Msr as RawMsr;

    let mut msr = RawMsr::new(Msr::UCODE_REV.address());
    if vendor == X86_VENDOR_INTEL {
        // SAFETY: the caller guarantees ring 0 and an implemented MSR.
        unsafe { msr.write(0) };
        #[allow(unused_unsafe)]
        let _ = unsafe { core::arch::x86_64::__cpuid(CPUID_LEAF_FEATURES) };
    }
    // SAFETY: as above.
    let raw = unsafe { msr.read() };
    microcode_revision_from_msr(vendor, raw)
}
