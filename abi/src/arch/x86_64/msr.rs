//! Model-Specific Register (MSR) addresses used to read the microcode
//! revision.

/// Model-Specific Register address.
///
/// MSRs are accessed via RDMSR/WRMSR instructions using a 32-bit address.
/// This newtype prevents accidentally using an MSR address where a port
/// number or other value is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Msr(pub u32);

impl Msr {
    /// Intel `IA32_BIOS_SIGN_ID` / AMD `PATCH_LEVEL`.
    ///
    /// Intel reports the loaded microcode revision in the high dword after
    /// the register is cleared and CPUID leaf 1 is executed.  AMD reports
    /// the patch level in the low dword and needs no priming.
    pub const UCODE_REV: Self = Self(0x8B);

    /// Returns the raw MSR address for use with RDMSR/WRMSR.
    #[inline]
    pub const fn address(self) -> u32 {
        self.0
    }
}
