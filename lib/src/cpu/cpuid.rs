//! CPU identity from the CPUID instruction.
//!
//! Every register read goes through a [`CpuidSource`], so the decoding can
//! be exercised with canned register values on any host.  [`NativeCpuid`]
//! is the source that executes the instruction.

use cpumatch_abi::arch::x86_64::cpufeatures::{
    CPUID_1_ECX_WORD, CPUID_1_EDX_WORD, CPUID_7_0_EBX_WORD, CPUID_7_0_EDX_WORD,
    CPUID_8000_0001_ECX_WORD, CPUID_8000_0001_EDX_WORD, X86_FEATURE_HYBRID_CPU,
};
use cpumatch_abi::arch::x86_64::cpuid::{
    CPUID_HYBRID_CORE_TYPE_SHIFT, CPUID_LEAF_EXT_INFO, CPUID_LEAF_EXT_MAX, CPUID_LEAF_FEATURES,
    CPUID_LEAF_HYBRID, CPUID_LEAF_STRUCTURED_EXT, CPUID_LEAF_VENDOR, CPUID_SIG_EXT_FAMILY_SHIFT,
    CPUID_SIG_EXT_MODEL_MIN_FAMILY, CPUID_SIG_EXT_MODEL_SHIFT, CPUID_SIG_FAMILY_EXTENDED,
    CPUID_SIG_FAMILY_SHIFT, CPUID_SIG_MODEL_SHIFT, CPUID_SIG_STEPPING_SHIFT,
};
use cpumatch_abi::arch::x86_64::vendor::{vendor_from_signature, vendor_signature};
use cpumatch_abi::{CpuMatchError, CpuMatchResult, FeatureSet, Vfm};

use crate::identity::CpuInfo;

// =============================================================================
// Register access
// =============================================================================

/// Register values returned by one CPUID invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuidRegs {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

/// Anything that can answer CPUID queries.
pub trait CpuidSource {
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs;
}

impl<T: CpuidSource + ?Sized> CpuidSource for &T {
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs {
        (**self).cpuid(leaf, subleaf)
    }
}

/// Executes CPUID on the current processor.
#[cfg(target_arch = "x86_64")]
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeCpuid;

#[cfg(target_arch = "x86_64")]
impl CpuidSource for NativeCpuid {
    #[inline(always)]
    #[allow(unused_unsafe)]
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs {
        let res = unsafe { core::arch::x86_64::__cpuid_count(leaf, subleaf) };
        CpuidRegs {
            eax: res.eax,
            ebx: res.ebx,
            ecx: res.ecx,
            edx: res.edx,
        }
    }
}

// =============================================================================
// Signature decoding (leaf 1 EAX)
// =============================================================================

/// Display family: base family, plus the extended family when the base
/// family is 0xf.
pub const fn x86_family(sig: u32) -> u8 {
    let mut family = (sig >> CPUID_SIG_FAMILY_SHIFT) & 0xf;
    if family == CPUID_SIG_FAMILY_EXTENDED {
        family += (sig >> CPUID_SIG_EXT_FAMILY_SHIFT) & 0xff;
    }
    family as u8
}

/// Display model: base model, with the extended model as the high nibble
/// from family 6 on.
pub const fn x86_model(sig: u32) -> u8 {
    let family = x86_family(sig) as u32;
    let mut model = (sig >> CPUID_SIG_MODEL_SHIFT) & 0xf;
    if family >= CPUID_SIG_EXT_MODEL_MIN_FAMILY {
        model |= ((sig >> CPUID_SIG_EXT_MODEL_SHIFT) & 0xf) << 4;
    }
    model as u8
}

pub const fn x86_stepping(sig: u32) -> u8 {
    ((sig >> CPUID_SIG_STEPPING_SHIFT) & 0xf) as u8
}

/// Native core type from leaf 0x1A EAX.
pub const fn hybrid_cpu_type(eax: u32) -> u8 {
    (eax >> CPUID_HYBRID_CORE_TYPE_SHIFT) as u8
}

/// Vendor from the leaf 0 registers.
pub fn vendor_from_cpuid(ebx: u32, ecx: u32, edx: u32) -> u8 {
    vendor_from_signature(&vendor_signature(ebx, ecx, edx))
}

// =============================================================================
// Identity
// =============================================================================

impl CpuInfo {
    /// Resolve vendor, family, model, stepping, feature words and core type.
    ///
    /// The microcode revision is not visible through CPUID and is left at 0;
    /// see [`super::msr::read_microcode_revision`].
    pub fn from_cpuid<S: CpuidSource + ?Sized>(source: &S) -> CpuMatchResult<Self> {
        let leaf0 = source.cpuid(CPUID_LEAF_VENDOR, 0);
        let max_basic = leaf0.eax;
        if max_basic < CPUID_LEAF_FEATURES {
            return Err(CpuMatchError::CpuidLeafUnavailable {
                leaf: CPUID_LEAF_FEATURES,
            });
        }
        let vendor = vendor_from_cpuid(leaf0.ebx, leaf0.ecx, leaf0.edx);

        let leaf1 = source.cpuid(CPUID_LEAF_FEATURES, 0);
        let sig = leaf1.eax;
        let mut features = FeatureSet::EMPTY;
        features.set_word(CPUID_1_EDX_WORD, leaf1.edx);
        features.set_word(CPUID_1_ECX_WORD, leaf1.ecx);

        if max_basic >= CPUID_LEAF_STRUCTURED_EXT {
            let leaf7 = source.cpuid(CPUID_LEAF_STRUCTURED_EXT, 0);
            features.set_word(CPUID_7_0_EBX_WORD, leaf7.ebx);
            features.set_word(CPUID_7_0_EDX_WORD, leaf7.edx);
        }

        let max_ext = source.cpuid(CPUID_LEAF_EXT_MAX, 0).eax;
        if max_ext >= CPUID_LEAF_EXT_INFO {
            let ext = source.cpuid(CPUID_LEAF_EXT_INFO, 0);
            features.set_word(CPUID_8000_0001_EDX_WORD, ext.edx);
            features.set_word(CPUID_8000_0001_ECX_WORD, ext.ecx);
        }

        let mut cpu_type = 0;
        if features.has(X86_FEATURE_HYBRID_CPU) && max_basic >= CPUID_LEAF_HYBRID {
            cpu_type = hybrid_cpu_type(source.cpuid(CPUID_LEAF_HYBRID, 0).eax);
        }

        Ok(CpuInfo::new(Vfm::new(vendor, x86_family(sig), x86_model(sig)))
            .with_stepping(x86_stepping(sig))
            .with_cpu_type(cpu_type)
            .with_features(features))
    }
}
