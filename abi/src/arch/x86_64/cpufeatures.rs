//! x86 feature bit numbers.
//!
//! A feature number is `word * 32 + bit`.  Each word holds one CPUID output
//! register verbatim, so the bit position inside the word equals the bit
//! position in the register.  Only the words filled by the identity
//! provider are listed; the remaining words are reserved for synthetic and
//! vendor-specific capabilities.

/// Number of 32-bit capability words.
pub const NCAPINTS: usize = 22;

// =============================================================================
// Word map
// =============================================================================

/// CPUID 0x00000001 EDX.
pub const CPUID_1_EDX_WORD: usize = 0;
/// CPUID 0x80000001 EDX.
pub const CPUID_8000_0001_EDX_WORD: usize = 1;
/// CPUID 0x00000001 ECX.
pub const CPUID_1_ECX_WORD: usize = 4;
/// CPUID 0x80000001 ECX.
pub const CPUID_8000_0001_ECX_WORD: usize = 6;
/// CPUID 0x00000007:0 EBX.
pub const CPUID_7_0_EBX_WORD: usize = 9;
/// CPUID 0x00000007:0 EDX.
pub const CPUID_7_0_EDX_WORD: usize = 18;

const fn feat(word: usize, bit: u16) -> u16 {
    (word as u16) * 32 + bit
}

// =============================================================================
// Word 0: CPUID 1 EDX
// =============================================================================

/// Onboard FPU.  Shares its number with `X86_FEATURE_ANY`.
pub const X86_FEATURE_FPU: u16 = feat(CPUID_1_EDX_WORD, 0);
pub const X86_FEATURE_VME: u16 = feat(CPUID_1_EDX_WORD, 1);
pub const X86_FEATURE_DE: u16 = feat(CPUID_1_EDX_WORD, 2);
pub const X86_FEATURE_PSE: u16 = feat(CPUID_1_EDX_WORD, 3);
pub const X86_FEATURE_TSC: u16 = feat(CPUID_1_EDX_WORD, 4);
pub const X86_FEATURE_MSR: u16 = feat(CPUID_1_EDX_WORD, 5);
pub const X86_FEATURE_PAE: u16 = feat(CPUID_1_EDX_WORD, 6);
pub const X86_FEATURE_MCE: u16 = feat(CPUID_1_EDX_WORD, 7);
pub const X86_FEATURE_CX8: u16 = feat(CPUID_1_EDX_WORD, 8);
pub const X86_FEATURE_APIC: u16 = feat(CPUID_1_EDX_WORD, 9);
pub const X86_FEATURE_SEP: u16 = feat(CPUID_1_EDX_WORD, 11);
pub const X86_FEATURE_MTRR: u16 = feat(CPUID_1_EDX_WORD, 12);
pub const X86_FEATURE_PGE: u16 = feat(CPUID_1_EDX_WORD, 13);
pub const X86_FEATURE_MCA: u16 = feat(CPUID_1_EDX_WORD, 14);
pub const X86_FEATURE_CMOV: u16 = feat(CPUID_1_EDX_WORD, 15);
pub const X86_FEATURE_PAT: u16 = feat(CPUID_1_EDX_WORD, 16);
pub const X86_FEATURE_PSE36: u16 = feat(CPUID_1_EDX_WORD, 17);
pub const X86_FEATURE_CLFLUSH: u16 = feat(CPUID_1_EDX_WORD, 19);
pub const X86_FEATURE_MMX: u16 = feat(CPUID_1_EDX_WORD, 23);
pub const X86_FEATURE_FXSR: u16 = feat(CPUID_1_EDX_WORD, 24);
pub const X86_FEATURE_XMM: u16 = feat(CPUID_1_EDX_WORD, 25);
pub const X86_FEATURE_XMM2: u16 = feat(CPUID_1_EDX_WORD, 26);
pub const X86_FEATURE_HT: u16 = feat(CPUID_1_EDX_WORD, 28);

// =============================================================================
// Word 1: CPUID 0x80000001 EDX
// =============================================================================

pub const X86_FEATURE_SYSCALL: u16 = feat(CPUID_8000_0001_EDX_WORD, 11);
pub const X86_FEATURE_NX: u16 = feat(CPUID_8000_0001_EDX_WORD, 20);
pub const X86_FEATURE_GBPAGES: u16 = feat(CPUID_8000_0001_EDX_WORD, 26);
pub const X86_FEATURE_RDTSCP: u16 = feat(CPUID_8000_0001_EDX_WORD, 27);
/// Long mode (x86-64).
pub const X86_FEATURE_LM: u16 = feat(CPUID_8000_0001_EDX_WORD, 29);

// =============================================================================
// Word 4: CPUID 1 ECX
// =============================================================================

pub const X86_FEATURE_XMM3: u16 = feat(CPUID_1_ECX_WORD, 0);
pub const X86_FEATURE_PCLMULQDQ: u16 = feat(CPUID_1_ECX_WORD, 1);
pub const X86_FEATURE_MWAIT: u16 = feat(CPUID_1_ECX_WORD, 3);
pub const X86_FEATURE_VMX: u16 = feat(CPUID_1_ECX_WORD, 5);
pub const X86_FEATURE_SSSE3: u16 = feat(CPUID_1_ECX_WORD, 9);
pub const X86_FEATURE_FMA: u16 = feat(CPUID_1_ECX_WORD, 12);
pub const X86_FEATURE_CX16: u16 = feat(CPUID_1_ECX_WORD, 13);
pub const X86_FEATURE_PCID: u16 = feat(CPUID_1_ECX_WORD, 17);
pub const X86_FEATURE_XMM4_1: u16 = feat(CPUID_1_ECX_WORD, 19);
pub const X86_FEATURE_XMM4_2: u16 = feat(CPUID_1_ECX_WORD, 20);
pub const X86_FEATURE_X2APIC: u16 = feat(CPUID_1_ECX_WORD, 21);
pub const X86_FEATURE_MOVBE: u16 = feat(CPUID_1_ECX_WORD, 22);
pub const X86_FEATURE_POPCNT: u16 = feat(CPUID_1_ECX_WORD, 23);
pub const X86_FEATURE_AES: u16 = feat(CPUID_1_ECX_WORD, 25);
pub const X86_FEATURE_XSAVE: u16 = feat(CPUID_1_ECX_WORD, 26);
pub const X86_FEATURE_OSXSAVE: u16 = feat(CPUID_1_ECX_WORD, 27);
pub const X86_FEATURE_AVX: u16 = feat(CPUID_1_ECX_WORD, 28);
pub const X86_FEATURE_F16C: u16 = feat(CPUID_1_ECX_WORD, 29);
pub const X86_FEATURE_RDRAND: u16 = feat(CPUID_1_ECX_WORD, 30);
/// Running under a hypervisor.
pub const X86_FEATURE_HYPERVISOR: u16 = feat(CPUID_1_ECX_WORD, 31);

// =============================================================================
// Word 6: CPUID 0x80000001 ECX
// =============================================================================

pub const X86_FEATURE_LAHF_LM: u16 = feat(CPUID_8000_0001_ECX_WORD, 0);
pub const X86_FEATURE_SVM: u16 = feat(CPUID_8000_0001_ECX_WORD, 2);
pub const X86_FEATURE_ABM: u16 = feat(CPUID_8000_0001_ECX_WORD, 5);
pub const X86_FEATURE_SSE4A: u16 = feat(CPUID_8000_0001_ECX_WORD, 6);
pub const X86_FEATURE_TOPOEXT: u16 = feat(CPUID_8000_0001_ECX_WORD, 22);

// =============================================================================
// Word 9: CPUID 7:0 EBX
// =============================================================================

pub const X86_FEATURE_FSGSBASE: u16 = feat(CPUID_7_0_EBX_WORD, 0);
pub const X86_FEATURE_BMI1: u16 = feat(CPUID_7_0_EBX_WORD, 3);
pub const X86_FEATURE_HLE: u16 = feat(CPUID_7_0_EBX_WORD, 4);
pub const X86_FEATURE_AVX2: u16 = feat(CPUID_7_0_EBX_WORD, 5);
pub const X86_FEATURE_SMEP: u16 = feat(CPUID_7_0_EBX_WORD, 7);
pub const X86_FEATURE_BMI2: u16 = feat(CPUID_7_0_EBX_WORD, 8);
pub const X86_FEATURE_ERMS: u16 = feat(CPUID_7_0_EBX_WORD, 9);
pub const X86_FEATURE_INVPCID: u16 = feat(CPUID_7_0_EBX_WORD, 10);
pub const X86_FEATURE_RTM: u16 = feat(CPUID_7_0_EBX_WORD, 11);
pub const X86_FEATURE_AVX512F: u16 = feat(CPUID_7_0_EBX_WORD, 16);
pub const X86_FEATURE_RDSEED: u16 = feat(CPUID_7_0_EBX_WORD, 18);
pub const X86_FEATURE_ADX: u16 = feat(CPUID_7_0_EBX_WORD, 19);
pub const X86_FEATURE_SMAP: u16 = feat(CPUID_7_0_EBX_WORD, 20);
pub const X86_FEATURE_CLFLUSHOPT: u16 = feat(CPUID_7_0_EBX_WORD, 23);
pub const X86_FEATURE_SHA_NI: u16 = feat(CPUID_7_0_EBX_WORD, 29);

// =============================================================================
// Word 18: CPUID 7:0 EDX
// =============================================================================

pub const X86_FEATURE_MD_CLEAR: u16 = feat(CPUID_7_0_EDX_WORD, 10);
/// Hybrid part with more than one core type.
pub const X86_FEATURE_HYBRID_CPU: u16 = feat(CPUID_7_0_EDX_WORD, 15);
pub const X86_FEATURE_SPEC_CTRL: u16 = feat(CPUID_7_0_EDX_WORD, 26);
pub const X86_FEATURE_ARCH_CAPABILITIES: u16 = feat(CPUID_7_0_EDX_WORD, 29);
