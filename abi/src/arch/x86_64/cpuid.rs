//! CPUID leaves and register fields consumed by the identity provider.

// =============================================================================
// CPUID Leaf Numbers
// =============================================================================

/// Highest basic leaf (EAX) and vendor string (EBX, EDX, ECX).
pub const CPUID_LEAF_VENDOR: u32 = 0x00;

/// Processor signature (EAX) and basic feature flags (ECX, EDX).
pub const CPUID_LEAF_FEATURES: u32 = 0x01;

/// Structured extended feature flags (subleaf 0).
pub const CPUID_LEAF_STRUCTURED_EXT: u32 = 0x07;

/// Hybrid information: native core type in EAX[31:24].
pub const CPUID_LEAF_HYBRID: u32 = 0x1A;

/// Highest extended leaf (EAX).
pub const CPUID_LEAF_EXT_MAX: u32 = 0x8000_0000;

/// Extended function information.
pub const CPUID_LEAF_EXT_INFO: u32 = 0x8000_0001;

// =============================================================================
// Leaf 1 EAX - Processor Signature
// =============================================================================
//
//  31    28 27        20 19    16 15 14 13 12 11     8 7      4 3      0
// +--------+------------+--------+-----+-----+--------+--------+--------+
// |  rsvd  |  ext family | ext mdl| rsvd| type| family |  model |stepping|
// +--------+------------+--------+-----+-----+--------+--------+--------+

pub const CPUID_SIG_STEPPING_SHIFT: u32 = 0;
pub const CPUID_SIG_MODEL_SHIFT: u32 = 4;
pub const CPUID_SIG_FAMILY_SHIFT: u32 = 8;
pub const CPUID_SIG_EXT_MODEL_SHIFT: u32 = 16;
pub const CPUID_SIG_EXT_FAMILY_SHIFT: u32 = 20;

/// Base family value that enables the extended family field.
pub const CPUID_SIG_FAMILY_EXTENDED: u32 = 0xf;

/// Lowest family whose model number includes the extended model field.
pub const CPUID_SIG_EXT_MODEL_MIN_FAMILY: u32 = 0x6;

// =============================================================================
// Leaf 0x1A EAX - Hybrid Core Type
// =============================================================================

pub const CPUID_HYBRID_CORE_TYPE_SHIFT: u32 = 24;
