//! Packed VFM constants for Intel and Centaur models.
//!
//! Naming follows `INTEL_<microarchitecture>[_<segment>]`: no suffix is the
//! mainstream client part, `_L` mobile/low power, `_X` server, `_D` micro
//! server.  Atom cores carry an `ATOM_` prefix.

use super::vendor::X86_VENDOR_INTEL;
use crate::vfm::vfm_make;

/// VFM for an Intel part.
pub const fn ifm(family: u8, model: u8) -> u32 {
    vfm_make(X86_VENDOR_INTEL, family, model)
}

// Family 5
pub const INTEL_FAM5_QUARK_X1000: u32 = ifm(5, 0x09);

// Family 6: big cores
pub const INTEL_PENTIUM_PRO: u32 = ifm(6, 0x01);
pub const INTEL_CORE_YONAH: u32 = ifm(6, 0x0E);
pub const INTEL_CORE2_MEROM: u32 = ifm(6, 0x0F);
pub const INTEL_NEHALEM: u32 = ifm(6, 0x1E);
pub const INTEL_WESTMERE: u32 = ifm(6, 0x25);
pub const INTEL_SANDYBRIDGE: u32 = ifm(6, 0x2A);
pub const INTEL_SANDYBRIDGE_X: u32 = ifm(6, 0x2D);
pub const INTEL_IVYBRIDGE: u32 = ifm(6, 0x3A);
pub const INTEL_HASWELL: u32 = ifm(6, 0x3C);
pub const INTEL_HASWELL_X: u32 = ifm(6, 0x3F);
pub const INTEL_BROADWELL: u32 = ifm(6, 0x3D);
pub const INTEL_BROADWELL_X: u32 = ifm(6, 0x4F);
pub const INTEL_SKYLAKE_L: u32 = ifm(6, 0x4E);
pub const INTEL_SKYLAKE: u32 = ifm(6, 0x5E);
pub const INTEL_SKYLAKE_X: u32 = ifm(6, 0x55);
pub const INTEL_KABYLAKE_L: u32 = ifm(6, 0x8E);
pub const INTEL_KABYLAKE: u32 = ifm(6, 0x9E);
pub const INTEL_COMETLAKE: u32 = ifm(6, 0xA5);
pub const INTEL_COMETLAKE_L: u32 = ifm(6, 0xA6);
pub const INTEL_ICELAKE_X: u32 = ifm(6, 0x6A);
pub const INTEL_ICELAKE_L: u32 = ifm(6, 0x7E);
pub const INTEL_TIGERLAKE_L: u32 = ifm(6, 0x8C);
pub const INTEL_TIGERLAKE: u32 = ifm(6, 0x8D);
pub const INTEL_SAPPHIRERAPIDS_X: u32 = ifm(6, 0x8F);
pub const INTEL_EMERALDRAPIDS_X: u32 = ifm(6, 0xCF);

// Family 6: hybrid
pub const INTEL_ALDERLAKE: u32 = ifm(6, 0x97);
pub const INTEL_ALDERLAKE_L: u32 = ifm(6, 0x9A);
pub const INTEL_RAPTORLAKE: u32 = ifm(6, 0xB7);
pub const INTEL_RAPTORLAKE_P: u32 = ifm(6, 0xBA);
pub const INTEL_METEORLAKE_L: u32 = ifm(6, 0xAA);

// Family 6: Atom
pub const INTEL_ATOM_GOLDMONT: u32 = ifm(6, 0x5C);
pub const INTEL_ATOM_TREMONT: u32 = ifm(6, 0x86);
pub const INTEL_ATOM_GRACEMONT: u32 = ifm(6, 0xBE);

// Family 6: Xeon Phi
pub const INTEL_XEON_PHI_KNL: u32 = ifm(6, 0x57);

// =============================================================================
// Core types (CPUID 0x1A EAX[31:24])
// =============================================================================

pub const INTEL_CPU_TYPE_ATOM: u8 = 0x20;
pub const INTEL_CPU_TYPE_CORE: u8 = 0x40;

// =============================================================================
// Centaur family 6 models
// =============================================================================

pub const X86_CENTAUR_FAM6_C7_A: u8 = 0xa;
pub const X86_CENTAUR_FAM6_C7_D: u8 = 0xd;
pub const X86_CENTAUR_FAM6_NANO: u8 = 0xf;
