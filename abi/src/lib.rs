//! cpumatch canonical types.
//!
//! This crate provides the definitions shared by everything that declares
//! or consumes CPU match tables:
//! - the packed vendor/family/model identity ([`vfm`])
//! - the match table row and its wildcards ([`cpu_id`])
//! - the CPU feature bitset ([`feature_set`])
//! - x86 vendor, model, feature and CPUID constants ([`arch`])
//!
//! All table types are `#[repr(C)]` and buildable in `const` context so
//! tables can live in read-only statics.

#![no_std]
#![forbid(unsafe_code)]

pub mod arch;
pub mod cpu_id;
pub mod error;
pub mod feature_set;
pub mod vfm;

pub use cpu_id::{
    X86_CPU_TYPE_ANY, X86_FAMILY_ANY, X86_FEATURE_ANY, X86_MODEL_ANY, X86_STEP_MAX, X86_STEP_MIN,
    X86_STEPPING_ANY, X86_VENDOR_ANY, X86CpuId, X86CpuIdFlags, X86MinMicrocodeId,
    try_x86_steppings, x86_steppings,
};
pub use error::{CpuMatchError, CpuMatchResult};
pub use feature_set::FeatureSet;
pub use vfm::{Vfm, vfm_family, vfm_make, vfm_model, vfm_vendor};
