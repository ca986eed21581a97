//! CPU match engine and microcode gate.
//!
//! Tables are ordered lists of [`X86CpuId`] patterns.  Lookup walks a table
//! from the first row and returns the first pattern whose six selectors all
//! accept the CPU, so table order is match priority: specific patterns go
//! before broader ones.  The walk also stops at the first row without
//! `ENTRY_VALID`, which keeps sentinel-terminated tables working when they
//! are handed over as slices.
//!
//! Everything here is pure: no logging, no allocation, no global state.
//! Tables are immutable, so lookups from any number of CPUs need no locking.
//! The running-CPU wrappers that do log live in [`crate::boot_cpu`].
//!
//! # Example
//!
//! ```ignore
//! use cpumatch_lib::cpu_match::match_cpu;
//!
//! static RAPL_DOMAINS: [X86CpuId<&RaplDefaults>; 3] = [
//!     X86CpuId::from_vfm(INTEL_SAPPHIRERAPIDS_X, &RAPL_SPR),
//!     X86CpuId::any(&RAPL_CORE).with_vendor(X86_VENDOR_INTEL),
//!     X86CpuId::end(&RAPL_NONE),
//! ];
//!
//! if let Some(id) = match_cpu(&RAPL_DOMAINS, &cpu) {
//!     rapl_init(id.driver_data);
//! }
//! ```

use cpumatch_abi::{
    X86_CPU_TYPE_ANY, X86_FAMILY_ANY, X86_FEATURE_ANY, X86_MODEL_ANY, X86_STEPPING_ANY,
    X86_VENDOR_ANY, X86CpuId, X86MinMicrocodeId,
};

use crate::identity::CpuIdentity;

// =============================================================================
// Per-dimension acceptance
// =============================================================================

#[inline]
fn vendor_accepts(selector: u16, vendor: u8) -> bool {
    selector == X86_VENDOR_ANY || selector == vendor as u16
}

#[inline]
fn family_accepts(selector: u16, family: u8) -> bool {
    selector == X86_FAMILY_ANY || selector == family as u16
}

#[inline]
fn model_accepts(selector: u16, model: u8) -> bool {
    selector == X86_MODEL_ANY || selector == model as u16
}

/// Steppings the mask cannot express never match a non-wildcard mask.
#[inline]
fn stepping_accepts(mask: u16, stepping: u8) -> bool {
    if mask == X86_STEPPING_ANY {
        return true;
    }
    1u16.checked_shl(stepping as u32).is_some_and(|bit| mask & bit != 0)
}

#[inline]
fn feature_accepts<C: CpuIdentity + ?Sized>(selector: u16, cpu: &C) -> bool {
    selector == X86_FEATURE_ANY || cpu.has_feature(selector)
}

#[inline]
fn cpu_type_accepts(selector: u8, cpu_type: u8) -> bool {
    selector == X86_CPU_TYPE_ANY || selector == cpu_type
}

/// Test one pattern against `cpu`.
///
/// Only the six selectors are consulted; `ENTRY_VALID` is the table walk's
/// business, not this predicate's.
pub fn cpu_id_matches<D, C: CpuIdentity + ?Sized>(id: &X86CpuId<D>, cpu: &C) -> bool {
    vendor_accepts(id.vendor, cpu.vendor())
        && family_accepts(id.family, cpu.family())
        && model_accepts(id.model, cpu.model())
        && stepping_accepts(id.steppings, cpu.stepping())
        && feature_accepts(id.feature, cpu)
        && cpu_type_accepts(id.cpu_type, cpu.cpu_type())
}

// =============================================================================
// Table walk
// =============================================================================

/// Index of the first pattern in `table` that matches `cpu`.
pub fn match_cpu_index<D, C: CpuIdentity + ?Sized>(
    table: &[X86CpuId<D>],
    cpu: &C,
) -> Option<usize> {
    table
        .iter()
        .take_while(|id| id.is_valid())
        .position(|id| cpu_id_matches(id, cpu))
}

/// First pattern in `table` that matches `cpu`, or `None`.
///
/// The walk ends at the end of the slice or at the first row without
/// `ENTRY_VALID`, whichever comes first.  The terminator is never tested.
pub fn match_cpu<'t, D, C: CpuIdentity + ?Sized>(
    table: &'t [X86CpuId<D>],
    cpu: &C,
) -> Option<&'t X86CpuId<D>> {
    table
        .iter()
        .take_while(|id| id.is_valid())
        .find(|id| cpu_id_matches(id, cpu))
}

/// Driver data of the first matching pattern.
pub fn match_cpu_data<'t, D, C: CpuIdentity + ?Sized>(
    table: &'t [X86CpuId<D>],
    cpu: &C,
) -> Option<&'t D> {
    match_cpu(table, cpu).map(|id| &id.driver_data)
}

/// Walk a table that carries no length, only a terminator row.
///
/// Returns `None` for a null `table`.
///
/// # Safety
///
/// `table` must point to an array of initialized entries that ends with a
/// row whose `ENTRY_VALID` flag is clear, and the whole array, terminator
/// included, must stay valid and unmodified for `'t`.  Prefer
/// [`match_cpu`], which is bounded by the slice length.
pub unsafe fn match_cpu_terminated<'t, D, C: CpuIdentity + ?Sized>(
    table: *const X86CpuId<D>,
    cpu: &C,
) -> Option<&'t X86CpuId<D>> {
    if table.is_null() {
        return None;
    }

    let mut cursor = table;
    loop {
        // SAFETY: the caller guarantees every row up to and including the
        // terminator is readable for 't, and we stop at the terminator.
        let id = unsafe { &*cursor };
        if !id.is_valid() {
            return None;
        }
        if cpu_id_matches(id, cpu) {
            return Some(id);
        }
        // SAFETY: `id` was not the terminator, so the next row exists.
        cursor = unsafe { cursor.add(1) };
    }
}

// =============================================================================
// Microcode gate
// =============================================================================

/// Minimum microcode revision the table demands from `cpu`, if any pattern
/// selects it.
pub fn required_microcode_rev<C: CpuIdentity + ?Sized>(
    table: &[X86MinMicrocodeId],
    cpu: &C,
) -> Option<u32> {
    match_cpu(table, cpu).map(|id| id.driver_data)
}

/// Whether `cpu` runs at least the microcode revision its pattern requires.
///
/// Selection uses the normal match rules and ignores the revision.  A CPU
/// no pattern selects has no minimum and passes.
pub fn meets_min_microcode_rev<C: CpuIdentity + ?Sized>(
    table: &[X86MinMicrocodeId],
    cpu: &C,
) -> bool {
    match required_microcode_rev(table, cpu) {
        Some(min_rev) => cpu.microcode() >= min_rev,
        None => true,
    }
}
