//! CPU match table entries.
//!
//! A match table is an ordered list of [`X86CpuId`] patterns.  Each pattern
//! selects CPUs along six independent dimensions (vendor, family, model,
//! stepping set, feature bit, core type) and carries driver-private data.
//! Every selector has an ANY value that accepts all CPUs in that dimension,
//! so a pattern only spells out what it actually cares about.
//!
//! The layout is `#[repr(C)]` and mirrors the classic device-table row, which
//! keeps tables built here interchangeable with sentinel-terminated tables:
//! a row without [`X86CpuIdFlags::ENTRY_VALID`] ends the table.
//!
//! # Example
//!
//! ```ignore
//! use cpumatch_abi::cpu_id::X86CpuId;
//! use cpumatch_abi::arch::x86_64::intel_family::INTEL_SKYLAKE_X;
//! use cpumatch_abi::arch::x86_64::cpufeatures::X86_FEATURE_AVX512F;
//!
//! static QUIRKS: [X86CpuId<u32>; 3] = [
//!     X86CpuId::from_vfm(INTEL_SKYLAKE_X, 1).with_steppings(0, 4),
//!     X86CpuId::any(2).with_feature(X86_FEATURE_AVX512F),
//!     X86CpuId::end(0),
//! ];
//! ```

use bitflags::bitflags;

use crate::error::{CpuMatchError, CpuMatchResult};
use crate::vfm::{vfm_family, vfm_model, vfm_vendor};

// =============================================================================
// Wildcards
// =============================================================================

/// Accept every vendor.  Outside the 8-bit vendor range on purpose.
pub const X86_VENDOR_ANY: u16 = 0xffff;

/// Accept every family.  Family 0 does not exist on x86.
pub const X86_FAMILY_ANY: u16 = 0;

/// Accept every model.
pub const X86_MODEL_ANY: u16 = 0;

/// Accept every stepping.  An empty stepping mask would never match, so the
/// zero mask is reused as the wildcard.
pub const X86_STEPPING_ANY: u16 = 0;

/// Accept every feature set.  Same bit as FPU, which therefore cannot be
/// selected by a pattern.
pub const X86_FEATURE_ANY: u16 = 0;

/// Accept every core type.
pub const X86_CPU_TYPE_ANY: u8 = 0;

/// Lowest stepping number a mask can express.
pub const X86_STEP_MIN: u8 = 0;

/// Highest stepping number a mask can express (CPUID stepping is 4 bits).
pub const X86_STEP_MAX: u8 = 15;

// =============================================================================
// Stepping masks
// =============================================================================

/// Build the stepping mask accepting `min..=max`.
///
/// # Panics
///
/// Panics if `min > max` or `max > X86_STEP_MAX`.  In a `static` table this
/// is a compile error; for runtime values use [`try_x86_steppings`], which
/// reports the bad range instead.
pub const fn x86_steppings(min: u8, max: u8) -> u16 {
    assert!(min <= max && max <= X86_STEP_MAX, "invalid stepping range");
    (u16::MAX >> (X86_STEP_MAX - max)) & (u16::MAX << min)
}

/// Checked variant of [`x86_steppings`] for ranges computed at runtime.
pub fn try_x86_steppings(min: u8, max: u8) -> CpuMatchResult<u16> {
    if min > max || max > X86_STEP_MAX {
        return Err(CpuMatchError::InvalidSteppingRange { min, max });
    }
    Ok(x86_steppings(min, max))
}

// =============================================================================
// Entry
// =============================================================================

bitflags! {
    /// Per-entry flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct X86CpuIdFlags: u16 {
        /// The entry is a real pattern.  Cleared only in the terminator.
        const ENTRY_VALID = 1 << 0;
    }
}

/// One row of a CPU match table.
///
/// `D` is the driver-private payload.  It defaults to `usize` for tables
/// that keep the machine-word convention; typed payloads (references to
/// driver descriptors, enums, revision numbers) are preferred.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct X86CpuId<D = usize> {
    /// `X86_VENDOR_*` or [`X86_VENDOR_ANY`].
    pub vendor: u16,
    /// Family number or [`X86_FAMILY_ANY`].
    pub family: u16,
    /// Model number or [`X86_MODEL_ANY`].
    pub model: u16,
    /// Bitmask of accepted steppings or [`X86_STEPPING_ANY`].
    pub steppings: u16,
    /// `X86_FEATURE_*` bit or [`X86_FEATURE_ANY`].
    pub feature: u16,
    pub flags: X86CpuIdFlags,
    /// Core type or [`X86_CPU_TYPE_ANY`].
    pub cpu_type: u8,
    pub driver_data: D,
}

/// Table keyed like any other match table whose payload is the minimum
/// acceptable microcode revision for the selected CPUs.
pub type X86MinMicrocodeId = X86CpuId<u32>;

impl<D: Copy> X86CpuId<D> {
    /// Full constructor: every selector spelled out, entry marked valid.
    pub const fn new(
        vendor: u16,
        family: u16,
        model: u16,
        steppings: u16,
        feature: u16,
        cpu_type: u8,
        driver_data: D,
    ) -> Self {
        Self {
            vendor,
            family,
            model,
            steppings,
            feature,
            flags: X86CpuIdFlags::ENTRY_VALID,
            cpu_type,
            driver_data,
        }
    }

    /// Valid entry with every selector set to ANY.  Matches every CPU, so
    /// it only belongs at the end of a table as a deliberate catch-all.
    pub const fn any(driver_data: D) -> Self {
        Self::new(
            X86_VENDOR_ANY,
            X86_FAMILY_ANY,
            X86_MODEL_ANY,
            X86_STEPPING_ANY,
            X86_FEATURE_ANY,
            X86_CPU_TYPE_ANY,
            driver_data,
        )
    }

    /// Entry selecting the vendor, family and model packed in `vfm`.
    pub const fn from_vfm(vfm: u32, driver_data: D) -> Self {
        Self::any(driver_data).with_vfm(vfm)
    }

    /// Table terminator: all selectors zero, `ENTRY_VALID` clear.
    pub const fn end(driver_data: D) -> Self {
        Self {
            vendor: 0,
            family: 0,
            model: 0,
            steppings: 0,
            feature: 0,
            flags: X86CpuIdFlags::empty(),
            cpu_type: 0,
            driver_data,
        }
    }

    /// Select one `X86_VENDOR_*`.  Leave unset for [`X86_VENDOR_ANY`].
    pub const fn with_vendor(mut self, vendor: u8) -> Self {
        self.vendor = vendor as u16;
        self
    }

    /// Select one family.  Family 0 is [`X86_FAMILY_ANY`], so
    /// `with_family(0)` leaves the family unconstrained.
    pub const fn with_family(mut self, family: u8) -> Self {
        self.family = family as u16;
        self
    }

    /// Select one model.  Model 0 is [`X86_MODEL_ANY`], so `with_model(0)`
    /// matches every model of the family; model-0 parts cannot be singled
    /// out.
    pub const fn with_model(mut self, model: u8) -> Self {
        self.model = model as u16;
        self
    }

    /// Set vendor, family and model from a packed VFM.
    pub const fn with_vfm(mut self, vfm: u32) -> Self {
        self.vendor = vfm_vendor(vfm) as u16;
        self.family = vfm_family(vfm) as u16;
        self.model = vfm_model(vfm) as u16;
        self
    }

    /// Accept steppings `min..=max`.
    ///
    /// # Panics
    ///
    /// Same as [`x86_steppings`].  Ranges computed at runtime should go
    /// through [`try_x86_steppings`] and [`Self::with_stepping_mask`].
    pub const fn with_steppings(mut self, min: u8, max: u8) -> Self {
        self.steppings = x86_steppings(min, max);
        self
    }

    pub const fn with_stepping_mask(mut self, mask: u16) -> Self {
        self.steppings = mask;
        self
    }

    pub const fn with_feature(mut self, feature: u16) -> Self {
        self.feature = feature;
        self
    }

    pub const fn with_cpu_type(mut self, cpu_type: u8) -> Self {
        self.cpu_type = cpu_type;
        self
    }

    pub const fn with_data(mut self, driver_data: D) -> Self {
        self.driver_data = driver_data;
        self
    }
}

impl<D> X86CpuId<D> {
    /// False for the terminator row.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.flags.contains(X86CpuIdFlags::ENTRY_VALID)
    }
}

impl<D: Copy + Default> Default for X86CpuId<D> {
    /// The table terminator.
    fn default() -> Self {
        Self::end(D::default())
    }
}
