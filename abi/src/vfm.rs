//! Packed vendor/family/model identity (VFM).
//!
//! A VFM folds the three identifiers that most CPU match tables care about
//! into one comparable `u32`:
//!
//! ```text
//!  31        24 23        16 15         8 7          0
//! +------------+------------+------------+------------+
//! |  reserved  |   vendor   |   family   |   model    |
//! +------------+------------+------------+------------+
//! ```
//!
//! The layout mirrors the `x86_vfm` union member of the per-CPU info block,
//! so a packed value can be compared directly against a CPU's VFM.  The
//! reserved byte is always zero when built with [`vfm_make`] and is ignored
//! by the decoders.
//!
//! All helpers are `const fn` so that match tables can be built as statics.

use core::fmt;

pub const VFM_MODEL_BIT: u32 = 0;
pub const VFM_FAMILY_BIT: u32 = 8;
pub const VFM_VENDOR_BIT: u32 = 16;
pub const VFM_RSVD_BIT: u32 = 24;

/// Bits 0-7.
pub const VFM_MODEL_MASK: u32 = 0xff << VFM_MODEL_BIT;
/// Bits 8-15.
pub const VFM_FAMILY_MASK: u32 = 0xff << VFM_FAMILY_BIT;
/// Bits 16-23.
pub const VFM_VENDOR_MASK: u32 = 0xff << VFM_VENDOR_BIT;

/// Pack a vendor, family and model into a VFM.
#[inline]
pub const fn vfm_make(vendor: u8, family: u8, model: u8) -> u32 {
    ((model as u32) << VFM_MODEL_BIT)
        | ((family as u32) << VFM_FAMILY_BIT)
        | ((vendor as u32) << VFM_VENDOR_BIT)
}

#[inline]
pub const fn vfm_model(vfm: u32) -> u8 {
    ((vfm & VFM_MODEL_MASK) >> VFM_MODEL_BIT) as u8
}

#[inline]
pub const fn vfm_family(vfm: u32) -> u8 {
    ((vfm & VFM_FAMILY_MASK) >> VFM_FAMILY_BIT) as u8
}

#[inline]
pub const fn vfm_vendor(vfm: u32) -> u8 {
    ((vfm & VFM_VENDOR_MASK) >> VFM_VENDOR_BIT) as u8
}

/// Typed wrapper around a packed VFM.
///
/// Equality compares the raw value, reserved byte included.  Values built
/// through [`Vfm::new`] always carry a zero reserved byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Vfm(u32);

impl Vfm {
    #[inline]
    pub const fn new(vendor: u8, family: u8, model: u8) -> Self {
        Self(vfm_make(vendor, family, model))
    }

    /// Wrap a raw packed value as-is.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn vendor(self) -> u8 {
        vfm_vendor(self.0)
    }

    #[inline]
    pub const fn family(self) -> u8 {
        vfm_family(self.0)
    }

    #[inline]
    pub const fn model(self) -> u8 {
        vfm_model(self.0)
    }
}

impl From<u32> for Vfm {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Vfm> for u32 {
    fn from(vfm: Vfm) -> Self {
        vfm.0
    }
}

impl fmt::Debug for Vfm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vfm {{ vendor: {}, family: {:#x}, model: {:#x} }}",
            self.vendor(),
            self.family(),
            self.model()
        )
    }
}

impl fmt::Display for Vfm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}",
            self.vendor(),
            self.family(),
            self.model()
        )
    }
}
