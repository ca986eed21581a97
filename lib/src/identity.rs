//! Concrete processor identity consumed by the match engine.
//!
//! The engine never asks the hardware anything; it only queries a
//! [`CpuIdentity`].  [`CpuInfo`] is the plain-value implementation filled in
//! by the identity provider (see [`crate::cpu`]) or built by hand in tests.

use cpumatch_abi::{FeatureSet, Vfm};

/// Identity of one processor as seen by the match engine.
pub trait CpuIdentity {
    fn vendor(&self) -> u8;
    fn family(&self) -> u8;
    fn model(&self) -> u8;
    fn stepping(&self) -> u8;
    /// Native core type of hybrid parts, 0 when the part reports none.
    fn cpu_type(&self) -> u8;
    /// Membership test for one `X86_FEATURE_*` bit.
    fn has_feature(&self, feature: u16) -> bool;
    /// Currently loaded microcode revision.
    fn microcode(&self) -> u32;
}

/// Resolved identity of a processor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuInfo {
    pub vfm: Vfm,
    pub stepping: u8,
    pub cpu_type: u8,
    pub microcode: u32,
    pub features: FeatureSet,
}

impl CpuInfo {
    pub const fn new(vfm: Vfm) -> Self {
        Self {
            vfm,
            stepping: 0,
            cpu_type: 0,
            microcode: 0,
            features: FeatureSet::EMPTY,
        }
    }

    pub const fn with_stepping(mut self, stepping: u8) -> Self {
        self.stepping = stepping;
        self
    }

    pub const fn with_cpu_type(mut self, cpu_type: u8) -> Self {
        self.cpu_type = cpu_type;
        self
    }

    pub const fn with_microcode(mut self, microcode: u32) -> Self {
        self.microcode = microcode;
        self
    }

    pub const fn with_feature(mut self, feature: u16) -> Self {
        self.features = self.features.with(feature);
        self
    }

    pub const fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }
}

impl CpuIdentity for CpuInfo {
    #[inline]
    fn vendor(&self) -> u8 {
        self.vfm.vendor()
    }

    #[inline]
    fn family(&self) -> u8 {
        self.vfm.family()
    }

    #[inline]
    fn model(&self) -> u8 {
        self.vfm.model()
    }

    #[inline]
    fn stepping(&self) -> u8 {
        self.stepping
    }

    #[inline]
    fn cpu_type(&self) -> u8 {
        self.cpu_type
    }

    #[inline]
    fn has_feature(&self, feature: u16) -> bool {
        self.features.has(feature)
    }

    #[inline]
    fn microcode(&self) -> u32 {
        self.microcode
    }
}

impl<T: CpuIdentity + ?Sized> CpuIdentity for &T {
    fn vendor(&self) -> u8 {
        (**self).vendor()
    }

    fn family(&self) -> u8 {
        (**self).family()
    }

    fn model(&self) -> u8 {
        (**self).model()
    }

    fn stepping(&self) -> u8 {
        (**self).stepping()
    }

    fn cpu_type(&self) -> u8 {
        (**self).cpu_type()
    }

    fn has_feature(&self, feature: u16) -> bool {
        (**self).has_feature(feature)
    }

    fn microcode(&self) -> u32 {
        (**self).microcode()
    }
}
