//! Fixed-size CPU feature bitset.
//!
//! Feature numbers are `word * 32 + bit`, where each 32-bit word holds one
//! CPUID register (see `arch::x86_64::cpufeatures` for the word map).

use core::fmt;

use crate::arch::x86_64::cpufeatures::NCAPINTS;

/// Set of active `X86_FEATURE_*` bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FeatureSet([u32; NCAPINTS]);

impl FeatureSet {
    pub const EMPTY: Self = Self([0; NCAPINTS]);

    /// Number of representable feature bits.
    pub const BITS: usize = NCAPINTS * 32;

    pub const fn from_words(words: [u32; NCAPINTS]) -> Self {
        Self(words)
    }

    #[inline]
    pub const fn words(&self) -> &[u32; NCAPINTS] {
        &self.0
    }

    /// Test one feature.  Numbers past the last word are never present.
    #[inline]
    pub const fn has(&self, feature: u16) -> bool {
        let word = (feature / 32) as usize;
        if word >= NCAPINTS {
            return false;
        }
        self.0[word] & (1 << (feature % 32)) != 0
    }

    /// Copy of `self` with `feature` set.  Out-of-range numbers are ignored.
    pub const fn with(mut self, feature: u16) -> Self {
        let word = (feature / 32) as usize;
        if word < NCAPINTS {
            self.0[word] |= 1 << (feature % 32);
        }
        self
    }

    pub fn set(&mut self, feature: u16) {
        *self = self.with(feature);
    }

    pub fn clear(&mut self, feature: u16) {
        let word = (feature / 32) as usize;
        if word < NCAPINTS {
            self.0[word] &= !(1 << (feature % 32));
        }
    }

    /// Overwrite a whole capability word.  Out-of-range words are ignored.
    pub fn set_word(&mut self, word: usize, value: u32) {
        if let Some(slot) = self.0.get_mut(word) {
            *slot = value;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    /// Iterate over the numbers of all set features, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (0..Self::BITS as u16).filter(move |f| self.has(*f))
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
