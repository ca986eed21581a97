//! Error type for the fallible edges of CPU matching.
//!
//! Matching itself is total: a miss is `None` or `false`, never an error.
//! Errors only come from table construction with runtime values, identity
//! publication, and CPUID probing.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuMatchError {
    /// Stepping range outside `0..=15` or reversed.
    InvalidSteppingRange { min: u8, max: u8 },
    /// The running CPU identity was already published.
    AlreadyPublished,
    /// No running CPU identity has been published yet.
    NotPublished,
    /// The CPUID leaf is above the highest leaf the processor reports.
    CpuidLeafUnavailable { leaf: u32 },
}

impl fmt::Display for CpuMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSteppingRange { min, max } => {
                write!(f, "invalid stepping range {}..={}", min, max)
            }
            Self::AlreadyPublished => write!(f, "boot CPU identity already published"),
            Self::NotPublished => write!(f, "boot CPU identity not published"),
            Self::CpuidLeafUnavailable { leaf } => {
                write!(f, "CPUID leaf {:#x} not supported by this processor", leaf)
            }
        }
    }
}

pub type CpuMatchResult<T = ()> = Result<T, CpuMatchError>;
