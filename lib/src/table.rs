//! Table construction macros.
//!
//! `x86_cpu_id!` spells a pattern with named selectors; every selector not
//! named stays ANY.  Each `key = value` pair becomes a call to the matching
//! `X86CpuId::with_<key>` builder, so the accepted keys are `vendor`,
//! `family`, `model`, `vfm`, `stepping_mask`, `feature` and `cpu_type`.
//!
//! ```ignore
//! static SPLIT_LOCK: [X86CpuId<u8>; 3] = x86_cpu_table![end = 0;
//!     x86_cpu_id!(vfm = INTEL_ICELAKE_X, stepping_mask = x86_steppings(4, 7); 1),
//!     x86_cpu_id!(vendor = X86_VENDOR_INTEL, feature = X86_FEATURE_AVX512F; 2),
//! ];
//! ```

/// Build one valid [`X86CpuId`](crate::abi::X86CpuId) from named selectors.
#[macro_export]
macro_rules! x86_cpu_id {
    ($($key:ident = $value:expr),+ $(,)? ; $data:expr) => {
        $crate::paste::paste! {
            $crate::abi::X86CpuId::any($data)$(.[<with_ $key>]($value))+
        }
    };
    (; $data:expr) => {
        $crate::abi::X86CpuId::any($data)
    };
}

/// Array of entries followed by a terminator carrying `end` as its data.
#[macro_export]
macro_rules! x86_cpu_table {
    (end = $end:expr; $($entry:expr),* $(,)?) => {
        [$($entry,)* $crate::abi::X86CpuId::end($end)]
    };
}
