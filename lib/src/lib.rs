#![no_std]

#[cfg(test)]
extern crate std;

pub mod boot_cpu;
pub mod config;
pub mod cpu;
pub mod cpu_match;
pub mod identity;
pub mod klog;
pub mod table;
pub mod testing;

pub use cpumatch_abi as abi;

#[doc(hidden)]
pub use paste;

pub use boot_cpu::{
    boot_cpu, boot_cpu_publish, boot_cpu_required, x86_match_cpu, x86_match_min_microcode_rev,
};
pub use config::{MatchConfig, Verbosity, config, config_from_cmdline, config_publish};
pub use cpu::{CpuidRegs, CpuidSource};
pub use cpu_match::{
    cpu_id_matches, match_cpu, match_cpu_data, match_cpu_index, match_cpu_terminated,
    meets_min_microcode_rev, required_microcode_rev,
};
pub use identity::{CpuIdentity, CpuInfo};
pub use klog::{
    KlogLevel, klog_get_level, klog_init, klog_is_enabled, klog_register_backend, klog_set_level,
};
