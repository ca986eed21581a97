pub mod cpufeatures;
pub mod cpuid;
pub mod intel_family;
pub mod msr;
pub mod vendor;

pub use msr::Msr;
pub use vendor::{vendor_from_signature, vendor_name, vendor_signature};
