//! Architecture-specific definitions.
//!
//! Everything here is plain data, so it is compiled on every target: match
//! tables are built and unit tested on the host as well as the kernel.

pub mod x86_64;

pub use x86_64::*;
