//! x86 vendor numbers and CPUID vendor signatures.

pub const X86_VENDOR_INTEL: u8 = 0;
pub const X86_VENDOR_CYRIX: u8 = 1;
pub const X86_VENDOR_AMD: u8 = 2;
pub const X86_VENDOR_UMC: u8 = 3;
pub const X86_VENDOR_CENTAUR: u8 = 5;
pub const X86_VENDOR_TRANSMETA: u8 = 7;
pub const X86_VENDOR_NSC: u8 = 8;
pub const X86_VENDOR_HYGON: u8 = 9;
pub const X86_VENDOR_ZHAOXIN: u8 = 10;
pub const X86_VENDOR_VORTEX: u8 = 11;
pub const X86_VENDOR_NUM: u8 = 12;

pub const X86_VENDOR_UNKNOWN: u8 = 0xff;

/// Known 12-byte CPUID vendor strings.  Some vendors shipped more than one.
const SIGNATURES: &[(&[u8; 12], u8)] = &[
    (b"GenuineIntel", X86_VENDOR_INTEL),
    (b"CyrixInstead", X86_VENDOR_CYRIX),
    (b"AuthenticAMD", X86_VENDOR_AMD),
    (b"AMDisbetter!", X86_VENDOR_AMD),
    (b"UMC UMC UMC ", X86_VENDOR_UMC),
    (b"CentaurHauls", X86_VENDOR_CENTAUR),
    (b"GenuineTMx86", X86_VENDOR_TRANSMETA),
    (b"TransmetaCPU", X86_VENDOR_TRANSMETA),
    (b"Geode by NSC", X86_VENDOR_NSC),
    (b"HygonGenuine", X86_VENDOR_HYGON),
    (b"  Shanghai  ", X86_VENDOR_ZHAOXIN),
    (b"Vortex86 SoC", X86_VENDOR_VORTEX),
];

/// Assemble the vendor string from CPUID leaf 0 (EBX, EDX, ECX order).
pub const fn vendor_signature(ebx: u32, ecx: u32, edx: u32) -> [u8; 12] {
    let b = ebx.to_le_bytes();
    let d = edx.to_le_bytes();
    let c = ecx.to_le_bytes();
    [
        b[0], b[1], b[2], b[3], d[0], d[1], d[2], d[3], c[0], c[1], c[2], c[3],
    ]
}

/// Map a CPUID vendor string to its `X86_VENDOR_*` number.
pub fn vendor_from_signature(signature: &[u8; 12]) -> u8 {
    SIGNATURES
        .iter()
        .find(|(sig, _)| *sig == signature)
        .map_or(X86_VENDOR_UNKNOWN, |(_, vendor)| *vendor)
}

pub const fn vendor_name(vendor: u8) -> &'static str {
    match vendor {
        X86_VENDOR_INTEL => "Intel",
        X86_VENDOR_CYRIX => "Cyrix",
        X86_VENDOR_AMD => "AMD",
        X86_VENDOR_UMC => "UMC",
        X86_VENDOR_CENTAUR => "Centaur",
        X86_VENDOR_TRANSMETA => "Transmeta",
        X86_VENDOR_NSC => "NSC",
        X86_VENDOR_HYGON => "Hygon",
        X86_VENDOR_ZHAOXIN => "Zhaoxin",
        X86_VENDOR_VORTEX => "Vortex",
        _ => "Unknown",
    }
}
