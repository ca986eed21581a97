use cpumatch_abi::arch::x86_64::intel_family::{INTEL_SAPPHIRERAPIDS_X, ifm};
use cpumatch_abi::arch::x86_64::vendor::{X86_VENDOR_AMD, X86_VENDOR_INTEL};
use cpumatch_abi::{
    CpuMatchError, Vfm, X86_STEP_MAX, try_x86_steppings, vfm_family, vfm_make, vfm_model,
    vfm_vendor, x86_steppings,
};
use cpumatch_lib::define_test_suite;
use cpumatch_lib::testing::TestResult;
use cpumatch_lib::{assert_eq_test, assert_ne_test, assert_test, fail, pass};

// ============================================================================
// VFM CODEC
// ============================================================================

/// Every (vendor, family, model) triple decodes back to itself.
pub fn test_vfm_roundtrip_exhaustive() -> TestResult {
    for vendor in 0..=u8::MAX {
        for family in 0..=u8::MAX {
            for model in 0..=u8::MAX {
                let vfm = vfm_make(vendor, family, model);
                if vfm >> 24 != 0 {
                    return fail!("reserved byte set for {:#x}", vfm);
                }
                if vfm_vendor(vfm) != vendor || vfm_family(vfm) != family || vfm_model(vfm) != model
                {
                    return fail!("{:#x} did not decode to {}/{}/{}", vfm, vendor, family, model);
                }
            }
        }
    }
    pass!()
}

pub fn test_vfm_known_values() -> TestResult {
    assert_eq_test!(vfm_make(0, 6, 0x8F), 0x0000_068F);
    assert_eq_test!(INTEL_SAPPHIRERAPIDS_X, 0x0000_068F);
    assert_eq_test!(ifm(6, 0x8F), vfm_make(X86_VENDOR_INTEL, 6, 0x8F));
    assert_eq_test!(vfm_make(X86_VENDOR_AMD, 0x19, 0x01), 0x0002_1901);
    assert_eq_test!(vfm_make(0xff, 0xff, 0xff), 0x00ff_ffff);
    pass!()
}

/// Decoding ignores whatever sits in bits 24-31.
pub fn test_vfm_ignores_reserved_byte() -> TestResult {
    let vfm = 0xA5_02_19_61;
    assert_eq_test!(vfm_vendor(vfm), 0x02);
    assert_eq_test!(vfm_family(vfm), 0x19);
    assert_eq_test!(vfm_model(vfm), 0x61);
    assert_ne_test!(Vfm::from_raw(vfm), Vfm::new(2, 0x19, 0x61), "raw equality");
    pass!()
}

// ============================================================================
// STEPPING MASKS
// ============================================================================

pub fn test_stepping_masks() -> TestResult {
    assert_eq_test!(x86_steppings(2, 5), 0x003C);
    assert_eq_test!(x86_steppings(0, X86_STEP_MAX), 0xFFFF);
    for step in 0..=X86_STEP_MAX {
        assert_eq_test!(x86_steppings(step, step), 1u16 << step);
    }
    pass!()
}

pub fn test_checked_stepping_range() -> TestResult {
    assert_test!(try_x86_steppings(4, 4).is_ok());
    assert_eq_test!(
        try_x86_steppings(9, 3),
        Err(CpuMatchError::InvalidSteppingRange { min: 9, max: 3 })
    );
    assert_test!(try_x86_steppings(0, X86_STEP_MAX + 1).is_err(), "stepping 16 accepted");
    pass!()
}

define_test_suite!(
    vfm_codec,
    [
        test_vfm_roundtrip_exhaustive,
        test_vfm_known_values,
        test_vfm_ignores_reserved_byte,
        test_stepping_masks,
        test_checked_stepping_range,
    ]
);
