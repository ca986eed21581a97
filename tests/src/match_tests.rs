use cpumatch_abi::arch::x86_64::cpufeatures::{
    X86_FEATURE_AVX512F, X86_FEATURE_HYPERVISOR, X86_FEATURE_VMX,
};
use cpumatch_abi::arch::x86_64::intel_family::{
    INTEL_ALDERLAKE, INTEL_CPU_TYPE_ATOM, INTEL_CPU_TYPE_CORE, INTEL_SKYLAKE_X,
    X86_CENTAUR_FAM6_NANO,
};
use cpumatch_abi::arch::x86_64::vendor::{
    X86_VENDOR_AMD, X86_VENDOR_CENTAUR, X86_VENDOR_HYGON, X86_VENDOR_INTEL,
};
use cpumatch_abi::{FeatureSet, Vfm, X86CpuId, x86_steppings};
use cpumatch_lib::define_test_suite;
use cpumatch_lib::testing::TestResult;
use cpumatch_lib::{
    CpuInfo, assert_eq_test, assert_some, assert_test, cpu_id_matches, fail, match_cpu,
    match_cpu_data, match_cpu_index, match_cpu_terminated, pass, x86_cpu_id, x86_cpu_table,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quirk {
    SkxEarly,
    Skx,
    CentaurNano,
    Virtualized,
    Fallback,
}

static QUIRKS: [X86CpuId<Quirk>; 6] = x86_cpu_table![end = Quirk::Fallback;
    X86CpuId::from_vfm(INTEL_SKYLAKE_X, Quirk::SkxEarly).with_steppings(0, 3),
    X86CpuId::from_vfm(INTEL_SKYLAKE_X, Quirk::Skx),
    x86_cpu_id!(vendor = X86_VENDOR_CENTAUR, family = 6, model = X86_CENTAUR_FAM6_NANO; Quirk::CentaurNano),
    x86_cpu_id!(feature = X86_FEATURE_HYPERVISOR; Quirk::Virtualized),
    X86CpuId::any(Quirk::Fallback),
];

fn skx(stepping: u8) -> CpuInfo {
    CpuInfo::new(Vfm::from_raw(INTEL_SKYLAKE_X)).with_stepping(stepping)
}

// ============================================================================
// SELECTION
// ============================================================================

/// Stepping range 2..=5 accepts exactly 2, 3, 4 and 5.
pub fn test_stepping_range_selection() -> TestResult {
    let table = [X86CpuId::from_vfm(INTEL_SKYLAKE_X, ()).with_steppings(2, 5)];
    for stepping in 0..=15u8 {
        let expected = (2..=5).contains(&stepping);
        if match_cpu(&table, &skx(stepping)).is_some() != expected {
            return fail!("stepping {} expected match={}", stepping, expected);
        }
    }
    pass!()
}

/// A table whose first row is the terminator matches nothing.
pub fn test_leading_terminator_matches_nothing() -> TestResult {
    let table = [X86CpuId::end(0u8), X86CpuId::any(1)];
    assert_test!(match_cpu(&table, &skx(0)).is_none());
    assert_test!(match_cpu(&table, &CpuInfo::default()).is_none());
    pass!()
}

/// Specific entries ahead of a catch-all win for their CPU only.
pub fn test_table_order_is_priority() -> TestResult {
    assert_eq_test!(match_cpu_data(&QUIRKS, &skx(2)), Some(&Quirk::SkxEarly));
    assert_eq_test!(match_cpu_data(&QUIRKS, &skx(4)), Some(&Quirk::Skx));
    assert_eq_test!(match_cpu_index(&QUIRKS, &skx(4)), Some(1));

    let nano = CpuInfo::new(Vfm::new(X86_VENDOR_CENTAUR, 6, X86_CENTAUR_FAM6_NANO));
    assert_eq_test!(match_cpu_data(&QUIRKS, &nano), Some(&Quirk::CentaurNano));

    let amd = CpuInfo::new(Vfm::new(X86_VENDOR_AMD, 0x19, 0x61));
    assert_eq_test!(match_cpu_data(&QUIRKS, &amd), Some(&Quirk::Fallback));
    assert_eq_test!(match_cpu_index(&QUIRKS, &amd), Some(4));

    let guest = amd.with_feature(X86_FEATURE_HYPERVISOR);
    assert_eq_test!(match_cpu_data(&QUIRKS, &guest), Some(&Quirk::Virtualized));

    // Reordering changes the answer.
    let reversed = [X86CpuId::any(Quirk::Fallback), QUIRKS[0]];
    assert_eq_test!(match_cpu_data(&reversed, &skx(2)), Some(&Quirk::Fallback));
    pass!()
}

/// An all-ANY entry matches every identity, extremes included.
pub fn test_wildcard_breadth() -> TestResult {
    let catch_all = X86CpuId::any(());
    let extremes = [
        CpuInfo::default(),
        CpuInfo::new(Vfm::new(u8::MAX, u8::MAX, u8::MAX))
            .with_stepping(u8::MAX)
            .with_cpu_type(u8::MAX)
            .with_microcode(u32::MAX)
            .with_features(FeatureSet::from_words([u32::MAX; 22])),
        CpuInfo::new(Vfm::from_raw(INTEL_ALDERLAKE)).with_cpu_type(INTEL_CPU_TYPE_ATOM),
    ];
    for cpu in &extremes {
        assert_test!(cpu_id_matches(&catch_all, cpu), "catch-all rejected {:?}", cpu.vfm);
    }
    pass!()
}

/// Model 0 is indistinguishable from ANY, so the entry covers the whole family.
pub fn test_zero_model_is_wildcard() -> TestResult {
    let table = [X86CpuId::any("dhyana")
        .with_vendor(X86_VENDOR_HYGON)
        .with_family(0x18)
        .with_model(0)];
    for model in [0, 1, 0x10, u8::MAX] {
        let cpu = CpuInfo::new(Vfm::new(X86_VENDOR_HYGON, 0x18, model));
        assert_test!(match_cpu(&table, &cpu).is_some(), "model {:#x} missed", model);
    }
    let other_family = CpuInfo::new(Vfm::new(X86_VENDOR_HYGON, 0x19, 0));
    assert_test!(match_cpu(&table, &other_family).is_none());
    pass!()
}

/// Feature selection works with vendor, family and model all ANY.
pub fn test_feature_selector_alone() -> TestResult {
    let table = [x86_cpu_id!(feature = X86_FEATURE_AVX512F; "avx512")];
    let with = CpuInfo::new(Vfm::new(X86_VENDOR_AMD, 0x19, 0x11)).with_feature(X86_FEATURE_AVX512F);
    let without = with.with_features(FeatureSet::EMPTY.with(X86_FEATURE_VMX));

    assert_eq_test!(match_cpu_data(&table, &with), Some(&"avx512"));
    assert_test!(match_cpu(&table, &without).is_none());
    assert_test!(match_cpu(&table, &skx(4).with_feature(X86_FEATURE_AVX512F)).is_some());
    pass!()
}

/// Hybrid parts are told apart by core type only.
pub fn test_cpu_type_selector() -> TestResult {
    let table = [
        x86_cpu_id!(vfm = INTEL_ALDERLAKE, cpu_type = INTEL_CPU_TYPE_ATOM; 'e'),
        x86_cpu_id!(vfm = INTEL_ALDERLAKE, cpu_type = INTEL_CPU_TYPE_CORE; 'p'),
    ];
    let adl = CpuInfo::new(Vfm::from_raw(INTEL_ALDERLAKE));
    assert_eq_test!(match_cpu_data(&table, &adl.with_cpu_type(INTEL_CPU_TYPE_ATOM)), Some(&'e'));
    assert_eq_test!(match_cpu_data(&table, &adl.with_cpu_type(INTEL_CPU_TYPE_CORE)), Some(&'p'));
    assert_test!(match_cpu(&table, &adl).is_none(), "non-hybrid part matched");
    pass!()
}

/// The raw walk agrees with the slice walk on a terminated table.
pub fn test_terminated_walk() -> TestResult {
    let cpu = skx(7);
    let by_slice = assert_some!(match_cpu(&QUIRKS, &cpu));
    // SAFETY: QUIRKS ends with the terminator row.
    let by_ptr = assert_some!(unsafe { match_cpu_terminated(QUIRKS.as_ptr(), &cpu) });
    assert_test!(core::ptr::eq(by_slice, by_ptr));

    let mask = x86_steppings(0, 3);
    let early_only = [
        X86CpuId::any(1u8).with_vendor(X86_VENDOR_INTEL).with_stepping_mask(mask),
        X86CpuId::end(0),
    ];
    // SAFETY: terminated above.
    assert_test!(unsafe { match_cpu_terminated(early_only.as_ptr(), &cpu) }.is_none());
    pass!()
}

define_test_suite!(
    match_engine,
    [
        test_stepping_range_selection,
        test_leading_terminator_matches_nothing,
        test_table_order_is_priority,
        test_wildcard_breadth,
        test_zero_model_is_wildcard,
        test_feature_selector_alone,
        test_cpu_type_selector,
        test_terminated_walk,
    ]
);
