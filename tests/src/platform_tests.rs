use cpumatch_abi::arch::x86_64::cpufeatures::{X86_FEATURE_AVX2, X86_FEATURE_HYBRID_CPU};
use cpumatch_abi::arch::x86_64::intel_family::{
    INTEL_CPU_TYPE_CORE, INTEL_RAPTORLAKE, INTEL_SAPPHIRERAPIDS_X,
};
use cpumatch_abi::arch::x86_64::vendor::{X86_VENDOR_HYGON, X86_VENDOR_ZHAOXIN};
use cpumatch_abi::{CpuMatchError, Vfm, X86CpuId, X86MinMicrocodeId};
use cpumatch_lib::cpu::{vendor_from_cpuid, x86_family, x86_model, x86_stepping};
use cpumatch_lib::define_test_suite;
use cpumatch_lib::testing::TestResult;
use cpumatch_lib::{
    CpuIdentity, CpuInfo, CpuidRegs, CpuidSource, KlogLevel, Verbosity, assert_eq_test, assert_ok,
    assert_some, assert_test, boot_cpu, boot_cpu_publish, boot_cpu_required, config,
    config_from_cmdline, config_publish, klog_get_level, pass, x86_match_cpu,
    x86_match_min_microcode_rev,
};

/// Raptor Lake P-core, stepping 1: canned CPUID answers.
struct RaptorLakeCore;

impl CpuidSource for RaptorLakeCore {
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs {
        match (leaf, subleaf) {
            // "GenuineIntel"
            (0x0, _) => CpuidRegs {
                eax: 0x20,
                ebx: 0x756e_6547,
                ecx: 0x6c65_746e,
                edx: 0x4965_6e69,
            },
            (0x1, _) => CpuidRegs {
                eax: 0x000b_0671,
                ..CpuidRegs::default()
            },
            (0x7, 0) => CpuidRegs {
                ebx: 1 << 5,
                edx: 1 << 15,
                ..CpuidRegs::default()
            },
            (0x1a, _) => CpuidRegs {
                eax: 0x4000_0001,
                ..CpuidRegs::default()
            },
            _ => CpuidRegs::default(),
        }
    }
}

// ============================================================================
// IDENTITY PROVIDER
// ============================================================================

pub fn test_signature_fields() -> TestResult {
    // Sapphire Rapids E-stepping.
    assert_eq_test!(x86_family(0x0008_06f8), 6);
    assert_eq_test!(x86_model(0x0008_06f8), 0x8f);
    assert_eq_test!(x86_stepping(0x0008_06f8), 8);
    // Hygon Dhyana: family 0xf + 9.
    assert_eq_test!(x86_family(0x0090_0f01), 0x18);
    pass!()
}

pub fn test_vendor_strings() -> TestResult {
    // "HygonGenuine"
    assert_eq_test!(vendor_from_cpuid(0x6f67_7948, 0x656e_6975, 0x6e65_476e), X86_VENDOR_HYGON);
    // "  Shanghai  "
    assert_eq_test!(vendor_from_cpuid(0x6853_2020, 0x2020_6961, 0x6867_6e61), X86_VENDOR_ZHAOXIN);
    pass!()
}

pub fn test_identity_from_cpuid() -> TestResult {
    let info = assert_ok!(CpuInfo::from_cpuid(&RaptorLakeCore));
    assert_eq_test!(info.vfm, Vfm::from_raw(INTEL_RAPTORLAKE));
    assert_eq_test!(info.stepping(), 1);
    assert_eq_test!(info.cpu_type(), INTEL_CPU_TYPE_CORE);
    assert_test!(info.has_feature(X86_FEATURE_AVX2));
    assert_test!(info.has_feature(X86_FEATURE_HYBRID_CPU));
    pass!()
}

// ============================================================================
// CONFIGURATION
// ============================================================================

pub fn test_cmdline_config() -> TestResult {
    let cfg = config_from_cmdline(Some(
        "root=/dev/nvme0n1p2 cpumatch.verbosity=verbose cpumatch.ignore_microcode=on cpumatch.log=warn",
    ));
    assert_eq_test!(cfg.verbosity, Verbosity::Verbose);
    assert_test!(cfg.ignore_microcode);
    assert_eq_test!(cfg.log_level, KlogLevel::Warn);

    let cfg =
        config_from_cmdline(Some("cpumatch.verbosity=loud cpumatch.ignore_microcode=perhaps"));
    assert_eq_test!(cfg.verbosity, Verbosity::Summary);
    assert_test!(!cfg.ignore_microcode);
    pass!()
}

// ============================================================================
// RUNNING CPU
// ============================================================================

/// Publication, lookups against the boot CPU, and the cmdline override of
/// the microcode gate.  Order matters: both the boot CPU and the config can
/// only be published once per run.
pub fn test_boot_cpu_flow() -> TestResult {
    let table = [
        X86CpuId::from_vfm(INTEL_SAPPHIRERAPIDS_X, "spr"),
        X86CpuId::from_vfm(INTEL_RAPTORLAKE, "rpl").with_cpu_type(INTEL_CPU_TYPE_CORE),
    ];
    let gate: [X86MinMicrocodeId; 1] = [X86CpuId::from_vfm(INTEL_RAPTORLAKE, 0x4121)];

    if boot_cpu().is_none() {
        assert_eq_test!(boot_cpu_required(), Err(CpuMatchError::NotPublished));
        assert_test!(x86_match_cpu(&table).is_none(), "lookup before publication");
        assert_test!(!x86_match_min_microcode_rev(&gate), "gate before publication");

        let info = assert_ok!(CpuInfo::from_cpuid(&RaptorLakeCore)).with_microcode(0x4119);
        assert_ok!(boot_cpu_publish(info));
    }

    let cpu = assert_some!(boot_cpu());
    assert_eq_test!(cpu.vfm, Vfm::from_raw(INTEL_RAPTORLAKE));
    assert_eq_test!(
        boot_cpu_publish(CpuInfo::default()),
        Err(CpuMatchError::AlreadyPublished)
    );

    let hit = assert_some!(x86_match_cpu(&table));
    assert_eq_test!(hit.driver_data, "rpl");

    assert_test!(!x86_match_min_microcode_rev(&gate), "old microcode passed");
    assert_test!(x86_match_min_microcode_rev(&[]));

    let active = config_publish(config_from_cmdline(Some(
        "cpumatch.ignore_microcode=1 cpumatch.log=debug",
    )));
    assert_test!(active.ignore_microcode);
    assert_eq_test!(config(), *active);
    assert_eq_test!(klog_get_level(), KlogLevel::Debug);
    assert_test!(x86_match_min_microcode_rev(&gate), "cmdline override ignored");
    pass!()
}

define_test_suite!(
    provider,
    [
        test_signature_fields,
        test_vendor_strings,
        test_identity_from_cpuid,
        test_cmdline_config,
    ]
);

define_test_suite!(running_cpu, [test_boot_cpu_flow]);
