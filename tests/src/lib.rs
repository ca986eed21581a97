#![no_std]

#[cfg(test)]
extern crate std;

pub use cpumatch_lib::testing::{TestRunSummary, TestSuiteDesc, TestSuiteResult};
use cpumatch_lib::{Verbosity, klog_info};

pub mod codec_tests;
pub mod match_tests;
pub mod platform_tests;

/// Every suite, in run order.  `running_cpu` publishes process-wide state
/// and therefore goes last.
pub const ALL_SUITES: [TestSuiteDesc; 5] = [
    codec_tests::VFM_CODEC_SUITE_DESC,
    match_tests::MATCH_ENGINE_SUITE_DESC,
    microcode_tests::MICROCODE_GATE_SUITE_DESC,
    platform_tests::PROVIDER_SUITE_DESC,
    platform_tests::RUNNING_CPU_SUITE_DESC,
];

pub fn tests_run_all(verbosity: Verbosity) -> TestRunSummary {
    klog_info!("TESTS: Starting test suites");
    let summary = cpumatch_lib::testing::run_suites(&ALL_SUITES, verbosity);
    if summary.all_passed() {
        klog_info!("TESTS: all {} tests passed", summary.total_tests);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt;

    fn stdout_backend(args: fmt::Arguments<'_>) {
        std::println!("{}", args);
    }

    #[test]
    fn all_suites_pass() {
        cpumatch_lib::klog_register_backend(stdout_backend);
        let summary = tests_run_all(Verbosity::Verbose);

        for suite in summary.suites() {
            assert!(suite.all_passed(), "suite {} failed: {:?}", suite.name, suite);
        }
        assert_eq!(summary.suite_count, ALL_SUITES.len());
        assert!(summary.total_tests > 0);
        assert!(summary.all_passed());
    }
}
