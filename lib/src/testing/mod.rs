pub mod harness;

mod assertions;
#[doc(hidden)]
pub use assertions::{AssertLabel, assertion_failed};
pub use harness::{
    HARNESS_MAX_SUITES, TestRunSummary, TestSuiteDesc, TestSuiteResult, run_single_test,
    run_suites,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

#[macro_export]
macro_rules! run_test {
    ($passed:expr, $total:expr, $skipped:expr, $test_fn:expr) => {{
        $total += 1;
        let result = $crate::testing::run_single_test(stringify!($test_fn), || $test_fn());
        match result {
            $crate::testing::TestResult::Pass => $passed += 1,
            $crate::testing::TestResult::Skipped => $skipped += 1,
            $crate::testing::TestResult::Fail => {}
        }
        result
    }};

    ($test_fn:expr) => {{ $crate::testing::run_single_test(stringify!($test_fn), || $test_fn()) }};

    ($name:expr, $test_fn:expr) => {{ $crate::testing::run_single_test($name, || $test_fn()) }};
}

/// Define `run_<suite>_suite()` and `<SUITE>_SUITE_DESC` for a list of test
/// functions returning [`TestResult`].
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            pub fn [<run_ $suite_name _suite>]() -> $crate::testing::TestSuiteResult {
                let mut passed = 0u32;
                let mut total = 0u32;
                let mut skipped = 0u32;

                $(
                    $crate::run_test!(passed, total, skipped, $test_fn);
                )*

                let mut result = $crate::testing::TestSuiteResult::new(stringify!($suite_name));
                result.fill(passed, total, skipped);
                result
            }

            pub const [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc =
                $crate::testing::TestSuiteDesc {
                    name: stringify!($suite_name),
                    run: [<run_ $suite_name _suite>],
                };
        }
    };
}
