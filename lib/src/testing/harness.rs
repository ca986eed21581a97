// Test harness types: TestSuiteResult, TestSuiteDesc, TestRunSummary.
// Suites are declared with define_test_suite! and handed to run_suites as a slice.

use super::TestResult;
use crate::config::Verbosity;
use crate::{klog_debug, klog_info};

/// Maximum number of test suites a single run records.
pub const HARNESS_MAX_SUITES: usize = 16;

/// Result of executing a single test suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl Default for TestSuiteResult {
    fn default() -> Self {
        Self::new("")
    }
}

impl TestSuiteResult {
    /// Create a new result with just the suite name set.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Fill in results from the suite counters.
    pub fn fill(&mut self, passed: u32, total: u32, skipped: u32) {
        self.total = total;
        self.passed = passed;
        self.skipped = skipped;
        self.failed = total.saturating_sub(passed).saturating_sub(skipped);
    }

    /// Check if no test in this suite failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn() -> TestSuiteResult;

#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub run: SuiteRunnerFn,
}

/// Aggregated results from running all test suites.
#[derive(Clone, Copy, Debug)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; HARNESS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl Default for TestRunSummary {
    fn default() -> Self {
        Self {
            suites: [TestSuiteResult::default(); HARNESS_MAX_SUITES],
            suite_count: 0,
            total_tests: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }
}

impl TestRunSummary {
    /// Add results from a single suite to the summary.
    ///
    /// Totals always count; the per-suite record is dropped once
    /// [`HARNESS_MAX_SUITES`] suites are stored.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        if let Some(slot) = self.suites.get_mut(self.suite_count) {
            *slot = *result;
            self.suite_count += 1;
        }
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
        self.skipped = self.skipped.saturating_add(result.skipped);
    }

    /// Recorded suites, in run order.
    pub fn suites(&self) -> &[TestSuiteResult] {
        &self.suites[..self.suite_count]
    }

    /// Check if all tests across all suites passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run one test function and log its outcome.
pub fn run_single_test<F>(name: &str, test: F) -> TestResult
where
    F: FnOnce() -> TestResult,
{
    let result = test();
    match result {
        TestResult::Pass => klog_debug!("TEST PASS: {}", name),
        TestResult::Skipped => klog_debug!("TEST SKIP: {}", name),
        TestResult::Fail => klog_info!("TEST FAIL: {}", name),
    }
    result
}

/// Run `suites` in order and collect their results.
pub fn run_suites(suites: &[TestSuiteDesc], verbosity: Verbosity) -> TestRunSummary {
    let mut summary = TestRunSummary::default();

    if verbosity != Verbosity::Quiet {
        klog_info!("TESTS: Starting {} test suites", suites.len());
    }

    for desc in suites {
        let result = (desc.run)();
        if verbosity == Verbosity::Verbose || !result.all_passed() {
            klog_info!(
                "SUITE {}: {}/{} passed, {} skipped",
                desc.name,
                result.passed,
                result.total,
                result.skipped
            );
        }
        summary.add_suite_result(&result);
    }

    if verbosity != Verbosity::Quiet {
        klog_info!(
            "TESTS: {} total, {} passed, {} failed, {} skipped",
            summary.total_tests,
            summary.passed,
            summary.failed,
            summary.skipped
        );
    }
    summary
}
