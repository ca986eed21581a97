//! Assertion macros for harness tests.
//!
//! On failure each macro logs the call site and a description, then makes
//! the enclosing test function return [`TestResult::Fail`].  `assert_ok!` and
//! `assert_some!` evaluate to the unwrapped value on success.

use core::fmt;

use super::TestResult;

#[doc(hidden)]
pub fn assertion_failed(
    file: &str,
    line: u32,
    kind: &str,
    detail: fmt::Arguments<'_>,
) -> TestResult {
    crate::klog_info!("{} at {}:{}: {}", kind, file, line, detail);
    TestResult::Fail
}

#[macro_export]
macro_rules! assert_eq_test {
    ($left:expr, $right:expr $(, $msg:expr)?) => {{
        let left = $left;
        let right = $right;
        if left != right {
            return $crate::testing::assertion_failed(
                file!(),
                line!(),
                "ASSERT_EQ",
                ::core::format_args!(
                    "{}expected {:?}, got {:?}",
                    $crate::__assert_label!($($msg)?),
                    right,
                    left
                ),
            );
        }
    }};
}

#[macro_export]
macro_rules! assert_ne_test {
    ($left:expr, $right:expr $(, $msg:expr)?) => {{
        let left = $left;
        let right = $right;
        if left == right {
            return $crate::testing::assertion_failed(
                file!(),
                line!(),
                "ASSERT_NE",
                ::core::format_args!("{}both are {:?}", $crate::__assert_label!($($msg)?), left),
            );
        }
    }};
}

#[macro_export]
macro_rules! assert_test {
    ($cond:expr) => {{
        if !$cond {
            return $crate::testing::assertion_failed(
                file!(),
                line!(),
                "ASSERT",
                ::core::format_args!("{}", stringify!($cond)),
            );
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        if !$cond {
            return $crate::testing::assertion_failed(
                file!(),
                line!(),
                "ASSERT",
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($result:expr $(, $msg:expr)?) => {{
        match $result {
            Ok(v) => v,
            Err(e) => {
                return $crate::testing::assertion_failed(
                    file!(),
                    line!(),
                    "ASSERT_OK",
                    ::core::format_args!("{}got Err({:?})", $crate::__assert_label!($($msg)?), e),
                );
            }
        }
    }};
}

#[macro_export]
macro_rules! assert_some {
    ($option:expr $(, $msg:expr)?) => {{
        match $option {
            Some(v) => v,
            None => {
                return $crate::testing::assertion_failed(
                    file!(),
                    line!(),
                    "ASSERT_SOME",
                    ::core::format_args!("{}got None", $crate::__assert_label!($($msg)?)),
                );
            }
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_label {
    () => {
        ""
    };
    ($msg:expr) => {
        $crate::testing::AssertLabel($msg)
    };
}

/// Renders an optional assertion message as `"<msg> - "`.
#[doc(hidden)]
pub struct AssertLabel<'a>(pub &'a str);

impl fmt::Display for AssertLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.0)
    }
}
