//! Discovered test cases and the markers they are discovered from.
//!
//! A test takes part in plan based selection by carrying a case id. The id
//! correlates the test function with an entry of an external test plan. In
//! source code the id is attached with the [`case!`](crate::case!) macro,
//! which registers a [`CaseMarker`] at link time. Discovery later turns every
//! marker into a [`TestCase`], parsing the string-typed id on the way.

use std::{
    borrow::Cow,
    fmt::Display,
    num::{NonZeroU64, ParseIntError},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Stable integer identifier of a test case.
///
/// Parsed case ids are always positive, `"0"` is rejected like any other
/// non-integer value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CaseId(pub u64);

impl From<u64> for CaseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for CaseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<NonZeroU64>().map(|id| Self(id.get()))
    }
}

impl Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One discovered test method.
///
/// The `class_name` is the fully qualified owner of the test. For tests
/// registered via [`case!`](crate::case!) this is the module path the macro
/// was invoked in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestCase {
    pub case_id: CaseId,
    pub class_name: Cow<'static, str>,
    pub method_name: Cow<'static, str>,
}

impl TestCase {
    pub fn new(
        case_id: impl Into<CaseId>,
        class_name: impl Into<Cow<'static, str>>,
        method_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    /// Build a test case from a raw marker value.
    ///
    /// Fails with [`Error::InvalidCaseId`] if `value` is not a positive integer. A
    /// marker with an unusable id never turns into a test case.
    pub fn from_marker(
        value: &str,
        class_name: impl Into<Cow<'static, str>>,
        method_name: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let class_name = class_name.into();
        let method_name = method_name.into();
        let case_id = value.parse().map_err(|source| Error::InvalidCaseId {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            value: value.to_string(),
            source,
        })?;

        Ok(Self {
            case_id,
            class_name,
            method_name,
        })
    }
}

/// A case id attached to a test function, as registered in source code.
///
/// The id stays a string until discovery, mirroring how it is written next
/// to the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMarker {
    pub case_id: &'static str,
    pub class_name: &'static str,
    pub method_name: &'static str,
}

impl CaseMarker {
    pub fn to_case(&self) -> Result<TestCase> {
        TestCase::from_marker(self.case_id, self.class_name, self.method_name)
    }
}

/// Attach a case id to a test function.
///
/// The marker is registered in [`CASE_MARKERS`](crate::inventory::CASE_MARKERS)
/// with the current module path as its class name, so a
/// [`MarkerInventory`](crate::inventory::MarkerInventory) scoped to that
/// module will discover it.
///
/// ```ignore
/// #[test]
/// fn login_with_valid_password() { /* ... */ }
/// kiplan::case!("1042", login_with_valid_password);
/// ```
#[macro_export]
macro_rules! case {
    ($case_id:expr, $method:ident) => {
        const _: () = {
            #[$crate::__private::linkme::distributed_slice($crate::inventory::CASE_MARKERS)]
            #[linkme(crate = $crate::__private::linkme)]
            static MARKER: $crate::case::CaseMarker = $crate::case::CaseMarker {
                case_id: $case_id,
                class_name: ::core::module_path!(),
                method_name: ::core::stringify!($method),
            };
        };
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn marker_value_is_parsed() {
        let marker = CaseMarker {
            case_id: "1042",
            class_name: "shop::checkout",
            method_name: "pays_with_card",
        };

        assert_eq!(
            marker.to_case().unwrap(),
            TestCase::new(1042, "shop::checkout", "pays_with_card")
        );
    }

    #[test]
    fn non_numeric_marker_is_rejected() {
        let err = TestCase::from_marker("abc", "shop::checkout", "pays_with_card").unwrap_err();

        match err {
            Error::InvalidCaseId {
                class_name,
                method_name,
                value,
                ..
            } => {
                assert_eq!(class_name, "shop::checkout");
                assert_eq!(method_name, "pays_with_card");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_negative_and_padded_values_are_rejected() {
        assert!(TestCase::from_marker("0", "a", "b").is_err());
        assert!(TestCase::from_marker("-1", "a", "b").is_err());
        assert!(TestCase::from_marker(" 1", "a", "b").is_err());
        assert!(TestCase::from_marker("", "a", "b").is_err());
    }

    #[test]
    fn case_id_displays_as_number() {
        assert_eq!(CaseId(7).to_string(), "7");
        assert_eq!("7".parse::<CaseId>().unwrap(), CaseId(7));
        assert!("0".parse::<CaseId>().is_err());
    }
}
