use tracing::debug;

use crate::{
    Error, Result,
    case::{CaseMarker, TestCase},
    inventory::{InventoryProvider, in_package},
};

/// Every case marker registered with [`case!`](crate::case!) in this binary.
#[linkme::distributed_slice]
pub static CASE_MARKERS: [CaseMarker];

/// Discovers tests from the registered [`CASE_MARKERS`].
///
/// Only markers whose class lies in the target package are part of the
/// inventory. The target package is required: discovering without one fails
/// with [`Error::MissingTargetPackage`].
#[derive(Debug, Clone)]
pub struct MarkerInventory {
    target_package: Option<String>,
    markers: &'static [CaseMarker],
}

impl MarkerInventory {
    pub fn new(target_package: impl Into<String>) -> Self {
        Self::from_target(Some(target_package.into()))
    }

    pub fn from_target(target_package: Option<String>) -> Self {
        Self {
            target_package,
            markers: CASE_MARKERS.static_slice(),
        }
    }

    /// Discover from `markers` instead of the global registry.
    pub fn with_markers(self, markers: &'static [CaseMarker]) -> Self {
        Self { markers, ..self }
    }
}

impl InventoryProvider for MarkerInventory {
    fn discover(&self) -> Result<Vec<TestCase>> {
        let package = self
            .target_package
            .as_deref()
            .ok_or(Error::MissingTargetPackage)?;

        let cases = self
            .markers
            .iter()
            .filter(|marker| in_package(marker.class_name, package))
            .map(CaseMarker::to_case)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            package,
            registered = self.markers.len(),
            discovered = cases.len(),
            "discovered marked tests"
        );
        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static MARKERS: &[CaseMarker] = &[
        CaseMarker {
            case_id: "1",
            class_name: "shop::checkout",
            method_name: "pays_with_card",
        },
        CaseMarker {
            case_id: "2",
            class_name: "shop::cart",
            method_name: "adds_item",
        },
        CaseMarker {
            case_id: "3",
            class_name: "admin::users",
            method_name: "bans_user",
        },
    ];

    #[test]
    fn discovers_markers_of_target_package() {
        let cases = MarkerInventory::new("shop")
            .with_markers(MARKERS)
            .discover()
            .unwrap();

        assert_eq!(cases, vec![
            TestCase::new(1, "shop::checkout", "pays_with_card"),
            TestCase::new(2, "shop::cart", "adds_item"),
        ]);
    }

    #[test]
    fn missing_target_package_is_fatal() {
        let err = MarkerInventory::from_target(None)
            .with_markers(MARKERS)
            .discover()
            .unwrap_err();
        assert!(matches!(err, Error::MissingTargetPackage));
    }

    #[test]
    fn bad_marker_fails_discovery() {
        static BROKEN: &[CaseMarker] = &[
            CaseMarker {
                case_id: "1",
                class_name: "shop::checkout",
                method_name: "pays_with_card",
            },
            CaseMarker {
                case_id: "abc",
                class_name: "shop::checkout",
                method_name: "pays_with_voucher",
            },
        ];

        let err = MarkerInventory::new("shop")
            .with_markers(BROKEN)
            .discover()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCaseId { ref value, .. } if value == "abc"));
    }

    #[test]
    fn bad_marker_outside_package_is_not_scanned() {
        static OTHER: &[CaseMarker] = &[CaseMarker {
            case_id: "abc",
            class_name: "admin::users",
            method_name: "bans_user",
        }];

        let cases = MarkerInventory::new("shop")
            .with_markers(OTHER)
            .discover()
            .unwrap();
        assert!(cases.is_empty());
    }
}
