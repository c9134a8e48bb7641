//! Discovery of the test inventory.
//!
//! The inventory is every test of the run that carries a case id. How the
//! tests are found is up to the [`InventoryProvider`]:
//! - [`MarkerInventory`] reads the markers registered with
//!   [`case!`](crate::case!) at link time
//! - [`ManifestInventory`] reads a manifest file produced at build time
//!
//! Discovery runs at most once per run and only if a test plan was found.
//! A marker with an id that is not an integer fails discovery as a whole.

use crate::{Result, case::TestCase};

mod marker;
pub use marker::*;

mod manifest;
pub use manifest::*;

/// A strategy for discovering all tests of the run that carry a case id.
///
/// `InventoryProvider` is implemented for `Fn() -> Result<Vec<TestCase>>`
/// and for a plain `Vec<TestCase>`.
pub trait InventoryProvider {
    fn discover(&self) -> Result<Vec<TestCase>>;
}

impl<F> InventoryProvider for F
where
    F: Fn() -> Result<Vec<TestCase>>,
{
    fn discover(&self) -> Result<Vec<TestCase>> {
        self()
    }
}

impl InventoryProvider for Vec<TestCase> {
    fn discover(&self) -> Result<Vec<TestCase>> {
        Ok(self.clone())
    }
}

/// Whether `class_name` lies in `package`.
///
/// Both `::` and `.` are accepted as path separators, so a class is in a
/// package if it is the package itself or nested anywhere below it.
pub(crate) fn in_package(class_name: &str, package: &str) -> bool {
    match class_name.strip_prefix(package) {
        Some("") => true,
        Some(rest) => rest.starts_with("::") || rest.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_membership() {
        assert!(in_package("shop::checkout", "shop"));
        assert!(in_package("shop::checkout::tests", "shop::checkout"));
        assert!(in_package("com.shop.Checkout", "com.shop"));
        assert!(in_package("shop", "shop"));
        assert!(!in_package("shopping::cart", "shop"));
        assert!(!in_package("cart::shop", "shop"));
    }
}
