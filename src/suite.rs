//! Virtual suites and the suite descriptor handed to the host.
//!
//! The [`SuiteBuilder`] arranges filtered cases into a [`VirtualSuite`]: one
//! [`ClassGroup`] per distinct class, classes ordered by name and methods in
//! the order they were handed in. The host does not run a virtual suite
//! directly, it runs a [`Suite`], which wraps the groups into a single named
//! execution unit via [`VirtualSuite::into_suite`].

use serde::{Deserialize, Serialize};

use crate::case::TestCase;

/// The methods of one class that are part of a suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub class_name: String,
    pub method_names: Vec<String>,
}

/// A suite synthesized from the filtered inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualSuite {
    pub name: String,
    pub class_groups: Vec<ClassGroup>,
}

impl VirtualSuite {
    pub fn is_empty(&self) -> bool {
        self.class_groups.is_empty()
    }

    pub fn method_count(&self) -> usize {
        self.class_groups
            .iter()
            .map(|group| group.method_names.len())
            .sum()
    }

    /// Wrap all class groups into one execution unit called `test_name`.
    pub fn into_suite(self, test_name: impl Into<String>) -> Suite {
        Suite {
            name: self.name,
            tests: vec![SuiteTest {
                name: test_name.into(),
                classes: self.class_groups,
            }],
        }
    }
}

/// A suite as the host runs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    #[serde(default)]
    pub tests: Vec<SuiteTest>,
}

/// One execution unit of a [`Suite`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteTest {
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassGroup>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteBuilder;

impl SuiteBuilder {
    /// Group `cases` by class.
    ///
    /// Cases are stable sorted by class name, so methods of one class keep
    /// their relative input order. Repeated `(class, method)` pairs are kept
    /// as they are. No cases give a suite without groups.
    pub fn build(name: impl Into<String>, mut cases: Vec<TestCase>) -> VirtualSuite {
        cases.sort_by(|a, b| a.class_name.cmp(&b.class_name));

        let mut class_groups: Vec<ClassGroup> = Vec::new();
        for case in cases {
            match class_groups.last_mut() {
                Some(group) if group.class_name == case.class_name => {
                    group.method_names.push(case.method_name.into_owned())
                }
                _ => class_groups.push(ClassGroup {
                    class_name: case.class_name.into_owned(),
                    method_names: vec![case.method_name.into_owned()],
                }),
            }
        }

        VirtualSuite {
            name: name.into(),
            class_groups,
        }
    }
}
