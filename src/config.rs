//! Configuration of a plan filtered run.
//!
//! All settings are captured once, at the entry point, into a [`PlanConfig`].
//! Nothing further down reads the process environment.

use std::{env, path::PathBuf};

/// Names the package whose marked tests make up the inventory.
pub const TARGET_PACKAGE_VAR: &str = "TEST_PACKAGE";

/// Path to a JSON test plan file, as exported by Allure TestOps jobs.
pub const PLAN_PATH_VAR: &str = "ALLURE_TESTPLAN_PATH";

/// A test plan passed inline, as JSON or as a list of ids.
pub const PLAN_VAR: &str = "TESTPLAN";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanConfig {
    pub target_package: Option<String>,
    pub plan_path: Option<PathBuf>,
    pub plan_env: Option<String>,
}

impl PlanConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            target_package: lookup(TARGET_PACKAGE_VAR).map(|package| package.trim().to_string()),
            plan_path: lookup(PLAN_PATH_VAR).map(PathBuf::from),
            plan_env: lookup(PLAN_VAR),
        }
    }

    pub fn with_target_package(self, target_package: impl Into<String>) -> Self {
        Self {
            target_package: Some(target_package.into()),
            ..self
        }
    }

    pub fn with_plan_path(self, plan_path: impl Into<PathBuf>) -> Self {
        Self {
            plan_path: Some(plan_path.into()),
            ..self
        }
    }

    pub fn with_plan_env(self, plan_env: impl Into<String>) -> Self {
        Self {
            plan_env: Some(plan_env.into()),
            ..self
        }
    }
}
