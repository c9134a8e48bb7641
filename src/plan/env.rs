use tracing::{debug, warn};

use crate::{
    Result,
    plan::{TestPlan, TestPlanSource},
};

/// Reads the test plan from a value taken from the environment.
///
/// The value is either a JSON test plan (if it starts with `{`) or a list of
/// case ids separated by commas or whitespace, like `"12, 15 19"`. Ids are
/// kept as written so that a bad id fails when the plan is turned into a
/// request, the same way it does for plan files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvPlanSource {
    value: Option<String>,
}

impl EnvPlanSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn from_value(value: Option<String>) -> Self {
        Self { value }
    }
}

impl TestPlanSource for EnvPlanSource {
    fn resolve(&self) -> Result<Option<TestPlan>> {
        let value = match self.value.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!("no test plan in environment");
                return Ok(None);
            }
        };

        if value.starts_with('{') {
            return match TestPlan::from_json(value) {
                Ok(plan) => Ok(Some(plan)),
                Err(err) => {
                    warn!(%err, "test plan in environment is not a valid test plan");
                    Ok(None)
                }
            };
        }

        let ids: Vec<&str> = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            debug!("test plan in environment lists no ids");
            return Ok(None);
        }

        debug!(tests = ids.len(), "loaded test plan from environment");
        Ok(Some(TestPlan::from_ids(ids)))
    }
}
