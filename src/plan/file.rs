use std::{fs, path::PathBuf};

use tracing::{debug, warn};

use crate::{
    Result,
    plan::{TestPlan, TestPlanSource},
};

/// Reads the test plan from a JSON file.
///
/// A missing path, an unreadable file or malformed JSON all mean the file
/// has no plan to offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlanSource {
    path: Option<PathBuf>,
}

impl FilePlanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl TestPlanSource for FilePlanSource {
    fn resolve(&self) -> Result<Option<TestPlan>> {
        let Some(path) = self.path.as_deref() else {
            debug!("no test plan file configured");
            return Ok(None);
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), %err, "test plan file is not readable");
                return Ok(None);
            }
        };

        match TestPlan::from_json(&content) {
            Ok(plan) => {
                debug!(path = %path.display(), tests = plan.tests.len(), "loaded test plan file");
                Ok(Some(plan))
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "test plan file is not a valid test plan");
                Ok(None)
            }
        }
    }
}
