use crate::{
    Result,
    plan::{TestPlan, TestPlanSource},
};

/// A [`TestPlanSource`] that never has a plan.
///
/// Using it as the only source turns plan based selection off entirely.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct NoPlanSource;

impl TestPlanSource for NoPlanSource {
    fn resolve(&self) -> Result<Option<TestPlan>> {
        Ok(None)
    }
}
