//! The suite alteration pipeline.
//!
//! A host calls [`SuiteAlteration::alter`] once, before any test runs, with
//! the suites it was going to execute. The hook resolves the test plan,
//! discovers the inventory, filters it against the plan and groups the rest
//! into one suite that replaces the host's suites. The returned
//! [`Alteration`] tells the host whether that happened, and if not, why.

use std::borrow::Cow;

use tracing::{debug, info, warn};

use crate::{
    Result,
    config::PlanConfig,
    filter::{FilteredCases, PlanFilter},
    inventory::{InventoryProvider, MarkerInventory},
    plan::{EnvPlanSource, FilePlanSource, TestPlanSource, resolve_request},
    suite::{Suite, SuiteBuilder},
};

/// Name of the suite that replaces the host's suites.
pub const SUITE_NAME: &str = "Test Plan Suite";

/// Name of the single execution unit inside [`SUITE_NAME`].
pub const TEST_NAME: &str = "filtered run";

/// What [`SuiteAlteration::alter`] did to the host's suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alteration {
    Unchanged(Unchanged),
    Replaced { classes: usize, methods: usize },
}

/// Why the host's suites were left as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unchanged {
    /// No source had a plan.
    NoPlan,
    /// A plan was found but it requests no ids.
    EmptyPlan,
    /// The plan requests ids, but none of them is in the inventory.
    NoMatches { requested: usize },
}

impl Alteration {
    pub fn replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// A hook the host calls once, before any test runs, to rewrite its suites.
pub trait SuiteAlteration {
    fn alter(&self, suites: &mut Vec<Suite>) -> Result<Alteration>;
}

/// Replaces the host's suites with a suite of the tests the test plan asks for.
///
/// The sources are consulted in priority order. If a plan is found, the
/// inventory is discovered, filtered against the plan and grouped into a
/// single suite that replaces every suite the host had configured. Without a
/// plan, or if the plan selects nothing, the host's suites stay untouched.
pub struct TestPlanFilter<Sources, Inventory> {
    pub(crate) sources: Sources,
    pub(crate) inventory: Inventory,
    pub(crate) suite_name: Cow<'static, str>,
    pub(crate) test_name: Cow<'static, str>,
}

/// The default pipeline: file plan first, environment plan second, tests
/// discovered from registered case markers.
pub fn plan_filter(
    config: PlanConfig,
) -> TestPlanFilter<(FilePlanSource, EnvPlanSource), MarkerInventory> {
    TestPlanFilter {
        sources: (
            FilePlanSource::from_path(config.plan_path),
            EnvPlanSource::from_value(config.plan_env),
        ),
        inventory: MarkerInventory::from_target(config.target_package),
        suite_name: Cow::Borrowed(SUITE_NAME),
        test_name: Cow::Borrowed(TEST_NAME),
    }
}

impl TestPlanFilter<(FilePlanSource, EnvPlanSource), MarkerInventory> {
    pub fn from_config(config: PlanConfig) -> Self {
        plan_filter(config)
    }

    pub fn from_env() -> Self {
        plan_filter(PlanConfig::from_env())
    }
}

impl<Sources: TestPlanSource, Inventory: InventoryProvider> TestPlanFilter<Sources, Inventory> {
    #[tracing::instrument(skip_all, fields(suites = suites.len()))]
    pub fn alter(&self, suites: &mut Vec<Suite>) -> Result<Alteration> {
        let Some(request) = resolve_request(&self.sources)? else {
            debug!("no test plan found, keeping configured suites");
            return Ok(Alteration::Unchanged(Unchanged::NoPlan));
        };

        if request.is_empty() {
            debug!("test plan requests no tests, keeping configured suites");
            return Ok(Alteration::Unchanged(Unchanged::EmptyPlan));
        }

        let inventory = self.inventory.discover()?;
        let FilteredCases {
            cases,
            filtered_out,
        } = PlanFilter::new(&request).filter(inventory);

        if cases.is_empty() {
            warn!(
                requested = request.len(),
                filtered_out, "test plan matched no discovered test, keeping configured suites"
            );
            return Ok(Alteration::Unchanged(Unchanged::NoMatches {
                requested: request.len(),
            }));
        }

        let suite = SuiteBuilder::build(self.suite_name.as_ref(), cases);
        let alteration = Alteration::Replaced {
            classes: suite.class_groups.len(),
            methods: suite.method_count(),
        };
        info!(
            suite = %suite.name,
            classes = suite.class_groups.len(),
            methods = suite.method_count(),
            filtered_out,
            "replacing configured suites with test plan suite"
        );

        suites.clear();
        suites.push(suite.into_suite(self.test_name.as_ref()));
        Ok(alteration)
    }
}

impl<Sources: TestPlanSource, Inventory: InventoryProvider> SuiteAlteration
    for TestPlanFilter<Sources, Inventory>
{
    fn alter(&self, suites: &mut Vec<Suite>) -> Result<Alteration> {
        TestPlanFilter::alter(self, suites)
    }
}

impl<Sources, Inventory> TestPlanFilter<Sources, Inventory> {
    pub fn with_sources<WithSources: TestPlanSource>(
        self,
        sources: WithSources,
    ) -> TestPlanFilter<WithSources, Inventory> {
        TestPlanFilter {
            sources,
            inventory: self.inventory,
            suite_name: self.suite_name,
            test_name: self.test_name,
        }
    }

    pub fn with_inventory<WithInventory: InventoryProvider>(
        self,
        inventory: WithInventory,
    ) -> TestPlanFilter<Sources, WithInventory> {
        TestPlanFilter {
            sources: self.sources,
            inventory,
            suite_name: self.suite_name,
            test_name: self.test_name,
        }
    }

    pub fn with_suite_name(self, suite_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            suite_name: suite_name.into(),
            ..self
        }
    }

    pub fn with_test_name(self, test_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            test_name: test_name.into(),
            ..self
        }
    }
}
