//! Test plans and where they come from.
//!
//! A test plan is an externally supplied list of case ids that should run in
//! this invocation. It can come from several places, for example a plan file
//! written by a test management system or a value passed through the
//! environment of the CI job. Each origin is a [`TestPlanSource`].
//!
//! When more than one source is configured, exactly one of them decides the
//! plan. Sources are chained in priority order with tuples or a
//! `Vec<Box<dyn TestPlanSource>>`: the first source that yields a plan wins
//! and the remaining ones are not consulted at all.
//!
//! A source that is not configured, or whose data cannot be read, yields
//! `Ok(None)`. That is "no plan from here", not an error. Only a plan that
//! was found but carries a missing or non-integer id aborts the run, see
//! [`TestPlan::request`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, case::CaseId};

mod no;
pub use no::*;

mod file;
pub use file::*;

mod env;
pub use env::*;

/// A test plan as written by the plan producer.
///
/// The JSON shape is `{"version": "1.0", "tests": [{"id": "12", "selector": "a::b"}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub tests: Vec<TestPlanTest>,
}

/// One requested entry of a [`TestPlan`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlanTest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl TestPlan {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: None,
            tests: ids
                .into_iter()
                .map(|id| TestPlanTest {
                    id: Some(id.into()),
                    selector: None,
                })
                .collect(),
        }
    }

    /// Turn the plan into the set of requested case ids.
    ///
    /// An entry without an id fails with [`Error::MissingPlanId`], an id that
    /// is not a positive integer fails with [`Error::InvalidPlanId`].
    pub fn request(&self) -> Result<PlanRequest> {
        self.tests
            .iter()
            .map(|test| {
                let id = test.id.as_deref().ok_or_else(|| Error::MissingPlanId {
                    selector: test.selector.clone(),
                })?;
                id.parse::<CaseId>().map_err(|source| Error::InvalidPlanId {
                    value: id.to_string(),
                    source,
                })
            })
            .collect()
    }
}

/// The set of case ids requested for this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    ids: BTreeSet<CaseId>,
}

impl PlanRequest {
    pub fn contains(&self, id: CaseId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<CaseId> for PlanRequest {
    fn from_iter<T: IntoIterator<Item = CaseId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// A strategy for obtaining the test plan of this run.
///
/// For ad hoc sources `TestPlanSource` is implemented for
/// `Fn() -> Result<Option<TestPlan>>`.
pub trait TestPlanSource {
    /// Resolve the plan of this source.
    ///
    /// Returns `Ok(None)` if this source has no plan to offer.
    fn resolve(&self) -> Result<Option<TestPlan>>;
}

impl<F> TestPlanSource for F
where
    F: Fn() -> Result<Option<TestPlan>>,
{
    fn resolve(&self) -> Result<Option<TestPlan>> {
        self()
    }
}

impl<S: TestPlanSource> TestPlanSource for Option<S> {
    fn resolve(&self) -> Result<Option<TestPlan>> {
        match self {
            Some(source) => source.resolve(),
            None => Ok(None),
        }
    }
}

impl TestPlanSource for Vec<Box<dyn TestPlanSource>> {
    fn resolve(&self) -> Result<Option<TestPlan>> {
        for source in self {
            if let Some(plan) = source.resolve()? {
                return Ok(Some(plan));
            }
        }
        Ok(None)
    }
}

macro_rules! impl_source_chain {
    ($($source:ident),+) => {
        impl<$($source: TestPlanSource),+> TestPlanSource for ($($source,)+) {
            #[allow(non_snake_case)]
            fn resolve(&self) -> Result<Option<TestPlan>> {
                let ($($source,)+) = self;
                $(
                    if let Some(plan) = $source.resolve()? {
                        return Ok(Some(plan));
                    }
                )+
                Ok(None)
            }
        }
    };
}

impl_source_chain!(A);
impl_source_chain!(A, B);
impl_source_chain!(A, B, C);
impl_source_chain!(A, B, C, D);

/// Resolve `source` and turn its plan into a [`PlanRequest`].
pub fn resolve_request<S>(source: &S) -> Result<Option<PlanRequest>>
where
    S: TestPlanSource + ?Sized,
{
    source.resolve()?.map(|plan| plan.request()).transpose()
}
