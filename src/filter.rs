//! Plan filtering.
//!
//! A filter decides which tests of the inventory are part of this run. Tests
//! that are not requested by the plan are removed from the run entirely and
//! cannot be pulled back in by later steps.
//!
//! Filtering does not order anything. The resulting cases keep the order of
//! the inventory, and arranging them into a suite is the job of the
//! [`SuiteBuilder`](crate::suite::SuiteBuilder).

use crate::{case::TestCase, plan::PlanRequest};

/// The result of applying a [`PlanFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredCases {
    /// The cases that are included in the run.
    pub cases: Vec<TestCase>,

    /// The number of inventory cases that were filtered out.
    pub filtered_out: usize,
}

impl FilteredCases {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Keeps exactly the inventory cases whose case id is requested.
///
/// An empty request keeps nothing. Duplicate case ids in the inventory are
/// all kept if the id is requested.
#[derive(Debug, Clone, Copy)]
pub struct PlanFilter<'r> {
    request: &'r PlanRequest,
}

impl<'r> PlanFilter<'r> {
    pub fn new(request: &'r PlanRequest) -> Self {
        Self { request }
    }

    pub fn filter(&self, inventory: impl IntoIterator<Item = TestCase>) -> FilteredCases {
        let mut cases = Vec::new();
        let mut filtered_out = 0;
        for case in inventory {
            match self.request.contains(case.case_id) {
                true => cases.push(case),
                false => filtered_out += 1,
            }
        }

        FilteredCases {
            cases,
            filtered_out,
        }
    }
}
